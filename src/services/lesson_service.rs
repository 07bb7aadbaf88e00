use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Lesson,
        dto::request::{CreateLessonRequest, UpdateLessonRequest},
    },
    repositories::{CourseRepository, LessonRepository},
};

pub struct LessonService {
    lessons: Arc<dyn LessonRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl LessonService {
    pub fn new(lessons: Arc<dyn LessonRepository>, courses: Arc<dyn CourseRepository>) -> Self {
        Self { lessons, courses }
    }

    pub async fn create(&self, request: CreateLessonRequest) -> AppResult<Lesson> {
        request.validate()?;

        let lesson = Lesson::new(request.course_id, &request.title, request.scheduled_at);
        self.lessons.create(lesson).await
    }

    pub async fn get(&self, id: &Uuid) -> AppResult<Lesson> {
        self.lessons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lesson with id '{}' not found", id)))
    }

    pub async fn list_for_course(
        &self,
        course_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Lesson>> {
        self.courses.find_by_id(course_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Course with id '{}' not found", course_id))
        })?;

        self.lessons
            .find_by_course_paginated(course_id, offset, limit)
            .await
    }

    pub async fn update(&self, id: &Uuid, request: UpdateLessonRequest) -> AppResult<Lesson> {
        request.validate()?;

        let mut lesson = self.get(id).await?;

        if let Some(title) = request.title {
            lesson.title = title;
        }
        if let Some(scheduled_at) = request.scheduled_at {
            lesson.scheduled_at = scheduled_at;
        }

        self.lessons.update(lesson).await
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.lessons.delete(id).await
    }
}
