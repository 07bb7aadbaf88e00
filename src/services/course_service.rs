use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Course,
        dto::request::{CreateCourseRequest, UpdateCourseRequest},
    },
    repositories::CourseRepository,
};

pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: CreateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let course = Course::new(&request.title, request.description);
        self.repository.create(course).await
    }

    pub async fn get(&self, id: &Uuid) -> AppResult<Course> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))
    }

    pub async fn list(&self, offset: i64, limit: i64) -> AppResult<Vec<Course>> {
        self.repository.find_all(offset, limit).await
    }

    /// Partial update: only the fields present in the request change.
    pub async fn update(&self, id: &Uuid, request: UpdateCourseRequest) -> AppResult<Course> {
        request.validate()?;

        let mut course = self.get(id).await?;

        if let Some(title) = request.title {
            course.title = title;
        }
        if let Some(description) = request.description {
            course.description = Some(description);
        }

        self.repository.update(course).await
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
