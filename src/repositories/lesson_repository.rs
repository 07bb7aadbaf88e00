use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Lesson,
};

#[async_trait]
pub trait LessonRepository: Send + Sync {
    async fn create(&self, lesson: Lesson) -> AppResult<Lesson>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Lesson>>;
    /// All lessons of a course, ordered by lesson id ascending.
    async fn find_by_course(&self, course_id: &Uuid) -> AppResult<Vec<Lesson>>;
    async fn find_by_course_paginated(
        &self,
        course_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Lesson>>;
    async fn update(&self, lesson: Lesson) -> AppResult<Lesson>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoLessonRepository {
    collection: Collection<Lesson>,
}

impl MongoLessonRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("lessons");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let course_index = IndexModel::builder()
            .keys(doc! { "course_id": 1 })
            .options(IndexOptions::builder().name("course_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(course_index).await?;

        Ok(())
    }
}

#[async_trait]
impl LessonRepository for MongoLessonRepository {
    async fn create(&self, lesson: Lesson) -> AppResult<Lesson> {
        self.collection.insert_one(&lesson).await?;
        Ok(lesson)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Lesson>> {
        let lesson = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(lesson)
    }

    async fn find_by_course(&self, course_id: &Uuid) -> AppResult<Vec<Lesson>> {
        let lessons = self
            .collection
            .find(doc! { "course_id": course_id.to_string() })
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(lessons)
    }

    async fn find_by_course_paginated(
        &self,
        course_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<Vec<Lesson>> {
        let lessons = self
            .collection
            .find(doc! { "course_id": course_id.to_string() })
            .sort(doc! { "id": 1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(lessons)
    }

    async fn update(&self, lesson: Lesson) -> AppResult<Lesson> {
        let filter = doc! { "id": lesson.id.to_string() };

        let result = self.collection.replace_one(filter, &lesson).await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Lesson with id '{}' not found",
                lesson.id
            )));
        }

        Ok(lesson)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Lesson with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
