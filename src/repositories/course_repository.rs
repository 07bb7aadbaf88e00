use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Course,
};

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: Course) -> AppResult<Course>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>>;
    async fn find_all(&self, offset: i64, limit: i64) -> AppResult<Vec<Course>>;
    async fn update(&self, course: Course) -> AppResult<Course>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoCourseRepository {
    collection: Collection<Course>,
}

impl MongoCourseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("courses");
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

        self.collection.create_index(id_index).await?;
        Ok(())
    }
}

#[async_trait]
impl CourseRepository for MongoCourseRepository {
    async fn create(&self, course: Course) -> AppResult<Course> {
        self.collection.insert_one(&course).await?;
        Ok(course)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Course>> {
        let course = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(course)
    }

    async fn find_all(&self, offset: i64, limit: i64) -> AppResult<Vec<Course>> {
        let courses = self
            .collection
            .find(doc! {})
            .sort(doc! { "id": 1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;
        Ok(courses)
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        let filter = doc! { "id": course.id.to_string() };

        let result = self.collection.replace_one(filter, &course).await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                course.id
            )));
        }

        Ok(course)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
