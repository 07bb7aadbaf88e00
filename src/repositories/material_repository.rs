use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use uuid::Uuid;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Material,
};

#[async_trait]
pub trait MaterialRepository: Send + Sync {
    async fn create(&self, material: Material) -> AppResult<Material>;
    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Material>>;
    async fn find_by_lesson(&self, lesson_id: &Uuid) -> AppResult<Vec<Material>>;
    async fn update(&self, material: Material) -> AppResult<Material>;
    async fn delete(&self, id: &Uuid) -> AppResult<()>;
}

pub struct MongoMaterialRepository {
    collection: Collection<Material>,
}

impl MongoMaterialRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("materials");
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

        let lesson_index = IndexModel::builder()
            .keys(doc! { "lesson_id": 1 })
            .options(IndexOptions::builder().name("lesson_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(lesson_index).await?;

        Ok(())
    }
}

#[async_trait]
impl MaterialRepository for MongoMaterialRepository {
    async fn create(&self, material: Material) -> AppResult<Material> {
        self.collection.insert_one(&material).await?;
        Ok(material)
    }

    async fn find_by_id(&self, id: &Uuid) -> AppResult<Option<Material>> {
        let material = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await?;
        Ok(material)
    }

    async fn find_by_lesson(&self, lesson_id: &Uuid) -> AppResult<Vec<Material>> {
        let materials = self
            .collection
            .find(doc! { "lesson_id": lesson_id.to_string() })
            .sort(doc! { "id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(materials)
    }

    async fn update(&self, material: Material) -> AppResult<Material> {
        let filter = doc! { "id": material.id.to_string() };

        let result = self.collection.replace_one(filter, &material).await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Material with id '{}' not found",
                material.id
            )));
        }

        Ok(material)
    }

    async fn delete(&self, id: &Uuid) -> AppResult<()> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!(
                "Material with id '{}' not found",
                id
            )));
        }

        Ok(())
    }
}
