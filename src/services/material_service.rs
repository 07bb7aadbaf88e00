use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Material,
        dto::request::{CreateMaterialRequest, UpdateMaterialRequest},
    },
    repositories::{LessonRepository, MaterialRepository},
};

pub struct MaterialService {
    materials: Arc<dyn MaterialRepository>,
    lessons: Arc<dyn LessonRepository>,
}

impl MaterialService {
    pub fn new(materials: Arc<dyn MaterialRepository>, lessons: Arc<dyn LessonRepository>) -> Self {
        Self { materials, lessons }
    }

    pub async fn create_for_lesson(
        &self,
        lesson_id: &Uuid,
        request: CreateMaterialRequest,
    ) -> AppResult<Material> {
        request.validate()?;
        self.require_lesson(lesson_id).await?;

        let material = Material::new(*lesson_id, &request.title, request.text);
        self.materials.create(material).await
    }

    pub async fn list_for_lesson(&self, lesson_id: &Uuid) -> AppResult<Vec<Material>> {
        self.require_lesson(lesson_id).await?;
        self.materials.find_by_lesson(lesson_id).await
    }

    pub async fn update(&self, id: &Uuid, request: UpdateMaterialRequest) -> AppResult<Material> {
        request.validate()?;

        let mut material = self
            .materials
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Material with id '{}' not found", id)))?;

        if let Some(title) = request.title {
            material.title = title;
        }
        if let Some(text) = request.text {
            material.text = Some(text);
        }

        self.materials.update(material).await
    }

    pub async fn delete(&self, id: &Uuid) -> AppResult<()> {
        self.materials.delete(id).await
    }

    async fn require_lesson(&self, lesson_id: &Uuid) -> AppResult<()> {
        self.lessons.find_by_id(lesson_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Lesson with id '{}' not found", lesson_id))
        })?;
        Ok(())
    }
}
