use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, UpdateOptions},
    Collection, IndexModel,
};
use uuid::Uuid;

use crate::{db::Database, errors::AppResult, models::domain::CompletionRecord};

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// The caller's completion records restricted to the given lessons. The
    /// lesson filter is the join boundary: records for lessons outside the
    /// set are excluded here, which is what keeps per-course aggregation
    /// correct.
    async fn find_for_user_in_lessons(
        &self,
        user_id: &Uuid,
        lesson_ids: &[Uuid],
    ) -> AppResult<Vec<CompletionRecord>>;

    /// Marks a lesson completed for a user. Idempotent upsert: a single
    /// atomic store operation, so concurrent calls for the same pair cannot
    /// produce two records.
    async fn mark_completed(&self, user_id: &Uuid, lesson_id: &Uuid) -> AppResult<()>;
}

pub struct MongoProgressRepository {
    collection: Collection<CompletionRecord>,
}

impl MongoProgressRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("progress");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for progress collection");

        // The unique compound index is the real uniqueness guarantee for
        // (user_id, lesson_id); the upsert merely rides on it.
        let user_lesson_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "lesson_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_lesson_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_lesson_index).await?;

        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for MongoProgressRepository {
    async fn find_for_user_in_lessons(
        &self,
        user_id: &Uuid,
        lesson_ids: &[Uuid],
    ) -> AppResult<Vec<CompletionRecord>> {
        let ids: Vec<String> = lesson_ids.iter().map(|id| id.to_string()).collect();

        let records = self
            .collection
            .find(doc! {
                "user_id": user_id.to_string(),
                "lesson_id": { "$in": ids },
            })
            .await?
            .try_collect()
            .await?;

        Ok(records)
    }

    async fn mark_completed(&self, user_id: &Uuid, lesson_id: &Uuid) -> AppResult<()> {
        let filter = doc! {
            "user_id": user_id.to_string(),
            "lesson_id": lesson_id.to_string(),
        };
        let update = doc! { "$set": { "is_completed": true } };
        let options = UpdateOptions::builder().upsert(true).build();

        self.collection
            .update_one(filter, update)
            .with_options(options)
            .await?;

        Ok(())
    }
}
