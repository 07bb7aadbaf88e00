use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Links a user to a lesson they have worked on. At most one record exists
/// per (user_id, lesson_id) pair; the storage layer enforces this with a
/// unique compound index. Absence of a record means "not completed".
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct CompletionRecord {
    pub user_id: Uuid,
    pub lesson_id: Uuid,
    pub is_completed: bool,
}

impl CompletionRecord {
    pub fn completed(user_id: Uuid, lesson_id: Uuid) -> Self {
        CompletionRecord {
            user_id,
            lesson_id,
            is_completed: true,
        }
    }
}
