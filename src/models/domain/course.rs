use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Course {
    pub fn new(title: &str, description: Option<String>) -> Self {
        Course {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description,
        }
    }
}
