use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Material {
    pub id: Uuid,
    pub lesson_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Material {
    pub fn new(lesson_id: Uuid, title: &str, text: Option<String>) -> Self {
        Material {
            id: Uuid::new_v4(),
            lesson_id,
            title: title.to_string(),
            text,
        }
    }
}
