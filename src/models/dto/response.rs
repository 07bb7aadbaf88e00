use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::domain::User;

/// Public view of a user record. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One lesson of a course together with the caller's completion state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LessonProgress {
    pub id: Uuid,
    pub title: String,
    pub scheduled_at: DateTime<Utc>,
    pub is_completed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseProgressSummary {
    pub total_lessons: i64,
    pub completed_lessons: i64,
    pub uncompleted_lessons: i64,
    pub progress_percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_hides_password_hash() {
        let user = User::test_user("johndoe");
        let response = UserResponse::from(user.clone());

        assert_eq!(response.id, user.id);
        assert_eq!(response.username, "johndoe");

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_token_response_is_bearer() {
        let response = TokenResponse::bearer("abc".to_string());
        assert_eq!(response.token_type, "bearer");
        assert_eq!(response.access_token, "abc");
    }
}
