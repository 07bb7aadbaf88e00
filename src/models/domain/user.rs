use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, email: &str, password_hash: String, role: UserRole) -> Self {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            role,
            created_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
impl User {
    pub fn test_user(username: &str) -> Self {
        User::new(
            username,
            &format!("{}@example.com", username),
            "$2b$12$test.hash.placeholder".to_string(),
            UserRole::User,
        )
    }

    pub fn test_admin(username: &str) -> Self {
        User::new(
            username,
            &format!("{}@example.com", username),
            "$2b$12$test.hash.placeholder".to_string(),
            UserRole::Admin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            "johndoe",
            "john@example.com",
            "digest".to_string(),
            UserRole::User,
        );

        assert_eq!(user.username, "johndoe");
        assert_eq!(user.email, "john@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_distinct_users_get_distinct_ids() {
        let first = User::test_user("first");
        let second = User::test_user("second");
        assert_ne!(first.id, second.id);
    }
}
