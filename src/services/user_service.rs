use std::sync::Arc;

use validator::Validate;

use crate::{
    auth::password,
    errors::{AppError, AppResult},
    models::{
        domain::{User, UserRole},
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::UserResponse,
        },
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a user with the given role. Username and email are checked
    /// up front; the unique indexes catch whatever slips through under
    /// concurrent registration.
    pub async fn register(
        &self,
        request: RegisterRequest,
        role: UserRole,
    ) -> AppResult<UserResponse> {
        request.validate()?;

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Username '{}' is already registered",
                request.username
            )));
        }

        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(format!(
                "Email '{}' is already registered",
                request.email
            )));
        }

        let password_hash = password::hash_password(&request.password)?;
        let user = User::new(&request.username, &request.email, password_hash, role);
        let user = self.repository.create(user).await?;

        log::info!("Registered user '{}'", user.username);

        Ok(UserResponse::from(user))
    }

    /// Verifies credentials and returns the matching user. Unknown username
    /// and wrong password collapse into the same failure so the response
    /// reveals neither.
    pub async fn login(&self, request: LoginRequest) -> AppResult<User> {
        let user = self.repository.find_by_username(&request.username).await?;

        user.filter(|u| password::verify_password(&request.password, &u.password_hash))
            .ok_or_else(|| AppError::Unauthorized("Incorrect username or password".to_string()))
    }
}
