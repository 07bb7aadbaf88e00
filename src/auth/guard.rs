use uuid::Uuid;

use crate::{
    auth::jwt::JwtService,
    errors::{AppError, AppResult},
    models::domain::user::{User, UserRole},
    repositories::UserRepository,
};

// One message for every unauthenticated outcome: missing token, bad
// signature, expiry, unknown subject. The cause never reaches the client.
const AUTH_FAILED: &str = "Authentication required";

fn unauthorized() -> AppError {
    AppError::Unauthorized(AUTH_FAILED.to_string())
}

/// Stage one: resolve a bearer token to a live user record.
///
/// The subject lookup is deliberate: a token stays cryptographically valid
/// after its user is deleted, so existence is re-checked on every request.
pub async fn authenticate(
    jwt: &JwtService,
    users: &dyn UserRepository,
    bearer: Option<&str>,
) -> AppResult<User> {
    let token = bearer.ok_or_else(unauthorized)?;
    let claims = jwt.validate(token).map_err(|_| unauthorized())?;
    let subject = Uuid::parse_str(&claims.sub).map_err(|_| unauthorized())?;

    users.find_by_id(&subject).await?.ok_or_else(unauthorized)
}

/// Stage two: admins only. Runs strictly after `authenticate`, so a
/// non-existent user can never reach the role check.
pub fn require_admin(user: &User) -> AppResult<()> {
    if user.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "Insufficient privileges for this action".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        auth::jwt::DEFAULT_TTL_MINUTES, config::Config, repositories::MockUserRepository,
    };

    fn jwt_service() -> JwtService {
        let config = Config::test_config();
        JwtService::new(&config.jwt_secret, DEFAULT_TTL_MINUTES)
    }

    #[tokio::test]
    async fn test_authenticate_resolves_user() {
        let jwt = jwt_service();
        let user = User::test_user("johndoe");
        let token = jwt.issue(&user.id).unwrap();

        let mut users = MockUserRepository::new();
        let found = user.clone();
        users
            .expect_find_by_id()
            .returning(move |_| Ok(Some(found.clone())));

        let resolved = authenticate(&jwt, &users, Some(&token)).await.unwrap();
        assert_eq!(resolved, user);
    }

    #[tokio::test]
    async fn test_authenticate_rejects_missing_token() {
        let jwt = jwt_service();
        let users = MockUserRepository::new();

        let result = authenticate(&jwt, &users, None).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_garbage_token_without_lookup() {
        let jwt = jwt_service();
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();

        let result = authenticate(&jwt, &users, Some("not.a.token")).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_deleted_subject() {
        let jwt = jwt_service();
        let user = User::test_user("ghost");
        let token = jwt.issue(&user.id).unwrap();

        // User was deleted after the token was issued.
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));

        let result = authenticate(&jwt, &users, Some(&token)).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_authenticate_rejects_expired_token() {
        let jwt = jwt_service();
        let user = User::test_user("latecomer");
        let token = jwt.issue_with_ttl(&user.id, -2).unwrap();

        let mut users = MockUserRepository::new();
        users.expect_find_by_id().never();

        let result = authenticate(&jwt, &users, Some(&token)).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn test_require_admin_passes_admin() {
        let admin = User::test_admin("root");
        assert!(require_admin(&admin).is_ok());
    }

    #[test]
    fn test_require_admin_rejects_plain_user() {
        let user = User::test_user("johndoe");
        assert!(matches!(
            require_admin(&user),
            Err(AppError::Forbidden(_))
        ));
    }
}
