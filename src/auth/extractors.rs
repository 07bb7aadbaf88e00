use actix_web::{dev::Payload, http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::guard,
    errors::AppError,
    models::domain::user::User,
};

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>().cloned().ok_or_else(|| {
        AppError::InternalError("Application state not configured".to_string())
    })
}

/// Extractor for handlers that require a logged-in caller.
pub struct AuthenticatedUser(pub User);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let bearer = bearer_token(req);

        Box::pin(async move {
            let state = state?;
            let user = guard::authenticate(
                &state.jwt_service,
                state.user_repository.as_ref(),
                bearer.as_deref(),
            )
            .await?;

            Ok(AuthenticatedUser(user))
        })
    }
}

/// Extractor for handlers that require administrator privilege. Resolves the
/// caller first, then checks the role, in that order.
pub struct AdminUser(pub User);

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = app_state(req);
        let bearer = bearer_token(req);

        Box::pin(async move {
            let state = state?;
            let user = guard::authenticate(
                &state.jwt_service,
                state.user_repository.as_ref(),
                bearer.as_deref(),
            )
            .await?;
            guard::require_admin(&user)?;

            Ok(AdminUser(user))
        })
    }
}
