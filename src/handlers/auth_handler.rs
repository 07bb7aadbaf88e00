use actix_web::{get, post, web, HttpResponse};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{
        domain::UserRole,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{TokenResponse, UserResponse},
        },
    },
};

#[post("/auth/register")]
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .user_service
        .register(request.into_inner(), UserRole::User)
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/auth/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.login(request.into_inner()).await?;
    let token = state.jwt_service.issue(&user.id)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(token)))
}

#[get("/auth/me")]
pub async fn me(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserResponse::from(auth.0)))
}

#[derive(Debug, Deserialize)]
pub struct AdminRegisterParams {
    master_key: String,
}

#[post("/auth/register/admin")]
pub async fn register_admin(
    state: web::Data<AppState>,
    web::Query(params): web::Query<AdminRegisterParams>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    if params.master_key != state.config.admin_master_key.expose_secret() {
        return Err(AppError::Forbidden(
            "Invalid master key for administrator registration".to_string(),
        ));
    }

    let response = state
        .user_service
        .register(request.into_inner(), UserRole::Admin)
        .await?;
    Ok(HttpResponse::Created().json(response))
}
