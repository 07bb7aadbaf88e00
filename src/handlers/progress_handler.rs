use actix_web::{get, post, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::response::MessageResponse,
};

#[post("/progress/complete/{lesson_id}")]
pub async fn complete_lesson(
    state: web::Data<AppState>,
    lesson_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state
        .progress_service
        .mark_complete(&auth.0.id, &lesson_id)
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Lesson marked as completed".to_string(),
    }))
}

#[get("/progress/{course_id}/stats")]
pub async fn get_course_stats(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let summary = state
        .progress_service
        .course_summary(&course_id, &auth.0.id)
        .await?;

    Ok(HttpResponse::Ok().json(summary))
}
