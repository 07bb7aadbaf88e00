use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{
        CreateLessonRequest, PaginationParams, ProgressQuery, UpdateLessonRequest,
    },
};

#[post("/lessons")]
pub async fn create_lesson(
    state: web::Data<AppState>,
    request: web::Json<CreateLessonRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let lesson = state.lesson_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(lesson))
}

#[get("/lessons/{lesson_id}")]
pub async fn get_lesson(
    state: web::Data<AppState>,
    lesson_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let lesson = state.lesson_service.get(&lesson_id).await?;
    Ok(HttpResponse::Ok().json(lesson))
}

#[put("/lessons/{lesson_id}")]
pub async fn update_lesson(
    state: web::Data<AppState>,
    lesson_id: web::Path<Uuid>,
    request: web::Json<UpdateLessonRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let lesson = state
        .lesson_service
        .update(&lesson_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(lesson))
}

#[delete("/lessons/{lesson_id}")]
pub async fn delete_lesson(
    state: web::Data<AppState>,
    lesson_id: web::Path<Uuid>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    state.lesson_service.delete(&lesson_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/lessons/{course_id}/lessons")]
pub async fn get_lessons_for_course(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
    query: web::Query<PaginationParams>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let lessons = state
        .lesson_service
        .list_for_course(&course_id, pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(lessons))
}

#[get("/lessons/{course_id}/progress")]
pub async fn get_course_progress(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
    query: web::Query<ProgressQuery>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let rows = state
        .progress_service
        .lessons_with_progress(&course_id, &auth.0.id, query.status)
        .await?;
    Ok(HttpResponse::Ok().json(rows))
}
