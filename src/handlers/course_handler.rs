use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateCourseRequest, PaginationParams, UpdateCourseRequest},
};

#[post("/courses")]
pub async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.create(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(course))
}

#[get("/courses")]
pub async fn get_all_courses(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let pagination = query.into_inner();
    let courses = state
        .course_service
        .list(pagination.offset(), pagination.limit())
        .await?;
    Ok(HttpResponse::Ok().json(courses))
}

#[get("/courses/{course_id}")]
pub async fn get_course(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get(&course_id).await?;
    Ok(HttpResponse::Ok().json(course))
}

#[put("/courses/{course_id}")]
pub async fn update_course(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
    request: web::Json<UpdateCourseRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update(&course_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(course))
}

#[delete("/courses/{course_id}")]
pub async fn delete_course(
    state: web::Data<AppState>,
    course_id: web::Path<Uuid>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete(&course_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
