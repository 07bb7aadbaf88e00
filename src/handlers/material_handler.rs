use actix_web::{delete, get, post, put, web, HttpResponse};
use uuid::Uuid;

use crate::{
    app_state::AppState,
    auth::{AdminUser, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateMaterialRequest, UpdateMaterialRequest},
};

#[post("/lessons/{lesson_id}/materials")]
pub async fn create_material_for_lesson(
    state: web::Data<AppState>,
    lesson_id: web::Path<Uuid>,
    request: web::Json<CreateMaterialRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let material = state
        .material_service
        .create_for_lesson(&lesson_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(material))
}

#[get("/lessons/{lesson_id}/materials")]
pub async fn get_materials_for_lesson(
    state: web::Data<AppState>,
    lesson_id: web::Path<Uuid>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let materials = state.material_service.list_for_lesson(&lesson_id).await?;
    Ok(HttpResponse::Ok().json(materials))
}

#[put("/materials/{material_id}")]
pub async fn update_material(
    state: web::Data<AppState>,
    material_id: web::Path<Uuid>,
    request: web::Json<UpdateMaterialRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let material = state
        .material_service
        .update(&material_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(material))
}

#[delete("/materials/{material_id}")]
pub async fn delete_material(
    state: web::Data<AppState>,
    material_id: web::Path<Uuid>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    state.material_service.delete(&material_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
