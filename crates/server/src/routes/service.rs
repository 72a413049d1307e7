use crate::dtos::record::{ServicePayload, ServiceResponse};
use crate::error::ApiError;
use crate::routes::require_text;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use database::{entities::service, services::record};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

/// Get all offered services, ordered by name
#[utoipa::path(
    get,
    path = "/api/servicos",
    responses(
        (status = 200, description = "List of services", body = [ServiceResponse]),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Services"
)]
pub async fn list_services(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceResponse>>, ApiError> {
    let services = record::list_by_name::<service::Entity>(&state.db).await?;

    Ok(Json(services.into_iter().map(Into::into).collect()))
}

/// Register a new service
#[utoipa::path(
    post,
    path = "/api/servicos",
    request_body = ServicePayload,
    responses(
        (status = 201, description = "Service created", body = ServiceResponse),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Services"
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<ServicePayload>,
) -> Result<(StatusCode, Json<ServiceResponse>), ApiError> {
    require_text(&payload.name, "name")?;

    let now = Utc::now().naive_utc();
    let created = record::insert_record(
        &state.db,
        service::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            price: Set(payload.price),
            duration_minutes: Set(payload.duration_minutes),
            capacity: Set(payload.capacity),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update an existing service
#[utoipa::path(
    put,
    path = "/api/servicos/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    request_body = ServicePayload,
    responses(
        (status = 200, description = "Service updated", body = ServiceResponse),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Service not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Services"
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ServicePayload>,
) -> Result<Json<ServiceResponse>, ApiError> {
    require_text(&payload.name, "name")?;

    let updated = record::update_record(
        &state.db,
        id,
        service::ActiveModel {
            id: Set(id),
            name: Set(payload.name),
            price: Set(payload.price),
            duration_minutes: Set(payload.duration_minutes),
            capacity: Set(payload.capacity),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        },
    )
    .await?
    .ok_or(ApiError::NotFound("service"))?;

    Ok(Json(updated.into()))
}

/// Delete a service, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/servicos/{id}",
    params(("id" = Uuid, Path, description = "Service ID")),
    responses(
        (status = 200, description = "Service deleted", body = ServiceResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Service not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Services"
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ServiceResponse>, ApiError> {
    let deleted = record::delete_record::<service::Entity>(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("service"))?;

    Ok(Json(deleted.into()))
}
