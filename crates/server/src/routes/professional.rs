use crate::dtos::record::{ProfessionalPayload, ProfessionalResponse};
use crate::error::ApiError;
use crate::routes::require_text;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use database::{entities::professional, services::record};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

/// Get all professionals, ordered by name
#[utoipa::path(
    get,
    path = "/api/profissionais",
    responses(
        (status = 200, description = "List of professionals", body = [ProfessionalResponse]),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Professionals"
)]
pub async fn list_professionals(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfessionalResponse>>, ApiError> {
    let professionals = record::list_by_name::<professional::Entity>(&state.db).await?;

    Ok(Json(professionals.into_iter().map(Into::into).collect()))
}

/// Register a new professional
#[utoipa::path(
    post,
    path = "/api/profissionais",
    request_body = ProfessionalPayload,
    responses(
        (status = 201, description = "Professional created", body = ProfessionalResponse),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Professionals"
)]
pub async fn create_professional(
    State(state): State<AppState>,
    Json(payload): Json<ProfessionalPayload>,
) -> Result<(StatusCode, Json<ProfessionalResponse>), ApiError> {
    require_text(&payload.name, "name")?;

    let now = Utc::now().naive_utc();
    let created = record::insert_record(
        &state.db,
        professional::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            commission_percentage: Set(payload.commission_percentage),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update an existing professional
#[utoipa::path(
    put,
    path = "/api/profissionais/{id}",
    params(("id" = Uuid, Path, description = "Professional ID")),
    request_body = ProfessionalPayload,
    responses(
        (status = 200, description = "Professional updated", body = ProfessionalResponse),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Professional not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Professionals"
)]
pub async fn update_professional(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProfessionalPayload>,
) -> Result<Json<ProfessionalResponse>, ApiError> {
    require_text(&payload.name, "name")?;

    let updated = record::update_record(
        &state.db,
        id,
        professional::ActiveModel {
            id: Set(id),
            name: Set(payload.name),
            commission_percentage: Set(payload.commission_percentage),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        },
    )
    .await?
    .ok_or(ApiError::NotFound("professional"))?;

    Ok(Json(updated.into()))
}

/// Delete a professional, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/profissionais/{id}",
    params(("id" = Uuid, Path, description = "Professional ID")),
    responses(
        (status = 200, description = "Professional deleted", body = ProfessionalResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Professional not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Professionals"
)]
pub async fn delete_professional(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfessionalResponse>, ApiError> {
    let deleted = record::delete_record::<professional::Entity>(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("professional"))?;

    Ok(Json(deleted.into()))
}
