use crate::dtos::record::{PatientPayload, PatientResponse};
use crate::error::ApiError;
use crate::routes::require_text;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use database::{entities::patient, services::record};
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

/// Get all patients, ordered by name
#[utoipa::path(
    get,
    path = "/api/pacientes",
    responses(
        (status = 200, description = "List of patients", body = [PatientResponse]),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Patients"
)]
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientResponse>>, ApiError> {
    let patients = record::list_by_name::<patient::Entity>(&state.db).await?;

    Ok(Json(patients.into_iter().map(Into::into).collect()))
}

/// Register a new patient
#[utoipa::path(
    post,
    path = "/api/pacientes",
    request_body = PatientPayload,
    responses(
        (status = 201, description = "Patient created", body = PatientResponse),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Patients"
)]
pub async fn create_patient(
    State(state): State<AppState>,
    Json(payload): Json<PatientPayload>,
) -> Result<(StatusCode, Json<PatientResponse>), ApiError> {
    require_text(&payload.name, "name")?;
    require_text(&payload.cpf, "cpf")?;

    let now = Utc::now().naive_utc();
    let created = record::insert_record(
        &state.db,
        patient::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(payload.name),
            cpf: Set(payload.cpf),
            email: Set(payload.email),
            phone: Set(payload.phone),
            address: Set(payload.address),
            postal_code: Set(payload.postal_code),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Update an existing patient
#[utoipa::path(
    put,
    path = "/api/pacientes/{id}",
    params(("id" = Uuid, Path, description = "Patient ID")),
    request_body = PatientPayload,
    responses(
        (status = 200, description = "Patient updated", body = PatientResponse),
        (status = 400, description = "Missing required field"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Patients"
)]
pub async fn update_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PatientPayload>,
) -> Result<Json<PatientResponse>, ApiError> {
    require_text(&payload.name, "name")?;
    require_text(&payload.cpf, "cpf")?;

    let updated = record::update_record(
        &state.db,
        id,
        patient::ActiveModel {
            id: Set(id),
            name: Set(payload.name),
            cpf: Set(payload.cpf),
            email: Set(payload.email),
            phone: Set(payload.phone),
            address: Set(payload.address),
            postal_code: Set(payload.postal_code),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        },
    )
    .await?
    .ok_or(ApiError::NotFound("patient"))?;

    Ok(Json(updated.into()))
}

/// Delete a patient, returning the removed record
#[utoipa::path(
    delete,
    path = "/api/pacientes/{id}",
    params(("id" = Uuid, Path, description = "Patient ID")),
    responses(
        (status = 200, description = "Patient deleted", body = PatientResponse),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Patient not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Patients"
)]
pub async fn delete_patient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PatientResponse>, ApiError> {
    let deleted = record::delete_record::<patient::Entity>(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("patient"))?;

    Ok(Json(deleted.into()))
}
