use crate::dtos::slot::{CreateSlotRequest, SlotResponse};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use database::services::slot::{NewSlot, SlotService};
use uuid::Uuid;

/// Get all appointment slots with their participants, ordered by start time
#[utoipa::path(
    get,
    path = "/api/agendamentos",
    responses(
        (status = 200, description = "List of slots with nested participants", body = [SlotResponse]),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Appointments"
)]
pub async fn list_slots(State(state): State<AppState>) -> Result<Json<Vec<SlotResponse>>, ApiError> {
    let slots = SlotService::list_slots(&state.db).await?;

    Ok(Json(slots.into_iter().map(Into::into).collect()))
}

/// Create an appointment slot together with its participant links.
/// The slot row and every link row commit together or not at all.
#[utoipa::path(
    post,
    path = "/api/agendamentos",
    request_body = CreateSlotRequest,
    responses(
        (status = 201, description = "Slot created, returned with its committed participants", body = SlotResponse),
        (status = 400, description = "End time not after start time"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 500, description = "Internal server error, nothing persisted")
    ),
    security(("jwt" = [])),
    tag = "Appointments"
)]
pub async fn create_slot(
    State(state): State<AppState>,
    Json(payload): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<SlotResponse>), ApiError> {
    if payload.end_time <= payload.start_time {
        return Err(ApiError::Validation(
            "end_time must be strictly after start_time".to_string(),
        ));
    }

    let created = SlotService::create_slot(
        &state.db,
        NewSlot {
            service_id: payload.service_id,
            professional_id: payload.professional_id,
            start_time: payload.start_time,
            end_time: payload.end_time,
            status: payload.status,
            participants: payload.participants,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Delete an appointment slot; its participant links are removed with it
#[utoipa::path(
    delete,
    path = "/api/agendamentos/{id}",
    params(("id" = Uuid, Path, description = "Slot ID")),
    responses(
        (status = 200, description = "Slot deleted, returned without participants"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 404, description = "Slot not found"),
        (status = 500, description = "Internal server error")
    ),
    security(("jwt" = [])),
    tag = "Appointments"
)]
pub async fn delete_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<database::entities::appointment_slot::Model>, ApiError> {
    let deleted = SlotService::delete_slot(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("appointment slot"))?;

    Ok(Json(deleted))
}
