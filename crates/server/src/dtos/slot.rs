use chrono::NaiveDateTime;
use database::services::slot::{Participant, SlotWithParticipants};
use models::SlotStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSlotRequest {
    pub service_id: Uuid,
    pub professional_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[schema(value_type = String, example = "scheduled")]
    pub status: SlotStatus,
    /// Patient ids attending the slot; may be empty
    #[serde(default)]
    pub participants: Vec<Uuid>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ParticipantResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(participant: Participant) -> Self {
        Self {
            id: participant.id,
            name: participant.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotResponse {
    pub id: Uuid,
    pub service_id: Uuid,
    pub professional_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[schema(value_type = String, example = "scheduled")]
    pub status: SlotStatus,
    /// Always present; empty when nobody attends
    pub participants: Vec<ParticipantResponse>,
}

impl From<SlotWithParticipants> for SlotResponse {
    fn from(slot: SlotWithParticipants) -> Self {
        Self {
            id: slot.slot.id,
            service_id: slot.slot.service_id,
            professional_id: slot.slot.professional_id,
            start_time: slot.slot.start_time,
            end_time: slot.slot.end_time,
            status: slot.slot.status,
            participants: slot.participants.into_iter().map(Into::into).collect(),
        }
    }
}
