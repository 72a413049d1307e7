use crate::entities::{appointment_slot, patient, slot_participant};
use chrono::{NaiveDateTime, Utc};
use models::SlotStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

/// Input for creating one appointment slot together with its participant links
#[derive(Debug, Clone)]
pub struct NewSlot {
    pub service_id: Uuid,
    pub professional_id: Uuid,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub status: SlotStatus,
    pub participants: Vec<Uuid>,
}

#[derive(Debug, Clone)]
pub struct Participant {
    pub id: Uuid,
    pub name: String,
}

/// A slot together with its resolved participant list. `participants` is
/// empty, never absent, for a slot nobody attends.
#[derive(Debug, Clone)]
pub struct SlotWithParticipants {
    pub slot: appointment_slot::Model,
    pub participants: Vec<Participant>,
}

pub struct SlotService;

impl SlotService {
    /// Creates one slot row plus one participant link per distinct patient
    /// reference, all inside a single transaction. Either everything commits
    /// or nothing persists. Returns the slot as re-read after the commit,
    /// not an echo of the input.
    pub async fn create_slot(
        db: &DatabaseConnection,
        input: NewSlot,
    ) -> Result<SlotWithParticipants, DbErr> {
        let slot_id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        // Repeated patient references collapse to one link
        let mut seen = BTreeSet::new();
        let links: Vec<slot_participant::ActiveModel> = input
            .participants
            .iter()
            .copied()
            .filter(|patient_id| seen.insert(*patient_id))
            .map(|patient_id| slot_participant::ActiveModel {
                id: Set(Uuid::new_v4()),
                slot_id: Set(slot_id),
                patient_id: Set(patient_id),
                created_at: Set(now),
            })
            .collect();

        let slot = appointment_slot::ActiveModel {
            id: Set(slot_id),
            service_id: Set(input.service_id),
            professional_id: Set(input.professional_id),
            start_time: Set(input.start_time),
            end_time: Set(input.end_time),
            status: Set(input.status),
            created_at: Set(now),
            updated_at: Set(now),
        };

        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                slot.insert(txn).await?;

                if !links.is_empty() {
                    slot_participant::Entity::insert_many(links).exec(txn).await?;
                }

                Ok(())
            })
        })
        .await
        .map_err(|err| match err {
            TransactionError::Connection(e) => e,
            TransactionError::Transaction(e) => e,
        })?;

        Self::get_slot(db, slot_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("appointment slot {slot_id} missing after commit"))
        })
    }

    /// Fetches a single slot with its participant list
    pub async fn get_slot(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<SlotWithParticipants>, DbErr> {
        let (slot, rows) = futures::try_join!(
            appointment_slot::Entity::find_by_id(id).one(db),
            slot_participant::Entity::find()
                .filter(slot_participant::Column::SlotId.eq(id))
                .find_also_related(patient::Entity)
                .all(db),
        )?;

        Ok(slot.map(|slot| SlotWithParticipants {
            slot,
            participants: collect_participants(rows),
        }))
    }

    /// Lists all slots ordered by start time ascending, each annotated with
    /// its participants ordered by patient name
    pub async fn list_slots(db: &DatabaseConnection) -> Result<Vec<SlotWithParticipants>, DbErr> {
        let slots = appointment_slot::Entity::find()
            .order_by_asc(appointment_slot::Column::StartTime)
            .all(db)
            .await?;

        if slots.is_empty() {
            return Ok(vec![]);
        }

        let slot_ids: Vec<Uuid> = slots.iter().map(|s| s.id).collect();

        // Batch fetch all participant links with their patients
        let rows = slot_participant::Entity::find()
            .filter(slot_participant::Column::SlotId.is_in(slot_ids))
            .find_also_related(patient::Entity)
            .all(db)
            .await?;

        let mut participants_by_slot: HashMap<Uuid, Vec<Participant>> = HashMap::new();
        for (link, maybe_patient) in rows {
            if let Some(patient) = maybe_patient {
                participants_by_slot
                    .entry(link.slot_id)
                    .or_default()
                    .push(Participant {
                        id: patient.id,
                        name: patient.name,
                    });
            }
        }

        Ok(slots
            .into_iter()
            .map(|slot| {
                let mut participants = participants_by_slot.remove(&slot.id).unwrap_or_default();
                participants.sort_by(|a, b| a.name.cmp(&b.name));
                SlotWithParticipants { slot, participants }
            })
            .collect())
    }

    /// Deletes a slot by id, returning the deleted record. Participant links
    /// go with it through the cascade; no separate cleanup.
    pub async fn delete_slot(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<appointment_slot::Model>, DbErr> {
        let Some(slot) = appointment_slot::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        appointment_slot::Entity::delete_by_id(id).exec(db).await?;

        Ok(Some(slot))
    }
}

fn collect_participants(rows: Vec<(slot_participant::Model, Option<patient::Model>)>) -> Vec<Participant> {
    let mut participants: Vec<Participant> = rows
        .into_iter()
        .filter_map(|(_, patient)| patient)
        .map(|patient| Participant {
            id: patient.id,
            name: patient.name,
        })
        .collect();

    participants.sort_by(|a, b| a.name.cmp(&b.name));
    participants
}
