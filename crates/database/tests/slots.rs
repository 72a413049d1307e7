mod common;

use chrono::{NaiveDate, NaiveDateTime};
use database::entities::{appointment_slot, slot_participant};
use database::services::slot::{NewSlot, SlotService};
use models::SlotStatus;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use uuid::Uuid;

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn new_slot(
    service_id: Uuid,
    professional_id: Uuid,
    participants: Vec<Uuid>,
) -> NewSlot {
    NewSlot {
        service_id,
        professional_id,
        start_time: at(10, 0),
        end_time: at(10, 30),
        status: SlotStatus::Scheduled,
        participants,
    }
}

async fn slot_count(db: &DatabaseConnection) -> u64 {
    appointment_slot::Entity::find().count(db).await.unwrap()
}

async fn link_count(db: &DatabaseConnection) -> u64 {
    slot_participant::Entity::find().count(db).await.unwrap()
}

#[tokio::test]
async fn create_slot_with_participants_links_each_patient() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Physiotherapy").await;
    let professional = common::seed_professional(&db, "Helena").await;
    let bruno = common::seed_patient(&db, "Bruno", "111.111.111-11").await;
    let alice = common::seed_patient(&db, "Alice", "222.222.222-22").await;

    let created = SlotService::create_slot(
        &db,
        new_slot(service.id, professional.id, vec![bruno.id, alice.id]),
    )
    .await
    .unwrap();

    assert_eq!(created.slot.service_id, service.id);
    assert_eq!(created.slot.professional_id, professional.id);
    assert_eq!(created.slot.status, SlotStatus::Scheduled);
    assert_eq!(created.participants.len(), 2);
    // participants come back ordered by name
    assert_eq!(created.participants[0].name, "Alice");
    assert_eq!(created.participants[0].id, alice.id);
    assert_eq!(created.participants[1].name, "Bruno");
    assert_eq!(link_count(&db).await, 2);

    // the immediate list query agrees with the creation response
    let listed = SlotService::list_slots(&db).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].slot.id, created.slot.id);
    assert_eq!(listed[0].participants.len(), 2);
    assert_eq!(listed[0].participants[0].id, alice.id);
    assert_eq!(listed[0].participants[1].id, bruno.id);
}

#[tokio::test]
async fn slot_without_participants_is_valid_and_lists_empty() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Pilates").await;
    let professional = common::seed_professional(&db, "Marcos").await;

    let created = SlotService::create_slot(&db, new_slot(service.id, professional.id, vec![]))
        .await
        .unwrap();

    assert!(created.participants.is_empty());
    assert_eq!(link_count(&db).await, 0);

    let listed = SlotService::list_slots(&db).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].participants.is_empty());
}

#[tokio::test]
async fn duplicate_patient_references_collapse_to_one_link() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Physiotherapy").await;
    let professional = common::seed_professional(&db, "Helena").await;
    let patient = common::seed_patient(&db, "Carla", "333.333.333-33").await;

    let created = SlotService::create_slot(
        &db,
        new_slot(service.id, professional.id, vec![patient.id, patient.id]),
    )
    .await
    .unwrap();

    assert_eq!(created.participants.len(), 1);
    assert_eq!(created.participants[0].id, patient.id);
    assert_eq!(link_count(&db).await, 1);
}

#[tokio::test]
async fn unknown_patient_rolls_back_slot_and_links() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Physiotherapy").await;
    let professional = common::seed_professional(&db, "Helena").await;
    let patient = common::seed_patient(&db, "Carla", "333.333.333-33").await;

    let result = SlotService::create_slot(
        &db,
        new_slot(service.id, professional.id, vec![patient.id, Uuid::new_v4()]),
    )
    .await;

    assert!(result.is_err());
    // all-or-nothing: no partial slot, no partial participant set
    assert_eq!(slot_count(&db).await, 0);
    assert_eq!(link_count(&db).await, 0);
}

#[tokio::test]
async fn unknown_professional_rolls_back_everything() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Physiotherapy").await;
    let patient = common::seed_patient(&db, "Carla", "333.333.333-33").await;

    let result = SlotService::create_slot(
        &db,
        new_slot(service.id, Uuid::new_v4(), vec![patient.id]),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(slot_count(&db).await, 0);
    assert_eq!(link_count(&db).await, 0);
}

#[tokio::test]
async fn deleting_a_slot_cascades_its_links() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Physiotherapy").await;
    let professional = common::seed_professional(&db, "Helena").await;
    let bruno = common::seed_patient(&db, "Bruno", "111.111.111-11").await;
    let alice = common::seed_patient(&db, "Alice", "222.222.222-22").await;

    let created = SlotService::create_slot(
        &db,
        new_slot(service.id, professional.id, vec![bruno.id, alice.id]),
    )
    .await
    .unwrap();
    assert_eq!(link_count(&db).await, 2);

    let deleted = SlotService::delete_slot(&db, created.slot.id).await.unwrap();
    assert_eq!(deleted.unwrap().id, created.slot.id);

    // no dangling links survive the slot
    assert_eq!(slot_count(&db).await, 0);
    assert_eq!(link_count(&db).await, 0);
    assert!(SlotService::get_slot(&db, created.slot.id).await.unwrap().is_none());

    // a second delete reports not-found
    assert!(SlotService::delete_slot(&db, created.slot.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn list_orders_slots_by_start_time() {
    let db = common::connect().await;
    let service = common::seed_service(&db, "Physiotherapy").await;
    let professional = common::seed_professional(&db, "Helena").await;

    let afternoon = SlotService::create_slot(
        &db,
        NewSlot {
            start_time: at(14, 0),
            end_time: at(14, 30),
            ..new_slot(service.id, professional.id, vec![])
        },
    )
    .await
    .unwrap();

    let morning = SlotService::create_slot(
        &db,
        NewSlot {
            start_time: at(9, 0),
            end_time: at(9, 30),
            ..new_slot(service.id, professional.id, vec![])
        },
    )
    .await
    .unwrap();

    let listed = SlotService::list_slots(&db).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].slot.id, morning.slot.id);
    assert_eq!(listed[1].slot.id, afternoon.slot.id);
}
