mod common;

use chrono::Utc;
use database::entities::{patient, professional, service};
use database::services::record;
use sea_orm::ActiveValue::Set;
use uuid::Uuid;

#[tokio::test]
async fn patients_list_in_name_order() {
    let db = common::connect().await;
    common::seed_patient(&db, "Carla", "333.333.333-33").await;
    common::seed_patient(&db, "Alice", "111.111.111-11").await;
    common::seed_patient(&db, "Bruno", "222.222.222-22").await;

    let patients = record::list_by_name::<patient::Entity>(&db).await.unwrap();

    let names: Vec<&str> = patients.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bruno", "Carla"]);
}

#[tokio::test]
async fn update_reports_missing_records() {
    let db = common::connect().await;
    let stored = common::seed_professional(&db, "Helena").await;

    let updated = record::update_record(
        &db,
        stored.id,
        professional::ActiveModel {
            id: Set(stored.id),
            name: Set("Helena Souza".to_string()),
            commission_percentage: Set(45.0),
            updated_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("existing professional should update");

    assert_eq!(updated.name, "Helena Souza");
    assert_eq!(updated.commission_percentage, 45.0);

    let ghost = Uuid::new_v4();
    let missing = record::update_record(
        &db,
        ghost,
        professional::ActiveModel {
            id: Set(ghost),
            name: Set("Nobody".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(missing.is_none());
}

#[tokio::test]
async fn delete_returns_the_removed_record() {
    let db = common::connect().await;
    let stored = common::seed_service(&db, "Pilates").await;

    let deleted = record::delete_record::<service::Entity>(&db, stored.id)
        .await
        .unwrap()
        .expect("existing service should delete");
    assert_eq!(deleted.id, stored.id);
    assert_eq!(deleted.name, "Pilates");

    let remaining = record::list_by_name::<service::Entity>(&db).await.unwrap();
    assert!(remaining.is_empty());

    let missing = record::delete_record::<service::Entity>(&db, stored.id)
        .await
        .unwrap();
    assert!(missing.is_none());
}
