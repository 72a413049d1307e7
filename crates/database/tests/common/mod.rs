use chrono::Utc;
use database::entities::{patient, professional, service};
use database::services::record;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};
use uuid::Uuid;

/// Fresh in-memory database with the full schema applied. The pool is pinned
/// to one connection so every statement sees the same SQLite memory file.
pub async fn connect() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");

    Migrator::up(&db, None).await.expect("migrations failed");

    db
}

pub async fn seed_patient(db: &DatabaseConnection, name: &str, cpf: &str) -> patient::Model {
    let now = Utc::now().naive_utc();

    record::insert_record(
        db,
        patient::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            cpf: Set(cpf.to_string()),
            email: Set(None),
            phone: Set(None),
            address: Set(None),
            postal_code: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await
    .expect("failed to seed patient")
}

pub async fn seed_service(db: &DatabaseConnection, name: &str) -> service::Model {
    let now = Utc::now().naive_utc();

    record::insert_record(
        db,
        service::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            price: Set(120.0),
            duration_minutes: Set(30),
            capacity: Set(1),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await
    .expect("failed to seed service")
}

pub async fn seed_professional(db: &DatabaseConnection, name: &str) -> professional::Model {
    let now = Utc::now().naive_utc();

    record::insert_record(
        db,
        professional::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            commission_percentage: Set(40.0),
            created_at: Set(now),
            updated_at: Set(now),
        },
    )
    .await
    .expect("failed to seed professional")
}
