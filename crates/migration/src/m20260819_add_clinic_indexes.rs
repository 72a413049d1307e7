use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Slot listings are ordered by start time
        manager
            .create_index(
                Index::create()
                    .name("idx-appointment_slots-start_time")
                    .table(AppointmentSlots::Table)
                    .col(AppointmentSlots::StartTime)
                    .to_owned(),
            )
            .await?;

        // A patient appears at most once per slot
        manager
            .create_index(
                Index::create()
                    .name("uq-slot_participants-slot_id-patient_id")
                    .table(SlotParticipants::Table)
                    .col(SlotParticipants::SlotId)
                    .col(SlotParticipants::PatientId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Record listings are ordered by name
        manager
            .create_index(
                Index::create()
                    .name("idx-patients-name")
                    .table(Patients::Table)
                    .col(Patients::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-patients-name")
                    .table(Patients::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq-slot_participants-slot_id-patient_id")
                    .table(SlotParticipants::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx-appointment_slots-start_time")
                    .table(AppointmentSlots::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AppointmentSlots {
    Table,
    StartTime,
}

#[derive(DeriveIden)]
enum SlotParticipants {
    Table,
    SlotId,
    PatientId,
}

#[derive(DeriveIden)]
enum Patients {
    Table,
    Name,
}
