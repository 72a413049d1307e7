use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create patients table
        manager
            .create_table(
                Table::create()
                    .table(Patients::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Patients::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Patients::Name).string().not_null())
                    .col(
                        ColumnDef::new(Patients::Cpf)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Patients::Email).string())
                    .col(ColumnDef::new(Patients::Phone).string())
                    .col(ColumnDef::new(Patients::Address).string())
                    .col(ColumnDef::new(Patients::PostalCode).string())
                    .col(ColumnDef::new(Patients::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Patients::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create services table
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Services::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Services::Name).string().not_null())
                    .col(ColumnDef::new(Services::Price).double().not_null())
                    .col(
                        ColumnDef::new(Services::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Services::Capacity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Services::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Services::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create professionals table
        manager
            .create_table(
                Table::create()
                    .table(Professionals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professionals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professionals::Name).string().not_null())
                    .col(
                        ColumnDef::new(Professionals::CommissionPercentage)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Professionals::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Create appointment_slots table
        manager
            .create_table(
                Table::create()
                    .table(AppointmentSlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppointmentSlots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AppointmentSlots::ServiceId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AppointmentSlots::ProfessionalId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AppointmentSlots::StartTime)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AppointmentSlots::EndTime)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AppointmentSlots::Status).text().not_null())
                    .col(
                        ColumnDef::new(AppointmentSlots::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AppointmentSlots::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointment_slots-service_id")
                            .from(AppointmentSlots::Table, AppointmentSlots::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointment_slots-professional_id")
                            .from(AppointmentSlots::Table, AppointmentSlots::ProfessionalId)
                            .to(Professionals::Table, Professionals::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Create slot_participants junction table (many-to-many); link rows
        // must disappear with their owning slot
        manager
            .create_table(
                Table::create()
                    .table(SlotParticipants::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SlotParticipants::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SlotParticipants::SlotId).uuid().not_null())
                    .col(
                        ColumnDef::new(SlotParticipants::PatientId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SlotParticipants::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-slot_participants-slot_id")
                            .from(SlotParticipants::Table, SlotParticipants::SlotId)
                            .to(AppointmentSlots::Table, AppointmentSlots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-slot_participants-patient_id")
                            .from(SlotParticipants::Table, SlotParticipants::PatientId)
                            .to(Patients::Table, Patients::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SlotParticipants::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AppointmentSlots::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professionals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Services::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Patients::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Patients {
    Table,
    Id,
    Name,
    Cpf,
    Email,
    Phone,
    Address,
    PostalCode,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Services {
    Table,
    Id,
    Name,
    Price,
    DurationMinutes,
    Capacity,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Professionals {
    Table,
    Id,
    Name,
    CommissionPercentage,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AppointmentSlots {
    Table,
    Id,
    ServiceId,
    ProfessionalId,
    StartTime,
    EndTime,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SlotParticipants {
    Table,
    Id,
    SlotId,
    PatientId,
    CreatedAt,
}
