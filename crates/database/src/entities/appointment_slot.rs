use models::SlotStatus;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appointment_slots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: Uuid,
    pub professional_id: Uuid,
    pub start_time: DateTime,
    pub end_time: DateTime,
    pub status: SlotStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::Id"
    )]
    Service,
    #[sea_orm(
        belongs_to = "super::professional::Entity",
        from = "Column::ProfessionalId",
        to = "super::professional::Column::Id"
    )]
    Professional,
    #[sea_orm(has_many = "super::slot_participant::Entity")]
    SlotParticipants,
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl Related<super::professional::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professional.def()
    }
}

impl Related<super::slot_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SlotParticipants.def()
    }
}

// Many-to-many relationship with patients
impl Related<super::patient::Entity> for Entity {
    fn to() -> RelationDef {
        super::slot_participant::Relation::Patient.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::slot_participant::Relation::AppointmentSlot
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
