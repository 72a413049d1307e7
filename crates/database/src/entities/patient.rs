use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "patients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub cpf: String, // national identifier, unique
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::slot_participant::Entity")]
    SlotParticipants,
}

impl Related<super::slot_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SlotParticipants.def()
    }
}

// Many-to-many relationship with appointment slots
impl Related<super::appointment_slot::Entity> for Entity {
    fn to() -> RelationDef {
        super::slot_participant::Relation::AppointmentSlot.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::slot_participant::Relation::Patient.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
