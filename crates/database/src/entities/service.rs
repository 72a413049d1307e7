use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub capacity: i32, // how many patients fit in one slot
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::appointment_slot::Entity")]
    AppointmentSlots,
}

impl Related<super::appointment_slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppointmentSlots.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
