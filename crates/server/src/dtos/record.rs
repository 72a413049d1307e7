use database::entities::{patient, professional, service};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PatientPayload {
    pub name: String,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PatientResponse {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
}

impl From<patient::Model> for PatientResponse {
    fn from(model: patient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cpf: model.cpf,
            email: model.email,
            phone: model.phone,
            address: model.address,
            postal_code: model.postal_code,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ServicePayload {
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
}

fn default_capacity() -> i32 {
    1
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceResponse {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
    pub capacity: i32,
}

impl From<service::Model> for ServiceResponse {
    fn from(model: service::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            duration_minutes: model.duration_minutes,
            capacity: model.capacity,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfessionalPayload {
    pub name: String,
    pub commission_percentage: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfessionalResponse {
    pub id: Uuid,
    pub name: String,
    pub commission_percentage: f64,
}

impl From<professional::Model> for ProfessionalResponse {
    fn from(model: professional::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            commission_percentage: model.commission_percentage,
        }
    }
}
