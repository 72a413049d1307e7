use crate::routes::{auth, health, patient, professional, root, service, slot};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "jwt",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        health::health,
        auth::login,
        patient::list_patients,
        patient::create_patient,
        patient::update_patient,
        patient::delete_patient,
        service::list_services,
        service::create_service,
        service::update_service,
        service::delete_service,
        professional::list_professionals,
        professional::create_professional,
        professional::update_professional,
        professional::delete_professional,
        slot::list_slots,
        slot::create_slot,
        slot::delete_slot
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Patients", description = "Patient records"),
        (name = "Services", description = "Offered services"),
        (name = "Professionals", description = "Clinic professionals"),
        (name = "Appointments", description = "Appointment slots and their participants"),
    ),
    info(
        title = "ClinicFlow API",
        version = "1.0.0",
        description = "Clinic management API",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
