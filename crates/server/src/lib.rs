pub mod auth;
pub mod doc;
pub mod dtos;
pub mod error;
pub mod routes;
pub mod shutdown;
pub mod state;

use crate::doc::ApiDoc;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Assembles the full router over the shared state
pub fn app(state: AppState) -> Router {
    // Everything under /api except login sits behind the bearer gate
    let api = Router::new()
        .route(
            "/pacientes",
            get(routes::patient::list_patients).post(routes::patient::create_patient),
        )
        .route(
            "/pacientes/{id}",
            put(routes::patient::update_patient).delete(routes::patient::delete_patient),
        )
        .route(
            "/servicos",
            get(routes::service::list_services).post(routes::service::create_service),
        )
        .route(
            "/servicos/{id}",
            put(routes::service::update_service).delete(routes::service::delete_service),
        )
        .route(
            "/profissionais",
            get(routes::professional::list_professionals)
                .post(routes::professional::create_professional),
        )
        .route(
            "/profissionais/{id}",
            put(routes::professional::update_professional)
                .delete(routes::professional::delete_professional),
        )
        .route(
            "/agendamentos",
            get(routes::slot::list_slots).post(routes::slot::create_slot),
        )
        .route("/agendamentos/{id}", delete(routes::slot::delete_slot))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ))
        // registered after the gate layer, so login stays open
        .route("/auth/login", post(routes::auth::login));

    Router::new()
        .route("/", get(routes::root::root))
        .route("/health", get(routes::health::health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}
