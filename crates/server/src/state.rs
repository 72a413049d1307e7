use sea_orm::DatabaseConnection;

/// Shared handles passed explicitly to every handler; there is no global
/// connection object
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
}
