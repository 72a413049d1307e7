pub mod auth;
pub mod record;
pub mod slot;
