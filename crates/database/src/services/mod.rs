pub mod record;
pub mod slot;
