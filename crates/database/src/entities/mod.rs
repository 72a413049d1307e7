pub mod appointment_slot;
pub mod patient;
pub mod professional;
pub mod service;
pub mod slot_participant;
