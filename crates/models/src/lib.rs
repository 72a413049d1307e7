pub mod slot_status;

pub use slot_status::SlotStatus;
