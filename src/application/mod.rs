pub mod ports;
pub mod services;

pub use services::{new_store_lock, BookingService, StoreLock, SyncService, SyncStatus};
