pub mod booking_service;
pub mod sync_service;


use std::sync::Arc;
use tokio::sync::Mutex;

/// Single-writer lock per pending/synced key pair. `save` and a sync pass
/// both read-modify-write whole sequences; sharing one lock keeps a save
/// from being overwritten by a pass that snapshotted before it.
pub type StoreLock = Arc<Mutex<()>>;

pub fn new_store_lock() -> StoreLock {
    Arc::new(Mutex::new(()))
}

pub use booking_service::BookingService;
pub use sync_service::{SyncService, SyncStatus};
