use crate::application::ports::BookingStore;
use crate::application::services::StoreLock;
use crate::domain::entities::{Booking, BookingDraft};
use crate::domain::value_objects::StoreKey;
use crate::shared::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// Local booking queue operations: append to the pending list and read back
/// either list. No validation happens at this layer.
pub struct BookingService {
    store: Arc<dyn BookingStore>,
    pending_key: StoreKey,
    synced_key: StoreKey,
    write_lock: StoreLock,
}

impl BookingService {
    /// The lock must be the same instance handed to the sync service so a
    /// save cannot interleave with a sync pass over the same keys.
    pub fn new(store: Arc<dyn BookingStore>, write_lock: StoreLock) -> Self {
        Self::with_keys(store, write_lock, StoreKey::pending(), StoreKey::synced())
    }

    pub fn with_keys(
        store: Arc<dyn BookingStore>,
        write_lock: StoreLock,
        pending_key: StoreKey,
        synced_key: StoreKey,
    ) -> Self {
        Self {
            store,
            pending_key,
            synced_key,
            write_lock,
        }
    }

    /// Queues a booking for sync. Assigns its id and creation time, then
    /// appends it to the stored pending sequence. Fails only when the
    /// underlying store write fails.
    pub async fn save(&self, draft: BookingDraft) -> Result<Booking, AppError> {
        let booking = Booking::new(draft);

        let _guard = self.write_lock.lock().await;
        let mut pending = self.store.get(&self.pending_key).await?;
        pending.push(booking.clone());
        self.store.set(&self.pending_key, &pending).await?;

        debug!(id = %booking.id, queued = pending.len(), "booking queued for sync");
        Ok(booking)
    }

    pub async fn pending_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.store.get(&self.pending_key).await
    }

    pub async fn synced_bookings(&self) -> Result<Vec<Booking>, AppError> {
        self.store.get(&self.synced_key).await
    }
}
