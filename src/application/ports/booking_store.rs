use crate::domain::entities::Booking;
use crate::domain::value_objects::StoreKey;
use crate::shared::error::AppError;
use async_trait::async_trait;

/// Durable whole-sequence storage for booking lists.
///
/// Writers perform read-modify-write over the full sequence at a key; the
/// store itself never merges. A key that has never been written reads as an
/// empty sequence, not as an error.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn get(&self, key: &StoreKey) -> Result<Vec<Booking>, AppError>;

    /// Durably overwrites the sequence at `key`. Succeeds or fails as a
    /// whole; a failure must leave the previously stored sequence intact.
    async fn set(&self, key: &StoreKey, bookings: &[Booking]) -> Result<(), AppError>;

    /// Overwrites several keys as one commit. Backends that support it make
    /// the batch atomic so the pending/synced pair can never be published
    /// half-written; the fallback writes the entries in order.
    async fn set_all(&self, entries: &[(StoreKey, Vec<Booking>)]) -> Result<(), AppError> {
        for (key, bookings) in entries {
            self.set(key, bookings).await?;
        }
        Ok(())
    }
}
