use crate::application::ports::BookingStore;
use crate::domain::entities::Booking;
use crate::domain::value_objects::StoreKey;
use crate::shared::error::AppError;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Ephemeral booking store. Useful for tests and demo setups; everything is
/// lost on drop, so production wiring uses the sqlite store instead.
#[derive(Default)]
pub struct MemoryBookingStore {
    lists: RwLock<HashMap<String, Vec<Booking>>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn get(&self, key: &StoreKey) -> Result<Vec<Booking>, AppError> {
        let lists = self.lists.read().await;
        Ok(lists.get(key.as_str()).cloned().unwrap_or_default())
    }

    async fn set(&self, key: &StoreKey, bookings: &[Booking]) -> Result<(), AppError> {
        let mut lists = self.lists.write().await;
        lists.insert(key.as_str().to_string(), bookings.to_vec());
        Ok(())
    }

    async fn set_all(&self, entries: &[(StoreKey, Vec<Booking>)]) -> Result<(), AppError> {
        // Single write guard over the whole batch keeps the pair consistent.
        let mut lists = self.lists.write().await;
        for (key, bookings) in entries {
            lists.insert(key.as_str().to_string(), bookings.clone());
        }
        Ok(())
    }
}
