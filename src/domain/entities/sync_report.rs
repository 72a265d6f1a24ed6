use serde::{Deserialize, Serialize};

/// Aggregate result of one sync pass. Per-record failures are never surfaced
/// individually; failed records stay queued for the next pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub synced_count: u32,
    pub failed_count: u32,
    pub pending_count: u32,
}

impl SyncReport {
    pub fn new(synced_count: u32, failed_count: u32, pending_count: u32) -> Self {
        Self {
            synced_count,
            failed_count,
            pending_count,
        }
    }

    /// Report for a pass that found nothing to do.
    pub fn empty() -> Self {
        Self::new(0, 0, 0)
    }
}
