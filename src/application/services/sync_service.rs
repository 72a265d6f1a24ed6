use crate::application::ports::{BookingStore, SubmissionChannel};
use crate::application::services::StoreLock;
use crate::domain::entities::{Booking, SyncReport};
use crate::domain::value_objects::{StoreKey, SubmissionOutcome};
use crate::shared::config::SyncConfig;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncStatus {
    pub is_syncing: bool,
    pub pending_count: u32,
    pub last_sync: Option<i64>,
    pub sync_errors: u32,
}

/// Moves bookings from the pending list to the synced list as the remote
/// confirms them.
///
/// One pass is the only unit of durable change: the pending/synced pair is
/// re-read at the start and committed once at the end, so an interrupted pass
/// leaves the last committed pair untouched and simply replays. Replayed
/// submissions rely on the channel deduplicating by booking id.
pub struct SyncService {
    store: Arc<dyn BookingStore>,
    channel: Arc<dyn SubmissionChannel>,
    pending_key: StoreKey,
    synced_key: StoreKey,
    write_lock: StoreLock,
    submit_timeout: Duration,
    status: Arc<RwLock<SyncStatus>>,
}

impl SyncService {
    pub fn new(
        store: Arc<dyn BookingStore>,
        channel: Arc<dyn SubmissionChannel>,
        write_lock: StoreLock,
        config: &SyncConfig,
    ) -> Self {
        Self::with_keys(
            store,
            channel,
            write_lock,
            config,
            StoreKey::pending(),
            StoreKey::synced(),
        )
    }

    pub fn with_keys(
        store: Arc<dyn BookingStore>,
        channel: Arc<dyn SubmissionChannel>,
        write_lock: StoreLock,
        config: &SyncConfig,
        pending_key: StoreKey,
        synced_key: StoreKey,
    ) -> Self {
        Self {
            store,
            channel,
            pending_key,
            synced_key,
            write_lock,
            submit_timeout: Duration::from_secs(config.submit_timeout),
            status: Arc::new(RwLock::new(SyncStatus {
                is_syncing: false,
                pending_count: 0,
                last_sync: None,
                sync_errors: 0,
            })),
        }
    }

    /// Runs one drain-and-resubmit pass over the pending list.
    ///
    /// Holds the store write lock for the whole pass; saves issued meanwhile
    /// queue up behind it and land after the pass commits. Submission
    /// failures never propagate, only store read/write failures do.
    pub async fn sync_pending(&self) -> Result<SyncReport, AppError> {
        let _guard = self.write_lock.lock().await;

        {
            let mut status = self.status.write().await;
            status.is_syncing = true;
        }

        let result = self.run_pass().await;

        let mut status = self.status.write().await;
        status.is_syncing = false;
        match &result {
            Ok(report) => {
                status.last_sync = Some(chrono::Utc::now().timestamp());
                status.pending_count = report.pending_count;
            }
            Err(e) => {
                warn!(error = %e, "sync pass aborted");
                status.sync_errors += 1;
            }
        }

        result
    }

    async fn run_pass(&self) -> Result<SyncReport, AppError> {
        let pending = self.store.get(&self.pending_key).await?;
        if pending.is_empty() {
            debug!("no pending bookings, skipping sync pass");
            return Ok(SyncReport::empty());
        }

        let mut synced = self.store.get(&self.synced_key).await?;
        let mut still_pending: Vec<Booking> = Vec::new();
        let mut synced_count: u32 = 0;

        // FIFO over the stored pending order; failures keep their relative
        // order, successes append to the synced list in processing order.
        for booking in pending {
            match self.submit_with_timeout(&booking).await {
                SubmissionOutcome::Accepted => {
                    debug!(id = %booking.id, "booking accepted by remote");
                    synced.push(booking.mark_synced());
                    synced_count += 1;
                }
                outcome => {
                    debug!(id = %booking.id, outcome = %outcome, "booking kept pending");
                    still_pending.push(booking);
                }
            }
        }

        let failed_count = still_pending.len() as u32;
        let report = SyncReport::new(synced_count, failed_count, failed_count);

        // Sole durable mutation point of the pass. Committed as one batch so
        // a crash can never publish half of the pending/synced pair.
        self.store
            .set_all(&[
                (self.pending_key.clone(), still_pending),
                (self.synced_key.clone(), synced),
            ])
            .await?;

        info!(
            synced = report.synced_count,
            failed = report.failed_count,
            "sync pass completed"
        );
        Ok(report)
    }

    async fn submit_with_timeout(&self, booking: &Booking) -> SubmissionOutcome {
        match tokio::time::timeout(self.submit_timeout, self.channel.submit(booking)).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(e)) => {
                warn!(id = %booking.id, error = %e, "submission failed");
                SubmissionOutcome::Unreachable
            }
            Err(_) => {
                warn!(id = %booking.id, "submission timed out");
                SubmissionOutcome::Unreachable
            }
        }
    }

    pub async fn get_status(&self) -> SyncStatus {
        self.status.read().await.clone()
    }

    /// Spawns a periodic trigger for `sync_pending`. The service itself never
    /// self-schedules; callers opt in based on `SyncConfig::auto_sync`.
    pub async fn schedule_sync(&self, interval_secs: u64) {
        let service = Arc::new(self.clone());
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(tokio::time::Duration::from_secs(interval_secs));

            loop {
                interval.tick().await;

                if let Err(e) = service.sync_pending().await {
                    tracing::error!("Sync error: {}", e);
                }
            }
        });
    }
}

impl Clone for SyncService {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            channel: self.channel.clone(),
            pending_key: self.pending_key.clone(),
            synced_key: self.synced_key.clone(),
            write_lock: self.write_lock.clone(),
            submit_timeout: self.submit_timeout,
            status: self.status.clone(),
        }
    }
}
