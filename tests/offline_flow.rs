//! End-to-end flow over the sqlite store: queue bookings offline, sync with a
//! flaky remote, and converge over repeated passes.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use washbook::shared::config::SyncConfig;
use washbook::{
    new_store_lock, AppError, Booking, BookingDraft, BookingService, SqliteBookingStore,
    SubmissionChannel, SubmissionOutcome, SyncService,
};

/// Remote that refuses the configured customer until told otherwise and
/// deduplicates by booking id like a real idempotent endpoint.
struct FlakyRemote {
    offline_for: Mutex<Option<String>>,
    registered: Mutex<HashSet<String>>,
}

impl FlakyRemote {
    fn new(offline_for: &str) -> Arc<Self> {
        Arc::new(Self {
            offline_for: Mutex::new(Some(offline_for.to_string())),
            registered: Mutex::new(HashSet::new()),
        })
    }

    fn recover(&self) {
        *self.offline_for.lock().unwrap() = None;
    }

    fn registered_count(&self) -> usize {
        self.registered.lock().unwrap().len()
    }
}

#[async_trait]
impl SubmissionChannel for FlakyRemote {
    async fn submit(&self, booking: &Booking) -> Result<SubmissionOutcome, AppError> {
        if self.offline_for.lock().unwrap().as_deref() == Some(booking.customer_name.as_str()) {
            return Ok(SubmissionOutcome::Unreachable);
        }
        self.registered
            .lock()
            .unwrap()
            .insert(booking.id.as_str().to_string());
        Ok(SubmissionOutcome::Accepted)
    }
}

async fn setup_store() -> Arc<SqliteBookingStore> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    Arc::new(SqliteBookingStore::new(pool))
}

fn draft(name: &str) -> BookingDraft {
    BookingDraft {
        customer_name: name.to_string(),
        phone_number: "+27 82 000 0000".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        service_type: "Full Valet".to_string(),
        appointment_at: Utc::now(),
    }
}

#[tokio::test]
async fn queued_bookings_converge_over_passes() {
    let store = setup_store().await;
    let remote = FlakyRemote::new("Ben");
    let lock = new_store_lock();
    let bookings = BookingService::new(store.clone(), lock.clone());
    let sync = SyncService::new(
        store.clone(),
        remote.clone(),
        lock,
        &SyncConfig {
            auto_sync: false,
            sync_interval: 300,
            submit_timeout: 5,
        },
    );

    let anna = bookings.save(draft("Anna")).await.unwrap();
    let ben = bookings.save(draft("Ben")).await.unwrap();

    // First pass: Anna goes through, Ben's submission cannot reach the remote.
    let report = sync.sync_pending().await.unwrap();
    assert_eq!(report.synced_count, 1);
    assert_eq!(report.failed_count, 1);

    let pending = bookings.pending_bookings().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, ben.id);

    let synced = bookings.synced_bookings().await.unwrap();
    assert_eq!(synced.len(), 1);
    assert_eq!(synced[0].id, anna.id);
    assert!(synced[0].is_synced);

    // Remote comes back; the retried booking drains on the next pass.
    remote.recover();
    let report = sync.sync_pending().await.unwrap();
    assert_eq!(report.synced_count, 1);
    assert_eq!(report.pending_count, 0);

    assert!(bookings.pending_bookings().await.unwrap().is_empty());
    let synced = bookings.synced_bookings().await.unwrap();
    assert_eq!(synced.len(), 2);
    assert_eq!(remote.registered_count(), 2);

    // Further passes are no-ops.
    let report = sync.sync_pending().await.unwrap();
    assert_eq!(report.synced_count, 0);
    assert_eq!(report.failed_count, 0);
}
