//! Offline-first booking queue.
//!
//! Bookings are saved to a durable local pending list first and pushed to the
//! remote booking API later, whenever a caller triggers a sync pass. Each
//! pass re-partitions the stored pending/synced pair: confirmed bookings move
//! to the synced list, everything else stays queued for the next pass. The
//! core never loses a record to a submission failure and commits each pass as
//! a single durable write.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;

pub use application::ports::{BookingStore, SubmissionChannel};
pub use application::{new_store_lock, BookingService, StoreLock, SyncService, SyncStatus};
pub use domain::{Booking, BookingDraft, BookingId, StoreKey, SubmissionOutcome, SyncReport};
pub use infrastructure::{HttpSubmissionChannel, MemoryBookingStore, SqliteBookingStore};
pub use presentation::{BookingListPage, BookingListQuery};
pub use shared::{AppConfig, AppError, Result};
