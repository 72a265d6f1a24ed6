pub mod booking_id;
pub mod store_key;
pub mod submission_outcome;

pub use booking_id::BookingId;
pub use store_key::{StoreKey, PENDING_BOOKINGS_KEY, SYNCED_BOOKINGS_KEY};
pub use submission_outcome::SubmissionOutcome;
