pub mod entities;
pub mod value_objects;

pub use entities::{Booking, BookingDraft, SyncReport};
pub use value_objects::{BookingId, StoreKey, SubmissionOutcome};
