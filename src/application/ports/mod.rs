pub mod booking_store;
pub mod submission;

pub use booking_store::BookingStore;
pub use submission::SubmissionChannel;
