pub mod storage;
pub mod submission;

pub use storage::{MemoryBookingStore, SqliteBookingStore};
pub use submission::HttpSubmissionChannel;
