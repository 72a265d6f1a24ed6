pub mod booking;
pub mod sync_report;

pub use booking::{Booking, BookingDraft};
pub use sync_report::SyncReport;
