pub mod memory_store;
pub mod sqlite_store;

pub use memory_store::MemoryBookingStore;
pub use sqlite_store::SqliteBookingStore;
