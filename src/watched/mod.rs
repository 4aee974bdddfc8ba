//! The personal watched list: entries, mutations, summary and persistence.

mod entry;
mod list;
mod store;
mod summary;

pub use entry::{parse_rating, parse_runtime_minutes, WatchedEntry, WatchedError};
pub use list::WatchedList;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, WatchedStore};
pub use summary::{average, WatchedSummary};
