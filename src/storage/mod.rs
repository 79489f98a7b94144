//! On-device key-value persistence: session credentials and recent
//! searches, stored as JSON strings under fixed keys.

mod history;
mod kv;
mod session;

pub use history::SearchHistory;
pub use kv::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageKey};
pub use session::SessionRepository;
