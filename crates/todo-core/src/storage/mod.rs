//! Storage Layer
//!
//! Key-value persistence abstraction and the JSON snapshot adapter.

mod memory;
mod snapshot;
mod traits;

pub use memory::MemoryStore;
pub use snapshot::{decode_snapshot, encode_snapshot, SnapshotStore};
pub use traits::{KeyValueStore, StorageError, StorageResult};
