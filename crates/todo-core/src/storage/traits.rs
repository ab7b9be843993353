//! Storage Layer - Core Traits
//!
//! Defines the abstract interface for persistent key-value storage.
//! Implementations can use browser localStorage, in-memory maps, etc.

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read key `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed to write key `{key}`: {message}")]
    Write { key: String, message: String },
    #[error("failed to encode snapshot: {0}")]
    Encode(String),
}

/// Persistent string store addressed by key
///
/// Reads and writes are synchronous; a value written with `set` is
/// returned by the next `get` of the same key.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if the key is absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
