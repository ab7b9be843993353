//! Todo Core
//!
//! Layered architecture:
//! - domain: Todo records and the list filter
//! - storage: key-value persistence and the JSON snapshot codec
//! - model: the authoritative todo list with change notification
//! - editor / controller: inline edit state and view event dispatch

pub mod config;
pub mod controller;
pub mod domain;
pub mod editor;
pub mod model;
pub mod storage;

pub use config::ModelConfig;
pub use controller::{dispatch, Dispatch, ViewEvent};
pub use domain::{Filter, Todo, TodoId, TodoPatch};
pub use editor::{EditCommit, ItemEditor};
pub use model::{ListenerId, ModelEvent, TodoModel};
pub use storage::{KeyValueStore, MemoryStore, SnapshotStore, StorageError, StorageResult};
