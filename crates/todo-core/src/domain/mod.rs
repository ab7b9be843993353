//! Domain Layer
//!
//! Todo records and the filter applied to them.
//! This layer has NO external dependencies (except serde for serialization).

mod filter;
mod todo;

pub use filter::Filter;
pub use todo::{Todo, TodoId, TodoPatch};
