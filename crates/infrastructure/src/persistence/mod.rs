//! Persistence module
//!
//! Key-value stores backing the setup state.

mod file_store;
mod memory_store;

pub use file_store::FileKeyValueStore;
pub use memory_store::InMemoryKeyValueStore;
