//! Local order storage adapters
//!
//! Values are kept as JSON text under string keys, the same shape the web
//! client's local storage has.

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileOrderStore;
pub use memory_store::MemoryOrderStore;
