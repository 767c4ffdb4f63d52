//! # Food Explorer Infrastructure
//! 
//! HTTP and local storage implementations (adapters).

pub mod error;
pub mod http;
pub mod storage;

pub use error::InfraError;
pub use http::DishApiClient;
pub use storage::{JsonFileOrderStore, MemoryOrderStore};
