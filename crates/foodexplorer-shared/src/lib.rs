//! # Food Explorer Shared
//! 
//! Constants, configuration, and telemetry shared by the Food Explorer crates.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::AppError;
