//! # Food Explorer App
//!
//! Headless view models for the Home and AddDish pages, wired to the HTTP
//! and local-storage adapters.

pub mod app;
pub mod events;
pub mod navigation;
pub mod notification;
pub mod viewmodel;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use events::AppEvent;
pub use navigation::Route;
pub use notification::{Notification, NotificationLevel, Notifier};
