//! ViewModel Module
//!
//! Page state owned by the event loop; background tasks report back through
//! `AppEvent`.

pub mod add_dish_vm;
pub mod home_vm;

pub use add_dish_vm::{AddDishViewModel, SubmissionState};
pub use home_vm::HomeViewModel;
