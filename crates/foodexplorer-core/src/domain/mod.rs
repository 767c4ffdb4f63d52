//! # Food Explorer Core - Domain Module
//! 
//! Domain entities for the Food Explorer client.

pub mod category;
pub mod dish;
pub mod order;
pub mod price;
pub mod dish_draft;

// Re-export all entities and enums
pub use category::Category;
pub use dish::{Dish, DishId, Ingredient};
pub use order::{Order, OrderLine};
pub use price::Price;
pub use dish_draft::{DishDraft, ImageAttachment, NewDish};
