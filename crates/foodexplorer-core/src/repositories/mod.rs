//! Repository traits (ports)

pub mod dish_repository;
pub mod order_store;

pub use dish_repository::DishRepository;
pub use order_store::OrderStore;
