//! Domain services (business logic)

pub mod catalog_service;
pub mod cart_service;

pub use catalog_service::{filter_dishes, CatalogSections, EmptyState};
pub use cart_service::{add_to_cart, CartService};
