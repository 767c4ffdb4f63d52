//! HTTP adapters for the Food Explorer backend

pub mod dish_api_client;

pub use dish_api_client::DishApiClient;
