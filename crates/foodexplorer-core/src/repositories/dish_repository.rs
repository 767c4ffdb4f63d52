//! Dish repository trait (port)

use async_trait::async_trait;
use crate::domain::{Dish, NewDish};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishRepository: Send + Sync {
    /// `GET /dishes`
    async fn list(&self) -> Result<Vec<Dish>, DomainError>;
    /// `GET /dishes?itemSearch=<item_search>`
    async fn search(&self, item_search: &str) -> Result<Vec<Dish>, DomainError>;
    /// `POST /dishes` as multipart form data
    async fn create(&self, dish: &NewDish) -> Result<(), DomainError>;
}
