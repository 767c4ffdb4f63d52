//! Order store trait (port)
//!
//! Key-value view of the client's local storage. `put` replaces the whole
//! value stored under `key`.

use crate::domain::Order;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
pub trait OrderStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Order>, DomainError>;
    fn put(&self, key: &str, order: &Order) -> Result<(), DomainError>;
}
