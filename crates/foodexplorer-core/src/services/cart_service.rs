// ============================================================================
// Food Explorer Core - Cart Service
// File: crates/foodexplorer-core/src/services/cart_service.rs
// ============================================================================
//! Cart accumulation on top of the local order store

use std::sync::Arc;
use tracing::{info, warn};

use foodexplorer_shared::constants::ORDER_STORAGE_KEY;

use crate::domain::{Order, OrderLine};
use crate::error::DomainError;
use crate::repositories::OrderStore;

/// Merge `line` into `current`.
///
/// A line for the same dish gets its amount increased and keeps every other
/// field; a new dish is appended at the end. A missing order is a
/// precondition failure, never an implicit empty cart.
pub fn add_to_cart(current: Option<Order>, line: OrderLine) -> Result<Order, DomainError> {
    let mut order = current.ok_or_else(|| DomainError::OrderNotInitialized(ORDER_STORAGE_KEY.to_string()))?;

    if line.amount == 0 {
        return Err(DomainError::InvalidOrderLine(format!(
            "amount must be positive for dish {}",
            line.dish_id
        )));
    }

    match order.dishes.iter_mut().find(|existing| existing.dish_id == line.dish_id) {
        Some(existing) => {
            existing.amount = existing.amount.checked_add(line.amount).ok_or_else(|| {
                DomainError::InvalidOrderLine(format!("amount overflow for dish {}", line.dish_id))
            })?;
        }
        None => order.dishes.push(line),
    }

    Ok(order)
}

/// Cart service: read-modify-write of the whole order under one key
pub struct CartService<S: OrderStore + ?Sized> {
    store: Arc<S>,
    key: String,
}

impl<S: OrderStore + ?Sized> CartService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_key(store, ORDER_STORAGE_KEY)
    }

    pub fn with_key(store: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Write an empty order if none is stored yet. Returns the stored order.
    pub fn initialize(&self) -> Result<Order, DomainError> {
        if let Some(order) = self.store.get(&self.key)? {
            return Ok(order);
        }

        let order = Order::new();
        self.store.put(&self.key, &order)?;
        info!("Initialized empty order under {}", self.key);
        Ok(order)
    }

    /// Add `line` to the stored order and overwrite it wholesale.
    pub fn add(&self, line: OrderLine) -> Result<Order, DomainError> {
        let dish_id = line.dish_id;
        let amount = line.amount;

        let current = self.store.get(&self.key)?;
        let updated = add_to_cart(current, line).map_err(|e| {
            warn!("Add to cart failed for dish {}: {}", dish_id, e);
            e
        })?;

        self.store.put(&self.key, &updated)?;
        info!("Added {} x dish {} to order", amount, dish_id);
        Ok(updated)
    }

    /// Item count derived from what is actually persisted
    pub fn persisted_item_count(&self) -> Result<u64, DomainError> {
        Ok(self
            .store
            .get(&self.key)?
            .map(|order| order.total_amount())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::order_store::MockOrderStore;

    fn order(lines: &[(i64, u32)]) -> Order {
        Order {
            dishes: lines.iter().map(|&(id, amount)| OrderLine::new(id, amount)).collect(),
        }
    }

    #[test]
    fn test_merge_existing_line() {
        let result = add_to_cart(Some(order(&[(1, 2)])), OrderLine::new(1, 3)).unwrap();
        assert_eq!(result, order(&[(1, 5)]));
    }

    #[test]
    fn test_append_new_line() {
        let result = add_to_cart(Some(order(&[(1, 2)])), OrderLine::new(2, 1)).unwrap();
        assert_eq!(result, order(&[(1, 2), (2, 1)]));
    }

    #[test]
    fn test_merge_keeps_existing_details() {
        let existing = OrderLine::new(1, 2).with_detail("name", "Salada Ravanello");
        let incoming = OrderLine::new(1, 1).with_detail("name", "Renamed");
        let result = add_to_cart(Some(Order { dishes: vec![existing] }), incoming).unwrap();
        assert_eq!(result.dishes[0].amount, 3);
        assert_eq!(result.dishes[0].details["name"], "Salada Ravanello");
    }

    #[test]
    fn test_missing_order_is_precondition_failure() {
        let result = add_to_cart(None, OrderLine::new(1, 1));
        assert!(matches!(result, Err(DomainError::OrderNotInitialized(_))));
    }

    #[test]
    fn test_zero_amount_rejected() {
        let result = add_to_cart(Some(Order::new()), OrderLine::new(1, 0));
        assert!(matches!(result, Err(DomainError::InvalidOrderLine(_))));
    }

    #[test]
    fn test_service_overwrites_whole_order() {
        let mut store = MockOrderStore::new();
        store
            .expect_get()
            .withf(|key| key == ORDER_STORAGE_KEY)
            .times(1)
            .returning(|_| Ok(Some(order(&[(1, 2), (3, 1)]))));
        store
            .expect_put()
            .withf(|key, order| {
                key == ORDER_STORAGE_KEY
                    && order.dishes.len() == 2
                    && order.dishes[0].amount == 5
                    && order.dishes[1].dish_id == 3
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = CartService::new(Arc::new(store));
        let updated = service.add(OrderLine::new(1, 3)).unwrap();
        assert_eq!(updated.total_amount(), 6);
    }

    #[test]
    fn test_service_does_not_write_when_uninitialized() {
        let mut store = MockOrderStore::new();
        store.expect_get().returning(|_| Ok(None));
        store.expect_put().never();

        let service = CartService::new(Arc::new(store));
        assert!(matches!(
            service.add(OrderLine::new(1, 1)),
            Err(DomainError::OrderNotInitialized(_))
        ));
    }

    #[test]
    fn test_initialize_writes_empty_order_once() {
        let mut store = MockOrderStore::new();
        store.expect_get().times(1).returning(|_| Ok(None));
        store
            .expect_put()
            .withf(|_, order| order.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let service = CartService::new(Arc::new(store));
        assert!(service.initialize().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_keeps_existing_order() {
        let mut store = MockOrderStore::new();
        store.expect_get().returning(|_| Ok(Some(order(&[(4, 2)]))));
        store.expect_put().never();

        let service = CartService::new(Arc::new(store));
        assert_eq!(service.initialize().unwrap(), order(&[(4, 2)]));
        assert_eq!(service.persisted_item_count().unwrap(), 2);
    }
}
