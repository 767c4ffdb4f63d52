// ============================================================================
// Food Explorer Core - Order Entity
// File: crates/foodexplorer-core/src/domain/order.rs
// Description: Locally persisted cart and its lines
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tracing::debug;

use super::DishId;

const RESERVED_KEYS: [&str; 2] = ["dish_id", "amount"];

/// One dish in the cart.
///
/// Display fields copied at add time (name, price, image, ...) are kept
/// verbatim in `details` so a read-modify-write never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub dish_id: DishId,
    pub amount: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl OrderLine {
    pub fn new(dish_id: DishId, amount: u32) -> Self {
        Self {
            dish_id,
            amount,
            details: Map::new(),
        }
    }

    /// Attach a display field. `dish_id` and `amount` are struct fields and
    /// are ignored here so the stored JSON never repeats them.
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        if RESERVED_KEYS.contains(&key) {
            debug!("Ignoring reserved order line detail {:?}", key);
            return self;
        }
        self.details.insert(key.to_string(), value.into());
        self
    }
}

/// The cart as stored under the order key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub dishes: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_line(&self, dish_id: DishId) -> Option<&OrderLine> {
        self.dishes.iter().find(|line| line.dish_id == dish_id)
    }

    /// Sum of all line amounts
    pub fn total_amount(&self) -> u64 {
        self.dishes.iter().map(|line| u64::from(line.amount)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
