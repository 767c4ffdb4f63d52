// ============================================================================
// Food Explorer Infrastructure - In-memory Order Store
// File: crates/foodexplorer-infrastructure/src/storage/memory_store.rs
// ============================================================================

use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use foodexplorer_core::domain::Order;
use foodexplorer_core::error::DomainError;
use foodexplorer_core::repositories::OrderStore;

use crate::error::InfraError;

/// Process-local store, lost on exit
#[derive(Default)]
pub struct MemoryOrderStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw text stored under `key`
    pub fn raw(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self.entries.read().map_err(|_| InfraError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    pub fn put_raw(&self, key: &str, value: impl Into<String>) -> Result<(), DomainError> {
        let mut entries = self.entries.write().map_err(|_| InfraError::LockPoisoned)?;
        entries.insert(key.to_string(), value.into());
        Ok(())
    }
}

impl OrderStore for MemoryOrderStore {
    fn get(&self, key: &str) -> Result<Option<Order>, DomainError> {
        match self.raw(key)? {
            Some(text) => Ok(Some(serde_json::from_str(&text).map_err(InfraError::from)?)),
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, order: &Order) -> Result<(), DomainError> {
        let text = serde_json::to_string(order).map_err(InfraError::from)?;
        debug!("Storing {} bytes under {}", text.len(), key);
        self.put_raw(key, text)
    }
}
