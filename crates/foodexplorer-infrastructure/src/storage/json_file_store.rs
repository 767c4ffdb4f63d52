// ============================================================================
// Food Explorer Infrastructure - JSON File Order Store
// File: crates/foodexplorer-infrastructure/src/storage/json_file_store.rs
// Description: Durable local storage backed by a single JSON document
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{debug, error, info};

use foodexplorer_core::domain::Order;
use foodexplorer_core::error::DomainError;
use foodexplorer_core::repositories::OrderStore;
use foodexplorer_shared::config::StorageSettings;

use crate::error::InfraError;

type Document = BTreeMap<String, String>;

/// The document maps every key to the JSON text of its value. Writes go to a
/// sibling temp file first and are renamed into place.
pub struct JsonFileOrderStore {
    path: PathBuf,
    // Serializes read-modify-write of the document within this process
    lock: Mutex<()>,
}

impl JsonFileOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(&settings.path)
    }

    fn read_document(&self) -> Result<Document, InfraError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(Document::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Document::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&self, document: &Document) -> Result<(), InfraError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Order>, InfraError> {
        let _guard = self.lock.lock().map_err(|_| InfraError::LockPoisoned)?;
        let document = self.read_document()?;

        match document.get(key) {
            Some(text) => Ok(Some(serde_json::from_str(text)?)),
            None => Ok(None),
        }
    }

    fn store(&self, key: &str, order: &Order) -> Result<(), InfraError> {
        let _guard = self.lock.lock().map_err(|_| InfraError::LockPoisoned)?;
        let mut document = self.read_document()?;

        document.insert(key.to_string(), serde_json::to_string(order)?);
        self.write_document(&document)?;

        debug!("Wrote order under {} to {}", key, self.path.display());
        Ok(())
    }
}

impl OrderStore for JsonFileOrderStore {
    fn get(&self, key: &str) -> Result<Option<Order>, DomainError> {
        self.load(key).map_err(|e| {
            error!("Failed to read {} from {}: {}", key, self.path.display(), e);
            DomainError::from(e)
        })
    }

    fn put(&self, key: &str, order: &Order) -> Result<(), DomainError> {
        self.store(key, order).map_err(|e| {
            error!("Failed to write {} to {}: {}", key, self.path.display(), e);
            DomainError::from(e)
        })?;
        info!("Persisted order with {} lines", order.dishes.len());
        Ok(())
    }
}
