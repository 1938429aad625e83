// storefront/src/store/memory_store.rs

use super::{Collection, RecordStore, StoreError};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Volatile store, used by tests and by `STORAGE_BACKEND=memory`.
#[derive(Debug, Default)]
pub struct MemoryStore {
  documents: RwLock<HashMap<Collection, Value>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Raw document as last saved, if the collection exists.
  pub fn snapshot(&self, collection: Collection) -> Option<Value> {
    self.documents.read().get(&collection).cloned()
  }

  /// Overwrites a document without going through a repository.
  pub fn put_raw(&self, collection: Collection, value: Value) {
    self.documents.write().insert(collection, value);
  }
}

#[async_trait]
impl RecordStore for MemoryStore {
  async fn initialize(&self, collection: Collection, empty: &Value) -> Result<(), StoreError> {
    self.documents.write().entry(collection).or_insert_with(|| empty.clone());
    Ok(())
  }

  async fn load(&self, collection: Collection) -> Result<Value, StoreError> {
    self
      .documents
      .read()
      .get(&collection)
      .cloned()
      .ok_or(StoreError::Missing { collection })
  }

  async fn save(&self, collection: Collection, value: &Value) -> Result<(), StoreError> {
    self.documents.write().insert(collection, value.clone());
    Ok(())
  }
}
