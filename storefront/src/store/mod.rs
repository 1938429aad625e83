// storefront/src/store/mod.rs

//! Durable record collections.
//!
//! A [`RecordStore`] knows how to load and save whole collections as JSON
//! documents; it knows nothing about their shape. Services never touch a
//! store directly: they go through a typed [`Repository`], which decodes the
//! document and serializes every read-modify-write cycle on its collection.

pub mod file_store;
pub mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

/// The named collections persisted by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  Users,
  Carts,
  Orders,
}

impl Collection {
  pub fn name(self) -> &'static str {
    match self {
      Collection::Users => "users",
      Collection::Carts => "carts",
      Collection::Orders => "orders",
    }
  }
}

impl fmt::Display for Collection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("I/O error on '{}': {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Collection '{collection}' is missing from the store")]
  Missing { collection: Collection },

  #[error("Collection '{collection}' holds malformed data: {source}")]
  Corrupt {
    collection: Collection,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to encode collection '{collection}': {source}")]
  Encode {
    collection: Collection,
    #[source]
    source: serde_json::Error,
  },
}

/// Backend holding one JSON document per [`Collection`].
#[async_trait]
pub trait RecordStore: Send + Sync + fmt::Debug {
  /// Creates the collection with `empty` as its content unless it already exists.
  async fn initialize(&self, collection: Collection, empty: &Value) -> Result<(), StoreError>;

  async fn load(&self, collection: Collection) -> Result<Value, StoreError>;

  /// Replaces the whole collection.
  async fn save(&self, collection: Collection, value: &Value) -> Result<(), StoreError>;
}

/// Typed, serialized access to one collection of a [`RecordStore`].
pub struct Repository<T> {
  store: Arc<dyn RecordStore>,
  collection: Collection,
  guard: Mutex<()>,
  _records: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Repository<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Repository")
      .field("collection", &self.collection)
      .field("store", &self.store)
      .finish()
  }
}

impl<T> Repository<T>
where
  T: Default + Serialize + DeserializeOwned + Send,
{
  /// Opens the collection, creating it empty in the store if needed.
  pub async fn open(store: Arc<dyn RecordStore>, collection: Collection) -> Result<Self, StoreError> {
    let empty = serde_json::to_value(T::default()).map_err(|source| StoreError::Encode { collection, source })?;
    store.initialize(collection, &empty).await?;
    debug!(%collection, "Collection opened.");
    Ok(Self {
      store,
      collection,
      guard: Mutex::new(()),
      _records: PhantomData,
    })
  }

  /// Returns a snapshot of the collection.
  #[instrument(name = "repository::read", skip(self), fields(collection = %self.collection))]
  pub async fn read(&self) -> Result<T, StoreError> {
    let _guard = self.guard.lock().await;
    self.load().await
  }

  /// Runs one read-modify-write cycle while holding the collection's guard.
  ///
  /// When `mutate` fails nothing is written and its error is returned.
  #[instrument(name = "repository::update", skip(self, mutate), fields(collection = %self.collection))]
  pub async fn update<R, E, F>(&self, mutate: F) -> Result<R, E>
  where
    F: FnOnce(&mut T) -> Result<R, E>,
    E: From<StoreError>,
  {
    let _guard = self.guard.lock().await;
    let mut records = self.load().await?;
    let outcome = mutate(&mut records)?;
    let encoded = serde_json::to_value(&records).map_err(|source| StoreError::Encode {
      collection: self.collection,
      source,
    })?;
    self.store.save(self.collection, &encoded).await?;
    Ok(outcome)
  }

  async fn load(&self) -> Result<T, StoreError> {
    let raw = self.store.load(self.collection).await?;
    serde_json::from_value(raw).map_err(|source| StoreError::Corrupt {
      collection: self.collection,
      source,
    })
  }
}
