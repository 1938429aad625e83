// storefront/src/store/file_store.rs

use super::{Collection, RecordStore, StoreError};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{info, instrument, warn};

/// Keeps each collection as a pretty-printed `<name>.json` file in one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
  root: PathBuf,
}

impl FileStore {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn path_for(&self, collection: Collection) -> PathBuf {
    self.root.join(format!("{}.json", collection.name()))
  }

  async fn write_document(&self, collection: Collection, value: &Value) -> Result<(), StoreError> {
    let path = self.path_for(collection);
    let body = serde_json::to_string_pretty(value).map_err(|source| StoreError::Encode { collection, source })?;

    // Write beside the target and rename over it so readers never see a torn file.
    let staging = self.root.join(format!(".{}.json.tmp", collection.name()));
    fs::write(&staging, body).await.map_err(|source| StoreError::Io {
      path: staging.clone(),
      source,
    })?;
    fs::rename(&staging, &path)
      .await
      .map_err(|source| StoreError::Io { path, source })
  }
}

#[async_trait]
impl RecordStore for FileStore {
  #[instrument(name = "file_store::initialize", skip(self, empty), fields(root = %self.root.display()))]
  async fn initialize(&self, collection: Collection, empty: &Value) -> Result<(), StoreError> {
    fs::create_dir_all(&self.root).await.map_err(|source| StoreError::Io {
      path: self.root.clone(),
      source,
    })?;

    let path = self.path_for(collection);
    let exists = fs::try_exists(&path).await.map_err(|source| StoreError::Io {
      path: path.clone(),
      source,
    })?;
    if !exists {
      info!(path = %path.display(), "Creating empty {} file.", collection);
      self.write_document(collection, empty).await?;
    }
    Ok(())
  }

  async fn load(&self, collection: Collection) -> Result<Value, StoreError> {
    let path = self.path_for(collection);
    let body = match fs::read_to_string(&path).await {
      Ok(body) => body,
      Err(source) if source.kind() == ErrorKind::NotFound => {
        warn!(path = %path.display(), "Collection file disappeared after startup.");
        return Err(StoreError::Missing { collection });
      }
      Err(source) => return Err(StoreError::Io { path, source }),
    };
    serde_json::from_str(&body).map_err(|source| StoreError::Corrupt { collection, source })
  }

  async fn save(&self, collection: Collection, value: &Value) -> Result<(), StoreError> {
    self.write_document(collection, value).await
  }
}
