// storefront/src/state.rs
use crate::config::{AppConfig, StorageBackend};
use crate::errors::Result;
use crate::models::User;
use crate::services::cart_service::Carts;
use crate::services::order_service::OrderHistory;
use crate::services::{AccountService, CartService, OrderService};
use crate::store::{Collection, FileStore, MemoryStore, RecordStore, Repository};
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct AppState {
  pub accounts: Arc<AccountService>,
  pub carts: Arc<CartService>,
  pub orders: Arc<OrderService>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Opens the configured backend and wires the services onto it.
  pub async fn from_config(config: AppConfig) -> Result<Self> {
    let store: Arc<dyn RecordStore> = match config.storage_backend {
      StorageBackend::File => {
        info!(data_dir = %config.data_dir.display(), "Using file-backed record store.");
        Arc::new(FileStore::new(&config.data_dir))
      }
      StorageBackend::Memory => {
        info!("Using in-memory record store; data will not survive a restart.");
        Arc::new(MemoryStore::new())
      }
    };
    Self::with_store(store, config).await
  }

  pub async fn with_store(store: Arc<dyn RecordStore>, config: AppConfig) -> Result<Self> {
    let users: Repository<Vec<User>> = Repository::open(store.clone(), Collection::Users).await?;
    let carts: Repository<Carts> = Repository::open(store.clone(), Collection::Carts).await?;
    let orders: Repository<OrderHistory> = Repository::open(store, Collection::Orders).await?;

    Ok(Self {
      accounts: Arc::new(AccountService::new(users)),
      carts: Arc::new(CartService::new(carts)),
      orders: Arc::new(OrderService::new(orders)),
      config: Arc::new(config),
    })
  }
}
