// tests/common/mod.rs
#![allow(dead_code)] // Each test binary uses a different subset of the helpers

use once_cell::sync::Lazy;
use serde_json::{json, Map, Number, Value};
use std::sync::Arc;
use storefront::config::{AppConfig, StorageBackend};
use storefront::models::{Order, OrderLine, Product};
use storefront::store::{MemoryStore, RecordStore};
use storefront::AppState;
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

pub fn memory_config() -> AppConfig {
  AppConfig {
    storage_backend: StorageBackend::Memory,
    ..AppConfig::default()
  }
}

/// App state over a fresh in-memory store, plus the store for raw inspection.
pub async fn memory_state() -> (AppState, Arc<MemoryStore>) {
  setup_tracing();
  let store = Arc::new(MemoryStore::new());
  let dyn_store: Arc<dyn RecordStore> = store.clone();
  let state = AppState::with_store(dyn_store, memory_config())
    .await
    .expect("memory store never fails to open");
  (state, store)
}

pub fn product(id: i64, name: &str, price: i64) -> Product {
  Product {
    id,
    name: Some(name.to_string()),
    price: Some(Number::from(price)),
    image: Some(format!("/images/{}.png", id)),
    category: Some("Electronics".to_string()),
    extra: Map::new(),
  }
}

pub fn product_json(id: i64, name: &str, price: i64) -> Value {
  json!({
    "id": id,
    "name": name,
    "price": price,
    "image": format!("/images/{}.png", id),
    "category": "Electronics",
    "Description": format!("{} description", name),
  })
}

pub fn order(id: i64, total_amount: i64) -> Order {
  Order {
    id,
    items: vec![OrderLine {
      name: "Headphones".to_string(),
      quantity: 2,
      price: Number::from(total_amount / 2),
      extra: Map::new(),
    }],
    total_amount: Number::from(total_amount),
    status: "Processing".to_string(),
    delivery_date: "2026-10-23".to_string(),
    person_name: Some(json!("Asha")),
    address1: Some(json!("12 Market Road")),
    address2: None,
    city: Some(json!("Pune")),
    state: Some(json!("MH")),
    pincode: Some(json!("411001")),
    contact: Some(json!("9999999999")),
    extra: Map::new(),
  }
}

pub fn order_json(id: i64) -> Value {
  json!({
    "id": id,
    "items": [{ "name": "Headphones", "quantity": 1, "price": 1999 }],
    "totalAmount": 1999,
    "status": "Processing",
    "deliveryDate": "2026-10-23",
    "personName": "Asha",
    "address1": "12 Market Road",
    "address2": "Near the station",
    "city": "Pune",
    "state": "MH",
    "pincode": "411001",
    "contact": "9999999999",
    "cartItems": [{ "id": 3, "name": "Headphones", "quantity": 1, "price": 1999 }],
  })
}
