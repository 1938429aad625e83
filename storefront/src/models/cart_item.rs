// storefront/src/models/cart_item.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::product::{Product, ProductId};

/// One product line in a user's cart. At most one per product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub id: ProductId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  pub quantity: u32,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl CartItem {
  pub fn from_product(product: Product, quantity: u32) -> Self {
    let Product {
      id,
      name,
      price,
      image,
      category,
      mut extra,
    } = product;
    // A stale quantity inside the product payload must not shadow ours.
    extra.remove("quantity");
    Self {
      id,
      name,
      price,
      image,
      category,
      quantity,
      extra,
    }
  }
}
