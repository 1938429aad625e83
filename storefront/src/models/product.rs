// storefront/src/models/product.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Identity of a catalog product.
pub type ProductId = i64;

/// A catalog entry as posted by the UI when adding to the cart.
///
/// The catalog itself is static data owned by the front-end, so only `id` is
/// required. Everything else, including fields not named here (e.g.
/// `Description`), is carried along untouched and omitted when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: ProductId,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Kept as the posted number so `1999` is not rewritten as `1999.0`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<Number>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}
