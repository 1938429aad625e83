// storefront/src/models/order.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Line of an order: a snapshot of the cart item at checkout.
///
/// Anything beyond name, quantity and price (the UI sends the whole cart
/// item) is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  pub name: String,
  pub quantity: u32,
  pub price: Number,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// A completed checkout, built by the caller and stored verbatim.
///
/// `id` is chosen by the caller (the UI uses a millisecond timestamp) and is
/// not checked for uniqueness. Address and contact fields are taken as whatever
/// JSON the caller sends, so a numeric pincode or phone number survives as-is.
/// Fields the UI adds beyond the ones named here (such as `cartItems`) are
/// preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: i64,
  pub items: Vec<OrderLine>,
  pub total_amount: Number,
  pub status: String,
  pub delivery_date: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub person_name: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address1: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub address2: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub city: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub state: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub pincode: Option<Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub contact: Option<Value>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}
