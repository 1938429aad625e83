// storefront/src/services/order_service.rs

use std::collections::BTreeMap;

use crate::errors::{AppError, Result};
use crate::models::Order;
use crate::store::Repository;
use tracing::{info, instrument};

pub type OrderHistory = BTreeMap<String, Vec<Order>>;

#[derive(Debug)]
pub struct OrderService {
  orders: Repository<OrderHistory>,
}

impl OrderService {
  pub fn new(orders: Repository<OrderHistory>) -> Self {
    Self { orders }
  }

  /// Appends `order` to the user's history as-is. Duplicate ids are accepted.
  #[instrument(
    name = "order_service::place_order",
    skip(self, order),
    fields(order_id = order.id, total_amount = %order.total_amount)
  )]
  pub async fn place_order(&self, username: &str, order: Order) -> Result<Order> {
    let stored = order.clone();
    let position = self
      .orders
      .update(|history| {
        let orders = history.entry(username.to_string()).or_default();
        orders.push(order);
        Ok::<_, AppError>(orders.len())
      })
      .await?;
    info!(%username, order_id = stored.id, position, "Order saved.");
    Ok(stored)
  }

  /// Orders in the sequence they were placed; empty for users without history.
  #[instrument(name = "order_service::get_orders", skip(self))]
  pub async fn get_orders(&self, username: &str) -> Result<Vec<Order>> {
    let mut history = self.orders.read().await?;
    Ok(history.remove(username).unwrap_or_default())
  }
}
