// storefront/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::Order;
use crate::state::AppState;

#[instrument(name = "handler::get_orders", skip(app_state))]
pub async fn get_orders_handler(
  app_state: web::Data<AppState>,
  username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let orders = app_state.orders.get_orders(&username).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::place_order", skip(app_state, req_payload), fields(order_id = req_payload.id))]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  username: web::Path<String>,
  req_payload: web::Json<Order>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.orders.place_order(&username, req_payload.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({
      "message": "Order saved",
      "order": order,
  })))
}
