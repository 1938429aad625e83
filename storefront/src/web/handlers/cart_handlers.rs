// storefront/src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{Product, ProductId};
use crate::state::AppState;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct AddToCartRequestPayload {
  pub product: Product,
  #[serde(default = "default_add_quantity")]
  pub quantity: i64,
}

fn default_add_quantity() -> i64 {
  1
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequestPayload {
  pub product_id: ProductId,
  pub quantity: i64,
}

// --- Handler Implementation ---

#[instrument(name = "handler::get_cart", skip(app_state))]
pub async fn get_cart_handler(
  app_state: web::Data<AppState>,
  username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let cart = app_state.carts.get_cart(&username).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(
    name = "handler::add_to_cart",
    skip(app_state, req_payload),
    fields(product_id = req_payload.product.id, quantity = req_payload.quantity)
)]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  username: web::Path<String>,
  req_payload: web::Json<AddToCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let AddToCartRequestPayload { product, quantity } = req_payload.into_inner();
  let cart = app_state.carts.add_item(&username, product, quantity).await?;

  info!("Add to cart successful for user: {}. Cart now holds {} lines.", username, cart.len());
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::update_cart", skip(app_state))]
pub async fn update_cart_handler(
  app_state: web::Data<AppState>,
  username: web::Path<String>,
  req_payload: web::Json<UpdateCartRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let UpdateCartRequestPayload { product_id, quantity } = req_payload.into_inner();
  let cart = app_state.carts.update_quantity(&username, product_id, quantity).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state))]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  path: web::Path<(String, ProductId)>,
) -> Result<HttpResponse, AppError> {
  let (username, product_id) = path.into_inner();
  let cart = app_state.carts.remove_item(&username, product_id).await?;
  Ok(HttpResponse::Ok().json(cart))
}

#[instrument(name = "handler::clear_cart", skip(app_state))]
pub async fn clear_cart_handler(
  app_state: web::Data<AppState>,
  username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  app_state.carts.clear_cart(&username).await?;
  Ok(HttpResponse::Ok().json(json!({ "message": "Cart cleared successfully" })))
}
