// storefront/src/services/cart_service.rs

//! Per-user cart bookkeeping.
//!
//! Each user's cart is an ordered list of [`CartItem`]s keyed by product id.
//! Adding a product that is already present increments its quantity instead
//! of appending a second line.

use std::collections::BTreeMap;

use crate::errors::{AppError, Result};
use crate::models::{CartItem, Product, ProductId};
use crate::store::Repository;
use tracing::{debug, info, instrument, warn};

pub type Carts = BTreeMap<String, Vec<CartItem>>;

pub const CART_NOT_FOUND: &str = "Cart not found";
pub const ITEM_NOT_FOUND: &str = "Item not found in cart";

#[derive(Debug)]
pub struct CartService {
  carts: Repository<Carts>,
}

impl CartService {
  pub fn new(carts: Repository<Carts>) -> Self {
    Self { carts }
  }

  /// Returns the user's cart, empty if they never had one. Nothing is written.
  #[instrument(name = "cart_service::get_cart", skip(self))]
  pub async fn get_cart(&self, username: &str) -> Result<Vec<CartItem>> {
    let mut carts = self.carts.read().await?;
    Ok(carts.remove(username).unwrap_or_default())
  }

  /// Upserts `product` into the cart: an existing line for the same product id
  /// gets `quantity` added, otherwise a new line is appended.
  #[instrument(
    name = "cart_service::add_item",
    skip(self, product),
    fields(product_id = product.id),
    err(Display)
  )]
  pub async fn add_item(&self, username: &str, product: Product, quantity: i64) -> Result<Vec<CartItem>> {
    let quantity = positive_quantity(quantity)?;

    self
      .carts
      .update(|carts| -> Result<Vec<CartItem>> {
        let cart = carts.entry(username.to_string()).or_default();
        match cart.iter_mut().find(|item| item.id == product.id) {
          Some(existing) => {
            existing.quantity = existing.quantity.checked_add(quantity).ok_or_else(|| {
              AppError::Validation(format!("Quantity for product {} is too large.", product.id))
            })?;
            debug!(product_id = product.id, quantity = existing.quantity, "Incremented existing cart line.");
          }
          None => {
            debug!(product_id = product.id, quantity, "Appended new cart line.");
            cart.push(CartItem::from_product(product, quantity));
          }
        }
        Ok(cart.clone())
      })
      .await
  }

  /// Sets the quantity of an existing line. A quantity of zero or less removes it.
  ///
  /// # Errors
  /// `NotFound` when the user has no cart or the product is not in it.
  #[instrument(name = "cart_service::update_quantity", skip(self), err(Display))]
  pub async fn update_quantity(&self, username: &str, product_id: ProductId, quantity: i64) -> Result<Vec<CartItem>> {
    self
      .carts
      .update(|carts| -> Result<Vec<CartItem>> {
        let cart = carts
          .get_mut(username)
          .ok_or_else(|| AppError::NotFound(CART_NOT_FOUND.to_string()))?;
        let index = cart
          .iter()
          .position(|item| item.id == product_id)
          .ok_or_else(|| AppError::NotFound(ITEM_NOT_FOUND.to_string()))?;

        if quantity <= 0 {
          cart.remove(index);
          debug!(product_id, "Removed cart line via zero quantity.");
        } else {
          let quantity = positive_quantity(quantity)?;
          if let Some(item) = cart.get_mut(index) {
            item.quantity = quantity;
          }
        }
        Ok(cart.clone())
      })
      .await
  }

  /// Drops the line for `product_id`. A product that is not in the cart is not
  /// an error.
  ///
  /// # Errors
  /// `NotFound` when the user has no cart.
  #[instrument(name = "cart_service::remove_item", skip(self), err(Display))]
  pub async fn remove_item(&self, username: &str, product_id: ProductId) -> Result<Vec<CartItem>> {
    self
      .carts
      .update(|carts| -> Result<Vec<CartItem>> {
        let cart = carts
          .get_mut(username)
          .ok_or_else(|| AppError::NotFound(CART_NOT_FOUND.to_string()))?;
        cart.retain(|item| item.id != product_id);
        Ok(cart.clone())
      })
      .await
  }

  /// Empties the user's cart if they have one.
  #[instrument(name = "cart_service::clear_cart", skip(self))]
  pub async fn clear_cart(&self, username: &str) -> Result<()> {
    self
      .carts
      .update(|carts| {
        if let Some(cart) = carts.get_mut(username) {
          cart.clear();
        }
        Ok::<_, AppError>(())
      })
      .await?;
    info!(%username, "Cart cleared.");
    Ok(())
  }
}

fn positive_quantity(quantity: i64) -> Result<u32> {
  if quantity <= 0 {
    warn!(quantity, "Rejected non-positive cart quantity.");
    return Err(AppError::Validation("Quantity must be a positive number.".to_string()));
  }
  u32::try_from(quantity).map_err(|_| AppError::Validation(format!("Quantity {} is too large.", quantity)))
}
