// storefront/src/models/mod.rs

//! Records exchanged with the UI and persisted in the record store.

pub mod cart_item;
pub mod order;
pub mod product;
pub mod user;

pub use cart_item::CartItem;
pub use order::{Order, OrderLine};
pub use product::{Product, ProductId};
pub use user::User;
