// storefront/src/services/mod.rs

pub mod account_service;
pub mod cart_service;
pub mod order_service;

pub use account_service::AccountService;
pub use cart_service::CartService;
pub use order_service::OrderService;
