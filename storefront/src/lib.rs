// storefront/src/lib.rs

//! Storefront: the HTTP/JSON back-end of a demo shop.
//!
//! It keeps three record collections (users, carts keyed by username and
//! order histories keyed by username) and exposes them to the browser UI:
//!  - registration and login,
//!  - cart upsert, quantity update, removal and clearing,
//!  - order placement and history.
//!
//! Storage is behind [`store::RecordStore`]; the default backend writes one
//! pretty-printed JSON file per collection.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod web;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
