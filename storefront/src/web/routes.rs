// storefront/src/web/routes.rs

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::services::account_service::INVALID_REQUEST_BODY;
use crate::web::handlers::{auth_handlers, cart_handlers, order_handlers};

/// Liveness banner served on `/`.
pub const BANNER: &str = "E-commerce Backend is running";

async fn banner_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(BANNER)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  tracing::debug!(error = %err, "Rejected JSON payload.");
  AppError::Validation(INVALID_REQUEST_BODY.to_string()).into()
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid path parameter: {}", err)).into()
}

/// Registers extractor configuration and every API route.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .app_data(web::PathConfig::default().error_handler(path_error_handler))
    .route("/", web::get().to(banner_handler))
    // Account Routes
    .route("/register", web::post().to(auth_handlers::register_handler))
    .route("/login", web::post().to(auth_handlers::login_handler))
    // Cart Routes
    .service(
      web::scope("/cart/{username}")
        .route("", web::get().to(cart_handlers::get_cart_handler))
        .route("/add", web::post().to(cart_handlers::add_to_cart_handler))
        .route("/update", web::put().to(cart_handlers::update_cart_handler))
        .route(
          "/remove/{product_id}",
          web::delete().to(cart_handlers::remove_from_cart_handler),
        )
        .route("/clear", web::delete().to(cart_handlers::clear_cart_handler)),
    )
    // Order Routes
    .service(
      web::resource("/orders/{username}")
        .route(web::get().to(order_handlers::get_orders_handler))
        .route(web::post().to(order_handlers::place_order_handler)),
    );
}
