// storefront/src/main.rs

use storefront::config::{AppConfig, LogFormat};
use storefront::state::AppState;
use storefront::web;

use actix_cors::Cors;
use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Pretty => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Config comes first so LOG_FORMAT can pick the subscriber.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  tracing::info!("Starting storefront server...");

  let server_address = app_config.bind_address();
  let app_state = AppState::from_config(app_config)
    .await
    .context("Failed to open the record store")?;
  tracing::info!("Record collections ready.");

  tracing::info!("Attempting to bind server to {}...", server_address);
  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(Cors::permissive()) // The browser UI is served from another origin
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await
  .context("Server terminated abnormally")?;

  Ok(())
}
