// storefront/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

// --- Request DTOs ---
// Both fields are optional so a missing one is reported by the service, not by
// the JSON extractor.
#[derive(Deserialize)]
pub struct CredentialsPayload {
  #[serde(default)]
  pub username: Option<String>,
  #[serde(default)]
  pub password: Option<String>,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::register",
    skip(app_state, req_payload),
    fields(req_username = ?req_payload.username)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CredentialsPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  app_state
    .accounts
    .register(payload.username.as_deref(), payload.password.as_deref())
    .await?;

  Ok(HttpResponse::Ok().json(json!({ "message": "User registered successfully" })))
}

#[instrument(
    name = "handler::login",
    skip(app_state, req_payload),
    fields(req_username = ?req_payload.username)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CredentialsPayload>,
) -> Result<HttpResponse, AppError> {
  let payload = req_payload.into_inner();
  let username = app_state
    .accounts
    .login(payload.username.as_deref(), payload.password.as_deref())
    .await?;

  info!("Signin successful for {}", username);
  Ok(HttpResponse::Ok().json(json!({
      "message": "Login successful",
      "username": username,
  })))
}
