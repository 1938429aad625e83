// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where the record collections live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
  /// One pretty-printed JSON document per collection under `data_dir`.
  File,
  /// Process memory only; everything is lost on shutdown.
  Memory,
}

impl FromStr for StorageBackend {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "file" => Ok(StorageBackend::File),
      "memory" => Ok(StorageBackend::Memory),
      other => Err(AppError::Config(format!(
        "Invalid STORAGE_BACKEND '{}': expected 'file' or 'memory'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!(
        "Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'",
        other
      ))),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub data_dir: PathBuf,
  pub storage_backend: StorageBackend,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 5000,
      data_dir: PathBuf::from("data"),
      storage_backend: StorageBackend::File,
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from an arbitrary variable source, falling back to the
  /// defaults for anything unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT '{}': {}", raw, e)))?,
      None => defaults.server_port,
    };
    let data_dir = lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir);
    let storage_backend = match lookup("STORAGE_BACKEND") {
      Some(raw) => raw.parse()?,
      None => defaults.storage_backend,
    };
    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse()?,
      None => defaults.log_format,
    };

    Ok(Self {
      server_host,
      server_port,
      data_dir,
      storage_backend,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
