// storefront/src/services/account_service.rs

//! Registration and login against the users collection.

use crate::errors::{AppError, Result};
use crate::models::User;
use crate::store::Repository;
use tracing::{debug, info, instrument, warn};

pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const USER_ALREADY_EXISTS: &str = "User already exists";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug)]
pub struct AccountService {
  users: Repository<Vec<User>>,
}

impl AccountService {
  pub fn new(users: Repository<Vec<User>>) -> Self {
    Self { users }
  }

  /// Creates a user record.
  ///
  /// # Errors
  /// `Validation` when either field is missing or empty, `AlreadyExists` when
  /// the username is taken.
  #[instrument(name = "account_service::register", skip(self, password), err(Display))]
  pub async fn register(&self, username: Option<&str>, password: Option<&str>) -> Result<()> {
    let (username, password) = match (non_empty(username), non_empty(password)) {
      (Some(u), Some(p)) => (u.to_string(), p.to_string()),
      _ => {
        warn!("Registration rejected: username or password missing.");
        return Err(AppError::Validation(INVALID_REQUEST_BODY.to_string()));
      }
    };

    self
      .users
      .update(|users| -> Result<()> {
        if users.iter().any(|user| user.username == username) {
          debug!(%username, "Username already registered.");
          return Err(AppError::AlreadyExists(USER_ALREADY_EXISTS.to_string()));
        }
        users.push(User {
          username: username.clone(),
          password,
        });
        Ok(())
      })
      .await?;

    info!(%username, "User registered.");
    Ok(())
  }

  /// Checks the credentials and returns the matching username.
  #[instrument(name = "account_service::login", skip(self, password), err(Display))]
  pub async fn login(&self, username: Option<&str>, password: Option<&str>) -> Result<String> {
    let (Some(username), Some(password)) = (username, password) else {
      return Err(AppError::InvalidCredentials(INVALID_CREDENTIALS.to_string()));
    };

    let users = self.users.read().await?;
    match users.iter().find(|user| user.matches(username, password)) {
      Some(user) => {
        info!(username = %user.username, "Login successful.");
        Ok(user.username.clone())
      }
      None => {
        warn!(%username, "Login failed: no matching credentials.");
        Err(AppError::InvalidCredentials(INVALID_CREDENTIALS.to_string()))
      }
    }
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.filter(|v| !v.is_empty())
}
