// storefront/src/models/user.rs

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// The password is kept and compared as plaintext, matching the existing
/// `users.json` data. Do not reuse this record for anything security-relevant.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub username: String,
  pub password: String,
}

impl User {
  pub fn matches(&self, username: &str, password: &str) -> bool {
    self.username == username && self.password == password
  }
}

// Manual impl so the password never ends up in logs.
impl std::fmt::Debug for User {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("User")
      .field("username", &self.username)
      .field("password", &"[REDACTED]")
      .finish()
  }
}
