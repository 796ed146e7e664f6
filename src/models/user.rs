use serde::{Deserialize, Serialize};

/// The signed-in user. No credentials are stored anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub name: String,
  pub email: String,
}

/// Snapshot of the session sent to the frontend
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
  pub is_authenticated: bool,
  pub user: Option<User>,
}
