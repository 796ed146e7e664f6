//! Session state
//!
//! Two states: logged out and logged in. Login and signup are placeholder
//! checks (any non-empty credentials succeed); there is no credential store,
//! token or expiry. Failed attempts leave the state untouched and the
//! frontend shows the rejection.

use crate::models::{SessionStatus, User};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
  is_authenticated: bool,
  user: Option<User>,
}

impl SessionState {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_authenticated(&self) -> bool {
    self.is_authenticated
  }

  pub fn user(&self) -> Option<&User> {
    self.user.as_ref()
  }

  pub fn status(&self) -> SessionStatus {
    SessionStatus {
      is_authenticated: self.is_authenticated,
      user: self.user.clone(),
    }
  }

  /// Sign in with email + password. Succeeds iff both are non-empty; the
  /// display name is the local part of the email.
  pub fn login(&mut self, email: &str, password: &str) -> bool {
    if email.is_empty() || password.is_empty() {
      return false;
    }
    let name = email.split('@').next().unwrap_or(email).to_string();
    self.user = Some(User {
      name,
      email: email.to_string(),
    });
    self.is_authenticated = true;
    true
  }

  /// Create an account and sign in. Succeeds iff all fields are non-empty.
  pub fn signup(&mut self, name: &str, email: &str, password: &str) -> bool {
    if name.is_empty() || email.is_empty() || password.is_empty() {
      return false;
    }
    self.user = Some(User {
      name: name.to_string(),
      email: email.to_string(),
    });
    self.is_authenticated = true;
    true
  }

  /// Unconditionally clear the session
  pub fn logout(&mut self) {
    self.user = None;
    self.is_authenticated = false;
  }
}
