//! Session commands
//!
//! Login/signup return a plain bool: the frontend shows its own blocking
//! alert on a false, so a rejected credential is not an error here.

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::SessionStatus;

#[tauri::command]
pub async fn login(
  state: State<'_, Arc<AppState>>,
  email: String,
  password: String,
) -> Result<bool, String> {
  Ok(state.session()?.login(&email, &password))
}

#[tauri::command]
pub async fn signup(
  state: State<'_, Arc<AppState>>,
  name: String,
  email: String,
  password: String,
) -> Result<bool, String> {
  Ok(state.session()?.signup(&name, &email, &password))
}

#[tauri::command]
pub async fn logout(state: State<'_, Arc<AppState>>) -> Result<(), String> {
  state.session()?.logout();
  Ok(())
}

#[tauri::command]
pub async fn get_session(state: State<'_, Arc<AppState>>) -> Result<SessionStatus, String> {
  Ok(state.session()?.status())
}
