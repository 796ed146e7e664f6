//! Display preference commands
//!
//! The in-memory copy is updated synchronously and is what the frontend
//! reads back; the durable write runs fire-and-forget. A failed write only
//! costs the preference on the next launch, so it is logged and dropped.

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::prefs::{self, Preferences, ACCENT_COLOR_KEY, DARK_MODE_KEY};

fn persist(state: &AppState, key: &'static str, value: String) {
  let Some(pool) = state.db.clone() else {
    // No database this session; the preference lives in memory only
    return;
  };
  tauri::async_runtime::spawn(async move {
    if let Err(e) = prefs::save_preference(&pool, key, &value).await {
      eprintln!("Failed to persist {}: {}", key, e);
    }
  });
}

#[tauri::command]
pub async fn get_preferences(state: State<'_, Arc<AppState>>) -> Result<Preferences, String> {
  Ok(state.prefs()?.clone())
}

#[tauri::command]
pub async fn set_dark_mode(
  state: State<'_, Arc<AppState>>,
  enabled: bool,
) -> Result<Preferences, String> {
  let snapshot = {
    let mut prefs = state.prefs()?;
    prefs.dark_mode = enabled;
    prefs.clone()
  };
  persist(&state, DARK_MODE_KEY, enabled.to_string());
  Ok(snapshot)
}

#[tauri::command]
pub async fn set_accent_color(
  state: State<'_, Arc<AppState>>,
  color: String,
) -> Result<Preferences, String> {
  let snapshot = {
    let mut prefs = state.prefs()?;
    prefs.accent_color = color.clone();
    prefs.clone()
  };
  persist(&state, ACCENT_COLOR_KEY, color);
  Ok(snapshot)
}
