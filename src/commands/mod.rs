pub mod log;
pub mod prefs;
pub mod session;
pub mod stats;

use crate::db::AppState;
use crate::models::{Achievement, Activity, Meal};
use std::sync::Arc;
use tauri::State;

#[tauri::command]
pub async fn get_activities(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<Activity>, String> {
  Ok(state.store()?.activities().to_vec())
}

#[tauri::command]
pub async fn get_meals(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<Meal>, String> {
  Ok(state.store()?.meals().to_vec())
}

#[tauri::command]
pub async fn get_achievements(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<Achievement>, String> {
  Ok(state.store()?.achievements().to_vec())
}

#[tauri::command]
pub async fn get_streak(state: State<'_, Arc<AppState>>) -> Result<u32, String> {
  Ok(state.store()?.streak())
}
