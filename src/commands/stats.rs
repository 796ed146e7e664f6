//! Commands for the daily dashboard: TodayStats, water tracking, the
//! today-filtered activity list and achievement unlocks

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::{Activity, StatProgress, TodayStats, TodayStatsPatch};

#[tauri::command]
pub async fn get_today_stats(state: State<'_, Arc<AppState>>) -> Result<TodayStats, String> {
  Ok(state.store()?.today_stats())
}

/// Shallow-merge the given fields into TodayStats
#[tauri::command]
pub async fn update_today_stats(
  state: State<'_, Arc<AppState>>,
  patch: TodayStatsPatch,
) -> Result<TodayStats, String> {
  let mut store = state.store()?;
  store.update_today_stats(patch);
  Ok(store.today_stats())
}

#[tauri::command]
pub async fn add_water(state: State<'_, Arc<AppState>>) -> Result<TodayStats, String> {
  Ok(state.store()?.add_water())
}

#[tauri::command]
pub async fn remove_water(state: State<'_, Arc<AppState>>) -> Result<TodayStats, String> {
  Ok(state.store()?.remove_water())
}

/// Activities logged for today's date, for the home screen
#[tauri::command]
pub async fn get_today_activities(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<Activity>, String> {
  Ok(state.store()?.today_activities())
}

/// Progress toward the four daily goals, for the rings
#[tauri::command]
pub async fn get_today_progress(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<StatProgress>, String> {
  Ok(state.store()?.today_progress())
}

/// Unlock an achievement, stamping it with the current date.
/// Unknown ids and re-unlocks are harmless.
#[tauri::command]
pub async fn unlock_achievement(state: State<'_, Arc<AppState>>, id: i64) -> Result<(), String> {
  state.store()?.unlock_achievement(id);
  Ok(())
}
