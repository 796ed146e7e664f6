//! Commands for logging and removing activities and meals
//!
//! Form-field validation (non-empty name, parseable numbers) happens in the
//! frontend before these are invoked; the store accepts what it is given.

use std::sync::Arc;
use tauri::State;

use crate::db::AppState;
use crate::models::{Activity, Meal, NewActivity, NewMeal};

/// Log a new activity and return the stored record (with its assigned id).
/// An activity dated today also bumps TodayStats.
#[tauri::command]
pub async fn add_activity(
  state: State<'_, Arc<AppState>>,
  activity: NewActivity,
) -> Result<Activity, String> {
  Ok(state.store()?.add_activity(activity))
}

/// Delete an activity by id; deleting an unknown id is a no-op
#[tauri::command]
pub async fn delete_activity(state: State<'_, Arc<AppState>>, id: i64) -> Result<(), String> {
  state.store()?.delete_activity(id);
  Ok(())
}

/// Log a new meal and return the stored record
#[tauri::command]
pub async fn add_meal(
  state: State<'_, Arc<AppState>>,
  meal: NewMeal,
) -> Result<Meal, String> {
  Ok(state.store()?.add_meal(meal))
}

/// Delete a meal by id; deleting an unknown id is a no-op
#[tauri::command]
pub async fn delete_meal(state: State<'_, Arc<AppState>>, id: i64) -> Result<(), String> {
  state.store()?.delete_meal(id);
  Ok(())
}
