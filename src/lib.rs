mod commands;
mod db;
mod models;
mod prefs;
mod session;
mod store;
#[cfg(test)]
mod test_utils;

use db::AppState;
use prefs::Preferences;
use std::sync::Arc;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
  // Load environment variables from .env file
  dotenvy::dotenv().ok();

  tauri::Builder::default()
    .plugin(tauri_plugin_opener::init())
    .setup(|app| {
      // Open the preferences database; the app runs fine without it
      let app_handle = app.handle().clone();
      tauri::async_runtime::block_on(async move {
        let db = match db::initialize_db(&app_handle).await {
          Ok(pool) => Some(pool),
          Err(e) => {
            eprintln!("Failed to initialize database: {}", e);
            None
          }
        };

        let saved_prefs = match &db {
          Some(pool) => match prefs::load_preferences(pool).await {
            Ok(p) => p,
            Err(e) => {
              eprintln!("Failed to load preferences: {}", e);
              Preferences::default()
            }
          },
          None => Preferences::default(),
        };

        let state = Arc::new(AppState::new(db, saved_prefs));
        app_handle.manage(state);
        println!("FitTrack state ready");
      });
      Ok(())
    })
    .invoke_handler(tauri::generate_handler![
      commands::get_activities,
      commands::get_meals,
      commands::get_achievements,
      commands::get_streak,
      // Logging commands
      commands::log::add_activity,
      commands::log::delete_activity,
      commands::log::add_meal,
      commands::log::delete_meal,
      // Daily stats commands
      commands::stats::get_today_stats,
      commands::stats::update_today_stats,
      commands::stats::add_water,
      commands::stats::remove_water,
      commands::stats::get_today_activities,
      commands::stats::get_today_progress,
      commands::stats::unlock_achievement,
      // Session commands
      commands::session::login,
      commands::session::signup,
      commands::session::logout,
      commands::session::get_session,
      // Preference commands
      commands::prefs::get_preferences,
      commands::prefs::set_dark_mode,
      commands::prefs::set_accent_color,
    ])
    .run(tauri::generate_context!())
    .expect("error while running tauri application");
}
