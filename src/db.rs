use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tauri::Manager;

use crate::prefs::Preferences;
use crate::session::SessionState;
use crate::store::DomainStore;

pub type DbPool = SqlitePool;

/// Application state shared with every command.
///
/// The domain store and session live in memory and are the source of truth;
/// the pool only backs the two display preferences. `db` is None when the
/// database failed to open - the app keeps running, preferences just won't
/// survive a restart.
pub struct AppState {
  pub db: Option<DbPool>,
  pub store: Mutex<DomainStore>,
  pub session: Mutex<SessionState>,
  pub prefs: Mutex<Preferences>,
}

impl AppState {
  pub fn new(db: Option<DbPool>, prefs: Preferences) -> Self {
    Self {
      db,
      store: Mutex::new(DomainStore::seeded()),
      session: Mutex::new(SessionState::new()),
      prefs: Mutex::new(prefs),
    }
  }

  pub fn store(&self) -> Result<MutexGuard<'_, DomainStore>, String> {
    self.store.lock().map_err(|_| "store lock poisoned".to_string())
  }

  pub fn session(&self) -> Result<MutexGuard<'_, SessionState>, String> {
    self.session.lock().map_err(|_| "session lock poisoned".to_string())
  }

  pub fn prefs(&self) -> Result<MutexGuard<'_, Preferences>, String> {
    self.prefs.lock().map_err(|_| "prefs lock poisoned".to_string())
  }
}

/// Get the path to the database file
/// Stored in: ~/Library/Application Support/com.fittrack.app/fittrack.db
fn get_db_path<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<PathBuf, Box<dyn std::error::Error>> {
  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| format!("Failed to get app data dir: {}", e))?;

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)?;

  Ok(data_dir.join("fittrack.db"))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db<R: tauri::Runtime>(app: &tauri::AppHandle<R>) -> Result<DbPool, Box<dyn std::error::Error>> {
  let db_path = get_db_path(app)?;
  let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

  println!("Initializing database at: {}", db_path.display());

  // Create connection pool
  let pool = SqlitePoolOptions::new()
    .max_connections(5)
    .connect(&db_url)
    .await?;

  // Run migrations
  sqlx::migrate!("./migrations").run(&pool).await?;

  println!("Database initialized successfully");

  Ok(pool)
}
