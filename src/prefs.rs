//! Preference persistence
//!
//! The only durable state in the app: the dark-mode flag and the accent
//! color, stored as rows in a sqlite key-value table so they survive a
//! restart. Loaded once at startup; writes are issued fire-and-forget by the
//! command layer, with the in-memory copy staying authoritative for the
//! running session. Both functions return a Result so a caller that does
//! care about completion can await it.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

pub const DARK_MODE_KEY: &str = "darkMode";
pub const ACCENT_COLOR_KEY: &str = "accentColor";

/// ---------------------------------------------------------------------------
/// Preferences
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
  pub dark_mode: bool,
  pub accent_color: String,
}

impl Default for Preferences {
  fn default() -> Self {
    Self {
      dark_mode: false,
      accent_color: "teal".to_string(),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),
}

impl Serialize for PrefsError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// ---------------------------------------------------------------------------
/// Load / Save
/// ---------------------------------------------------------------------------

/// Load stored preferences, falling back to the defaults for any key that is
/// missing or holds an unparseable value.
pub async fn load_preferences(pool: &SqlitePool) -> Result<Preferences, PrefsError> {
  let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM preferences")
    .fetch_all(pool)
    .await?;

  let mut prefs = Preferences::default();
  for (key, value) in rows {
    match key.as_str() {
      DARK_MODE_KEY => {
        if let Ok(flag) = value.parse() {
          prefs.dark_mode = flag;
        }
      }
      ACCENT_COLOR_KEY => prefs.accent_color = value,
      _ => {}
    }
  }

  Ok(prefs)
}

/// Upsert a single preference row
pub async fn save_preference(pool: &SqlitePool, key: &str, value: &str) -> Result<(), PrefsError> {
  sqlx::query(
    r#"
    INSERT INTO preferences (key, value)
    VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET
      value = excluded.value,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(key)
  .bind(value)
  .execute(pool)
  .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{setup_test_db, teardown_test_db};

  #[tokio::test]
  async fn test_load_defaults_from_empty_table() {
    let pool = setup_test_db().await;

    let prefs = load_preferences(&pool).await.expect("Should load");
    assert_eq!(prefs, Preferences::default());
    assert!(!prefs.dark_mode);
    assert_eq!(prefs.accent_color, "teal");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_save_and_load_round_trip() {
    let pool = setup_test_db().await;

    save_preference(&pool, DARK_MODE_KEY, "true")
      .await
      .expect("Should save dark mode");
    save_preference(&pool, ACCENT_COLOR_KEY, "purple")
      .await
      .expect("Should save accent color");

    let prefs = load_preferences(&pool).await.expect("Should load");
    assert!(prefs.dark_mode);
    assert_eq!(prefs.accent_color, "purple");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_save_overwrites_existing_value() {
    let pool = setup_test_db().await;

    save_preference(&pool, ACCENT_COLOR_KEY, "purple")
      .await
      .expect("Should save");
    save_preference(&pool, ACCENT_COLOR_KEY, "orange")
      .await
      .expect("Should overwrite");

    let prefs = load_preferences(&pool).await.expect("Should load");
    assert_eq!(prefs.accent_color, "orange");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_unparseable_dark_mode_keeps_default() {
    let pool = setup_test_db().await;

    save_preference(&pool, DARK_MODE_KEY, "not-a-bool")
      .await
      .expect("Should save");

    let prefs = load_preferences(&pool).await.expect("Should load");
    assert!(!prefs.dark_mode);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_unknown_keys_are_ignored() {
    let pool = setup_test_db().await;

    save_preference(&pool, "somethingElse", "whatever")
      .await
      .expect("Should save");

    let prefs = load_preferences(&pool).await.expect("Should load");
    assert_eq!(prefs, Preferences::default());

    teardown_test_db(pool).await;
  }
}
