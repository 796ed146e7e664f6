//! Test utilities and helpers for integration and unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Seed helpers

use crate::models::{NewActivity, NewMeal};
use sqlx::SqlitePool;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  // Run migrations
  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed the preferences table with stored values
pub async fn seed_test_preferences(pool: &SqlitePool, dark_mode: bool, accent_color: &str) {
  for (key, value) in [
    (crate::prefs::DARK_MODE_KEY, dark_mode.to_string()),
    (crate::prefs::ACCENT_COLOR_KEY, accent_color.to_string()),
  ] {
    sqlx::query("INSERT OR REPLACE INTO preferences (key, value) VALUES (?1, ?2)")
      .bind(key)
      .bind(value)
      .execute(pool)
      .await
      .expect("Failed to seed preference");
  }
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// Create a mock activity input for testing
pub fn mock_activity(name: &str, calories: i64, date: &str) -> NewActivity {
  NewActivity {
    name: name.to_string(),
    activity_type: "Running".to_string(),
    time: "7:00 AM".to_string(),
    calories,
    duration: "30 min".to_string(),
    date: date.to_string(),
  }
}

/// Create a mock meal input for testing
pub fn mock_meal(name: &str, calories: i64) -> NewMeal {
  NewMeal {
    name: name.to_string(),
    meal_type: "Lunch".to_string(),
    time: "12:30 PM".to_string(),
    calories,
    protein: 20,
    carbs: 40,
    fats: 10,
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::prefs::load_preferences;
  use crate::store::DomainStore;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    // Verify the preferences table exists
    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'preferences'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_preferences_round_trips() {
    let pool = setup_test_db().await;

    seed_test_preferences(&pool, true, "purple").await;

    let prefs = load_preferences(&pool).await.expect("Should load");
    assert!(prefs.dark_mode);
    assert_eq!(prefs.accent_color, "purple");

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let activity = mock_activity("Evening Run", 250, "2026-01-15");
    assert_eq!(activity.name, "Evening Run");
    assert_eq!(activity.calories, 250);
    assert_eq!(activity.duration, "30 min");

    let meal = mock_meal("Salad", 350);
    assert_eq!(meal.meal_type, "Lunch");
    assert_eq!(meal.calories, 350);

    // Factories feed straight into the store
    let mut store = DomainStore::empty();
    let added = store.add_activity(activity);
    assert_eq!(added.id, 1);
    let added = store.add_meal(meal);
    assert_eq!(added.id, 1);
  }
}
