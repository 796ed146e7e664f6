use serde::{Deserialize, Serialize};

/// Daily goal constants the progress views are computed against
pub const CALORIE_GOAL: i64 = 2200;
pub const STEP_GOAL: i64 = 10000;
pub const ACTIVE_MINUTES_GOAL: i64 = 60;
pub const WATER_CUPS_GOAL: i64 = 8;

/// The single daily aggregate. This is a running counter, not a fold over
/// the activity history: adding a same-day activity bumps it, but deleting
/// one does not unwind it, so it can drift from the true sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStats {
  pub calories: i64,
  pub steps: i64,
  /// Active minutes
  pub active: i64,
  /// Cups of water
  pub water: i64,
}

/// Partial update for TodayStats; absent fields are left untouched
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TodayStatsPatch {
  pub calories: Option<i64>,
  pub steps: Option<i64>,
  pub active: Option<i64>,
  pub water: Option<i64>,
}

/// Progress toward one daily goal, for the ring/bar displays
#[derive(Debug, Clone, Serialize)]
pub struct StatProgress {
  pub label: &'static str,
  pub value: i64,
  pub goal: i64,
  /// value/goal as a percentage; may exceed 100
  pub progress: f64,
}

impl StatProgress {
  pub fn new(label: &'static str, value: i64, goal: i64) -> Self {
    Self {
      label,
      value,
      goal,
      progress: value as f64 / goal as f64 * 100.0,
    }
  }
}
