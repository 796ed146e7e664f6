use serde::{Deserialize, Serialize};

/// A logged workout session.
///
/// `activity_type` is free text; the UI offers Running/Cycling/Swimming/
/// Strength/Yoga/Walking/HIIT/Dancing/Boxing/Pilates but nothing is enforced
/// here. Records are immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
  pub id: i64,
  pub name: String,
  #[serde(rename = "type")]
  pub activity_type: String,
  pub time: String,
  pub calories: i64,
  /// Display string, "<N> min"
  pub duration: String,
  /// ISO date, YYYY-MM-DD
  pub date: String,
}

/// For inserting new activities (without id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
  pub name: String,
  #[serde(rename = "type")]
  pub activity_type: String,
  pub time: String,
  pub calories: i64,
  pub duration: String,
  pub date: String,
}
