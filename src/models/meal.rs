use serde::{Deserialize, Serialize};

/// A logged meal. Macros are grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
  pub id: i64,
  pub name: String,
  #[serde(rename = "type")]
  pub meal_type: String,
  pub time: String,
  pub calories: i64,
  pub protein: i64,
  pub carbs: i64,
  pub fats: i64,
}

/// For inserting new meals (without id).
/// Macros default to 0 when the form leaves them blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
  pub name: String,
  #[serde(rename = "type")]
  pub meal_type: String,
  pub time: String,
  pub calories: i64,
  #[serde(default)]
  pub protein: i64,
  #[serde(default)]
  pub carbs: i64,
  #[serde(default)]
  pub fats: i64,
}
