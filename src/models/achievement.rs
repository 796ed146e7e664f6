use serde::{Deserialize, Serialize};

/// A badge from the fixed seed set. Never created or deleted at runtime;
/// the only mutation is the unlock transition, which stamps `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
  pub id: i64,
  pub title: String,
  pub description: String,
  /// Icon identifier the frontend maps to a glyph
  pub icon: String,
  pub unlocked: bool,
  /// ISO date of the unlock, present only once unlocked
  #[serde(skip_serializing_if = "Option::is_none")]
  pub date: Option<String>,
}
