//! In-memory domain store
//!
//! Single source of truth for everything the tabs render: logged activities,
//! meals, the achievement set and the daily aggregate. All mutation goes
//! through the methods here so the store stays testable without a Tauri
//! harness; the command layer just locks it and delegates.
//!
//! Nothing in this module touches the database. The only durable state in
//! the app is the two display preferences (see `prefs`).

use std::env;

use chrono::Utc;

use crate::models::stats::{ACTIVE_MINUTES_GOAL, CALORIE_GOAL, STEP_GOAL, WATER_CUPS_GOAL};
use crate::models::{
  Achievement, Activity, Meal, NewActivity, NewMeal, StatProgress, TodayStats, TodayStatsPatch,
};

/// ---------------------------------------------------------------------------
/// "Today"
/// ---------------------------------------------------------------------------

/// The date the seeded demo data treats as the current day. Activities added
/// for this date fold into TodayStats; everything else is history.
const TODAY_DATE: &str = "2026-01-31";

/// Env override for the sentinel, handy when demoing with fresh dates
const TODAY_ENV_VAR: &str = "FITTRACK_TODAY";

/// The date (YYYY-MM-DD) that counts as today for the stats fold
pub fn today() -> String {
  env::var(TODAY_ENV_VAR).unwrap_or_else(|_| TODAY_DATE.to_string())
}

/// Leading integer of a duration display string ("45 min" -> 45).
/// A string with no leading digits contributes 0 active minutes.
fn parse_duration_minutes(duration: &str) -> i64 {
  let digits: String = duration
    .trim_start()
    .chars()
    .take_while(|c| c.is_ascii_digit())
    .collect();
  digits.parse().unwrap_or(0)
}

/// ---------------------------------------------------------------------------
/// Domain Store
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct DomainStore {
  activities: Vec<Activity>,
  meals: Vec<Meal>,
  achievements: Vec<Achievement>,
  today_stats: TodayStats,
  streak: u32,
}

impl DomainStore {
  /// Store seeded with the demo data the UI ships with
  pub fn seeded() -> Self {
    Self {
      activities: seed_activities(),
      meals: seed_meals(),
      achievements: seed_achievements(),
      today_stats: TodayStats {
        calories: 1847,
        steps: 8432,
        active: 45,
        water: 6,
      },
      streak: 5,
    }
  }

  /// Empty store (no seed data), for tests
  pub fn empty() -> Self {
    Self {
      activities: Vec::new(),
      meals: Vec::new(),
      achievements: Vec::new(),
      today_stats: TodayStats {
        calories: 0,
        steps: 0,
        active: 0,
        water: 0,
      },
      streak: 0,
    }
  }

  // -------------------------------------------------------------------------
  // Reads
  // -------------------------------------------------------------------------

  /// All activities, most recent first
  pub fn activities(&self) -> &[Activity] {
    &self.activities
  }

  pub fn meals(&self) -> &[Meal] {
    &self.meals
  }

  pub fn achievements(&self) -> &[Achievement] {
    &self.achievements
  }

  pub fn today_stats(&self) -> TodayStats {
    self.today_stats
  }

  pub fn streak(&self) -> u32 {
    self.streak
  }

  /// Activities logged for today's date
  pub fn today_activities(&self) -> Vec<Activity> {
    let today = today();
    self
      .activities
      .iter()
      .filter(|a| a.date == today)
      .cloned()
      .collect()
  }

  /// Progress toward each of the four daily goals, in display order
  pub fn today_progress(&self) -> Vec<StatProgress> {
    vec![
      StatProgress::new("Calories", self.today_stats.calories, CALORIE_GOAL),
      StatProgress::new("Steps", self.today_stats.steps, STEP_GOAL),
      StatProgress::new("Active", self.today_stats.active, ACTIVE_MINUTES_GOAL),
      StatProgress::new("Water", self.today_stats.water, WATER_CUPS_GOAL),
    ]
  }

  // -------------------------------------------------------------------------
  // Activities
  // -------------------------------------------------------------------------

  /// Log a new activity. The id is one past the highest id among the live
  /// records, so ids are unique at any moment but deleting the current max
  /// frees that id for the next insert. Newest entries sit at the front.
  ///
  /// When the activity is dated today, its calories and duration fold into
  /// TodayStats. The fold is one-way: deleting the activity later does not
  /// subtract them back out.
  pub fn add_activity(&mut self, input: NewActivity) -> Activity {
    let id = self.activities.iter().map(|a| a.id).max().unwrap_or(0) + 1;

    if input.date == today() {
      self.today_stats.calories += input.calories;
      self.today_stats.active += parse_duration_minutes(&input.duration);
    }

    let activity = Activity {
      id,
      name: input.name,
      activity_type: input.activity_type,
      time: input.time,
      calories: input.calories,
      duration: input.duration,
      date: input.date,
    };
    self.activities.insert(0, activity.clone());
    activity
  }

  /// Remove an activity by id; unknown ids are a silent no-op
  pub fn delete_activity(&mut self, id: i64) {
    self.activities.retain(|a| a.id != id);
  }

  // -------------------------------------------------------------------------
  // Meals
  // -------------------------------------------------------------------------

  /// Log a new meal. Same id scheme and ordering as activities; meals never
  /// touch TodayStats.
  pub fn add_meal(&mut self, input: NewMeal) -> Meal {
    let id = self.meals.iter().map(|m| m.id).max().unwrap_or(0) + 1;

    let meal = Meal {
      id,
      name: input.name,
      meal_type: input.meal_type,
      time: input.time,
      calories: input.calories,
      protein: input.protein,
      carbs: input.carbs,
      fats: input.fats,
    };
    self.meals.insert(0, meal.clone());
    meal
  }

  /// Remove a meal by id; unknown ids are a silent no-op
  pub fn delete_meal(&mut self, id: i64) {
    self.meals.retain(|m| m.id != id);
  }

  // -------------------------------------------------------------------------
  // Achievements
  // -------------------------------------------------------------------------

  /// Mark an achievement unlocked and stamp it with the current date.
  /// Unlocking an already-unlocked achievement just re-stamps the date;
  /// unknown ids are a silent no-op.
  pub fn unlock_achievement(&mut self, id: i64) {
    if let Some(a) = self.achievements.iter_mut().find(|a| a.id == id) {
      a.unlocked = true;
      a.date = Some(Utc::now().format("%Y-%m-%d").to_string());
    }
  }

  // -------------------------------------------------------------------------
  // Today's stats
  // -------------------------------------------------------------------------

  /// Shallow-merge the given fields into TodayStats
  pub fn update_today_stats(&mut self, patch: TodayStatsPatch) {
    if let Some(calories) = patch.calories {
      self.today_stats.calories = calories;
    }
    if let Some(steps) = patch.steps {
      self.today_stats.steps = steps;
    }
    if let Some(active) = patch.active {
      self.today_stats.active = active;
    }
    if let Some(water) = patch.water {
      self.today_stats.water = water;
    }
  }

  /// One more cup; no upper bound
  pub fn add_water(&mut self) -> TodayStats {
    self.today_stats.water += 1;
    self.today_stats
  }

  /// One fewer cup, floored at 0
  pub fn remove_water(&mut self) -> TodayStats {
    self.today_stats.water = (self.today_stats.water - 1).max(0);
    self.today_stats
  }
}

impl Default for DomainStore {
  fn default() -> Self {
    Self::seeded()
  }
}

/// ---------------------------------------------------------------------------
/// Seed Data
/// ---------------------------------------------------------------------------

fn seed_activities() -> Vec<Activity> {
  let mk = |id, name: &str, activity_type: &str, time: &str, calories, duration: &str, date: &str| {
    Activity {
      id,
      name: name.to_string(),
      activity_type: activity_type.to_string(),
      time: time.to_string(),
      calories,
      duration: duration.to_string(),
      date: date.to_string(),
    }
  };
  vec![
    mk(1, "Morning Run", "Running", "7:30 AM", 320, "30 min", "2026-01-31"),
    mk(2, "Strength Training", "Strength", "6:00 PM", 450, "45 min", "2026-01-31"),
    mk(3, "Yoga Session", "Yoga", "8:00 AM", 180, "40 min", "2026-01-30"),
    mk(4, "Cycling", "Cycling", "5:30 PM", 380, "50 min", "2026-01-29"),
  ]
}

fn seed_meals() -> Vec<Meal> {
  let mk = |id, name: &str, meal_type: &str, time: &str, calories, protein, carbs, fats| Meal {
    id,
    name: name.to_string(),
    meal_type: meal_type.to_string(),
    time: time.to_string(),
    calories,
    protein,
    carbs,
    fats,
  };
  vec![
    mk(1, "Oatmeal with Berries", "Breakfast", "8:00 AM", 320, 12, 54, 8),
    mk(2, "Grilled Chicken Salad", "Lunch", "12:30 PM", 450, 38, 24, 18),
    mk(3, "Protein Shake", "Snack", "3:00 PM", 200, 25, 15, 5),
    mk(4, "Salmon with Vegetables", "Dinner", "7:00 PM", 580, 42, 32, 28),
  ]
}

fn seed_achievements() -> Vec<Achievement> {
  let mk = |id, title: &str, description: &str, icon: &str, date: Option<&str>| Achievement {
    id,
    title: title.to_string(),
    description: description.to_string(),
    icon: icon.to_string(),
    unlocked: date.is_some(),
    date: date.map(str::to_string),
  };
  vec![
    mk(1, "First Step", "Complete your first workout", "target", Some("2026-01-20")),
    mk(2, "5 Day Streak", "Workout 5 days in a row", "zap", Some("2026-01-31")),
    mk(3, "10K Steps", "Walk 10,000 steps in a day", "footprints", Some("2026-01-28")),
    mk(4, "Early Bird", "Complete a morning workout", "sunrise", Some("2026-01-25")),
    mk(5, "Hydration Hero", "Drink 8 cups of water", "droplets", None),
    mk(6, "Week Warrior", "Complete 7 workouts in a week", "dumbbell", None),
    mk(7, "Calorie Crusher", "Burn 1000+ calories in a day", "flame", None),
    mk(8, "Consistency King", "30 day workout streak", "crown", None),
  ]
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
