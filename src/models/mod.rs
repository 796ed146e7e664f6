pub mod achievement;
pub mod activity;
pub mod meal;
pub mod stats;
pub mod user;

pub use achievement::Achievement;
pub use activity::{Activity, NewActivity};
pub use meal::{Meal, NewMeal};
pub use stats::{StatProgress, TodayStats, TodayStatsPatch};
pub use user::{SessionStatus, User};
