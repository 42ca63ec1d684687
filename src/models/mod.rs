pub mod meal;
pub mod stats;

pub use meal::{DayGroup, MealRecord, NewMeal};
pub use stats::Stats;
