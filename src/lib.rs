pub mod aggregator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use aggregator::compute_stats;
pub use error::{DiaryError, Result};
pub use models::{DayGroup, MealRecord, Stats};
