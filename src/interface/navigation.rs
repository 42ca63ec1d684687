use chrono::NaiveDate;
use tracing::debug;

use crate::interface::render::{display_home, display_meal, display_new_meal, display_statistics};
use crate::models::{DayGroup, MealRecord, Stats};

/// Screens reachable from the home view, with the data each one needs.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    Statistics(Stats),
    Meal { date: NaiveDate, meal: MealRecord },
    NewMeal,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Statistics(_) => "statistics",
            Route::Meal { .. } => "meal",
            Route::NewMeal => "new",
        }
    }
}

/// Render the destination of a route.
///
/// `NewMeal` only prints its header; the caller runs the entry prompts.
pub fn navigate(route: &Route, meals: &[DayGroup], home_stats: &Stats) {
    debug!(route = route.name(), "navigating");
    match route {
        Route::Home => display_home(meals, home_stats),
        Route::Statistics(stats) => display_statistics(stats),
        Route::Meal { date, meal } => display_meal(*date, meal),
        Route::NewMeal => display_new_meal(),
    }
}
