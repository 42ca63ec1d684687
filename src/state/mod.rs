mod home;
mod persistence;
mod store;

pub use home::{Alert, FetchOutcome, HomeState};
pub use persistence::{load_day_groups, normalize_groups, save_day_groups};
pub use store::{MealFetcher, MealStore};
