pub mod calculations;

pub use calculations::{compute_stats, flatten_meals};
