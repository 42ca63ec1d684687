use crate::models::{DayGroup, MealRecord, Stats};

/// Flatten day groups into a single meal sequence, keeping the given order
/// of groups and of meals within each group.
pub fn flatten_meals(groups: &[DayGroup]) -> impl Iterator<Item = &MealRecord> {
    groups.iter().flat_map(|group| group.data.iter())
}

/// Compute adherence statistics over the flattened meal sequence.
///
/// The streak is tracked across day boundaries: only record order matters.
/// With no meals the percentage is NaN.
pub fn compute_stats(groups: &[DayGroup]) -> Stats {
    let mut all_meals_count = 0;
    let mut healthy_meals = 0;
    let mut not_healthy_meals = 0;
    let mut sequence = 0;
    let mut better_sequence = 0;

    for meal in flatten_meals(groups) {
        all_meals_count += 1;

        if meal.is_healthy {
            healthy_meals += 1;
            sequence += 1;
        } else {
            not_healthy_meals += 1;
            sequence = 0;
        }

        if sequence > better_sequence {
            better_sequence = sequence;
        }
    }

    Stats {
        percentage: (healthy_meals as f64 / all_meals_count as f64) * 100.0,
        better_sequence,
        all_meals_count,
        healthy_meals,
        not_healthy_meals,
    }
}
