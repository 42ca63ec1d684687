use chrono::{NaiveDate, NaiveTime};

use crate::models::{DayGroup, MealRecord, Stats};

/// Percentage at or above which adherence is shown as good.
pub const HIGH_PERCENT_THRESHOLD: f64 = 50.0;

/// Format the adherence percentage for display.
///
/// Rounded to two decimals with trailing zeros dropped. A diary with meals
/// but none healthy shows `0%`; an empty diary shows `-`.
pub fn format_percentage(stats: &Stats) -> String {
    let pct = stats.percentage;
    if pct.is_nan() || pct == 0.0 {
        return if stats.has_meals() { "0%" } else { "-" }.to_string();
    }

    let rounded = format!("{:.2}", (pct * 100.0).round() / 100.0);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{}%", trimmed)
}

/// Whether adherence counts as good. An empty diary is not penalized.
pub fn is_high_percent(stats: &Stats) -> bool {
    stats.percentage.is_nan() || stats.percentage >= HIGH_PERCENT_THRESHOLD
}

/// Section header for a day, e.g. `05.03.24`.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d.%m.%y").to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn diet_marker(meal: &MealRecord) -> &'static str {
    if meal.is_healthy { "[on diet] " } else { "[off diet]" }
}

/// Display the home view: adherence headline followed by meals per day.
pub fn display_home(groups: &[DayGroup], stats: &Stats) {
    let tone = if is_high_percent(stats) { "+" } else { "-" };

    println!();
    println!("({}) {}", tone, format_percentage(stats));
    println!("    of meals within the diet");
    println!();
    println!("=== Meals ===");

    if groups.iter().all(DayGroup::is_empty) {
        println!();
        println!("Log your first meal.");
        println!();
        return;
    }

    let max_id_len = groups
        .iter()
        .flat_map(|g| g.data.iter())
        .map(|m| m.id.len())
        .max()
        .unwrap_or(6);

    for group in groups.iter().filter(|g| !g.is_empty()) {
        println!();
        println!("{}", format_day(group.date));
        for meal in &group.data {
            println!(
                "  {:<width$}  {} | {} {}",
                meal.id,
                format_time(meal.time),
                diet_marker(meal),
                meal.name,
                width = max_id_len
            );
        }
    }

    println!();
}

/// Display the statistics view.
pub fn display_statistics(stats: &Stats) {
    println!();
    println!("=== Statistics ===");
    println!();
    println!("{} of meals within the diet", format_percentage(stats));
    println!();
    println!("Best streak of meals within the diet: {}", stats.better_sequence);
    println!("Meals logged: {}", stats.all_meals_count);
    println!("Meals within the diet: {}", stats.healthy_meals);
    println!("Meals off the diet: {}", stats.not_healthy_meals);
    println!();
}

/// Header of the new meal flow.
pub fn display_new_meal() {
    println!();
    println!("=== New meal ===");
    println!();
}

/// Display a single meal.
pub fn display_meal(date: NaiveDate, meal: &MealRecord) {
    println!();
    println!("=== {} ===", meal.name);
    println!();
    if !meal.description.is_empty() {
        println!("{}", meal.description);
        println!();
    }
    println!("Date and time: {} at {}", format_day(date), format_time(meal.time));
    println!(
        "{}",
        if meal.is_healthy { "Within the diet" } else { "Off the diet" }
    );
    println!("Id: {}", meal.id);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(percentage: f64, all: usize, healthy: usize) -> Stats {
        Stats {
            percentage,
            better_sequence: 0,
            all_meals_count: all,
            healthy_meals: healthy,
            not_healthy_meals: all - healthy,
        }
    }

    #[test]
    fn test_format_percentage_trims_zeros() {
        assert_eq!(format_percentage(&stats(75.0, 4, 3)), "75%");
        assert_eq!(format_percentage(&stats(100.0, 2, 2)), "100%");
        assert_eq!(format_percentage(&stats(50.5, 200, 101)), "50.5%");
        assert_eq!(format_percentage(&stats(200.0 / 3.0, 3, 2)), "66.67%");
    }

    #[test]
    fn test_format_percentage_without_healthy_meals() {
        assert_eq!(format_percentage(&stats(0.0, 3, 0)), "0%");
        assert_eq!(format_percentage(&stats(f64::NAN, 0, 0)), "-");
    }

    #[test]
    fn test_is_high_percent() {
        assert!(is_high_percent(&stats(50.0, 2, 1)));
        assert!(is_high_percent(&stats(f64::NAN, 0, 0)));
        assert!(!is_high_percent(&stats(33.3, 3, 1)));
    }

    #[test]
    fn test_format_day_and_time() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_day(date), "05.03.24");

        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(format_time(time), "07:05");
    }
}
