use chrono::{Local, NaiveDate, NaiveTime};
use dialoguer::{Confirm, Input, Select};

use crate::error::{DiaryError, Result};

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| DiaryError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", input)))
}

/// Parse an `HH:MM` time of day.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| DiaryError::InvalidInput(format!("Invalid time '{}', expected HH:MM", input)))
}

/// Prompt for the meal name.
pub fn prompt_name(default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt("Name");
    if let Some(name) = default {
        input = input.default(name.to_string());
    }
    Ok(input.interact_text()?)
}

/// Prompt for an optional description.
pub fn prompt_description(default: Option<&str>) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt("Description")
        .default(default.unwrap_or_default().to_string())
        .allow_empty(true)
        .interact_text()?)
}

/// Prompt for the day the meal was eaten, today by default.
pub fn prompt_date(default: Option<NaiveDate>) -> Result<NaiveDate> {
    let default = default.unwrap_or_else(|| Local::now().date_naive());
    let input: String = Input::new()
        .with_prompt("Date (YYYY-MM-DD)")
        .default(default.format("%Y-%m-%d").to_string())
        .interact_text()?;

    parse_date(&input)
}

/// Prompt for the time the meal was eaten, now by default.
pub fn prompt_time(default: Option<NaiveTime>) -> Result<NaiveTime> {
    let default = default.unwrap_or_else(|| Local::now().time());
    let input: String = Input::new()
        .with_prompt("Time (HH:MM)")
        .default(default.format("%H:%M").to_string())
        .interact_text()?;

    parse_time(&input)
}

/// Ask whether the meal was within the diet.
pub fn prompt_is_healthy(default: Option<bool>) -> Result<bool> {
    let options = ["Yes, within the diet", "No, off the diet"];
    let selection = Select::new()
        .with_prompt("Is it within the diet?")
        .items(&options)
        .default(if default == Some(false) { 1 } else { 0 })
        .interact()?;

    Ok(selection == 0)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
