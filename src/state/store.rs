use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::error::{DiaryError, Result};
use crate::models::{DayGroup, MealRecord, NewMeal};
use crate::state::persistence::{load_day_groups, normalize_groups, save_day_groups};

const ID_PREFIX: &str = "meal-";

/// Source of persisted day-grouped meals.
pub trait MealFetcher {
    /// Fetch every day group, most recent day first, meals in time order.
    fn fetch_all(&self) -> Result<Vec<DayGroup>>;
}

/// Meal diary stored as a single JSON file.
pub struct MealStore {
    path: PathBuf,
}

impl MealStore {
    /// Open a store at `path`. The file is not touched until the first read or write.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Log a new meal on `date` and return the stored record.
    pub fn add_meal(&self, date: NaiveDate, meal: NewMeal) -> Result<MealRecord> {
        validate(&meal)?;

        let mut groups = self.fetch_all()?;
        let record = meal.into_record(next_id(&groups));
        insert(&mut groups, date, record.clone());
        save_day_groups(&self.path, &groups)?;

        info!(id = %record.id, %date, healthy = record.is_healthy, "meal added");
        Ok(record)
    }

    /// Look up a meal and the day it was logged on.
    pub fn get_meal(&self, id: &str) -> Result<(NaiveDate, MealRecord)> {
        self.fetch_all()?
            .into_iter()
            .find_map(|group| {
                group
                    .data
                    .into_iter()
                    .find(|m| m.id == id)
                    .map(|m| (group.date, m))
            })
            .ok_or_else(|| DiaryError::MealNotFound(id.to_string()))
    }

    /// Replace a meal's fields, keeping its id. The meal may move to another day.
    pub fn update_meal(&self, id: &str, date: NaiveDate, meal: NewMeal) -> Result<MealRecord> {
        validate(&meal)?;

        let mut groups = self.fetch_all()?;
        take(&mut groups, id)?;
        let record = meal.into_record(id.to_string());
        insert(&mut groups, date, record.clone());
        save_day_groups(&self.path, &groups)?;

        info!(id, %date, "meal updated");
        Ok(record)
    }

    /// Delete a meal and return it.
    pub fn remove_meal(&self, id: &str) -> Result<MealRecord> {
        let mut groups = self.fetch_all()?;
        let removed = take(&mut groups, id)?;
        save_day_groups(&self.path, &groups)?;

        info!(id, "meal removed");
        Ok(removed)
    }
}

impl MealFetcher for MealStore {
    fn fetch_all(&self) -> Result<Vec<DayGroup>> {
        load_day_groups(&self.path)
    }
}

fn validate(meal: &NewMeal) -> Result<()> {
    if meal.name.trim().is_empty() {
        return Err(DiaryError::Domain("Meal name must not be empty".to_string()));
    }
    Ok(())
}

/// One above the highest numeric id suffix in use.
fn next_id(groups: &[DayGroup]) -> String {
    let highest = groups
        .iter()
        .flat_map(|g| g.data.iter())
        .filter_map(|m| m.id.strip_prefix(ID_PREFIX)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", ID_PREFIX, highest + 1)
}

fn insert(groups: &mut Vec<DayGroup>, date: NaiveDate, record: MealRecord) {
    match groups.iter_mut().find(|g| g.date == date) {
        Some(group) => group.data.push(record),
        None => groups.push(DayGroup::new(date, vec![record])),
    }
    normalize_groups(groups);
}

fn take(groups: &mut Vec<DayGroup>, id: &str) -> Result<MealRecord> {
    let (day, pos) = groups
        .iter()
        .enumerate()
        .find_map(|(day, g)| g.data.iter().position(|m| m.id == id).map(|pos| (day, pos)))
        .ok_or_else(|| DiaryError::MealNotFound(id.to_string()))?;

    let removed = groups[day].data.remove(pos);
    groups.retain(|g| !g.is_empty());
    Ok(removed)
}
