use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single logged meal.
///
/// `is_healthy` has no serde default: a stored record without the flag fails
/// to load instead of silently counting as off-diet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    pub time: NaiveTime,

    pub is_healthy: bool,
}

/// All meals logged on one day, in time order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    pub date: NaiveDate,

    pub data: Vec<MealRecord>,
}

impl DayGroup {
    pub fn new(date: NaiveDate, data: Vec<MealRecord>) -> Self {
        Self { date, data }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Fields supplied by the user when logging or editing a meal.
#[derive(Debug, Clone)]
pub struct NewMeal {
    pub name: String,
    pub description: String,
    pub time: NaiveTime,
    pub is_healthy: bool,
}

impl NewMeal {
    /// Build the stored record under the given id.
    pub fn into_record(self, id: String) -> MealRecord {
        MealRecord {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            time: self.time,
            is_healthy: self.is_healthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id": "meal-1", "name": "Salad", "time": "12:30:00", "isHealthy": true}"#;
        let meal: MealRecord = serde_json::from_str(json).unwrap();

        assert_eq!(meal.id, "meal-1");
        assert_eq!(meal.description, "");
        assert_eq!(meal.time, NaiveTime::from_hms_opt(12, 30, 0).unwrap());
        assert!(meal.is_healthy);
    }

    #[test]
    fn test_missing_healthy_flag_is_rejected() {
        let json = r#"{"id": "meal-1", "name": "Salad", "time": "12:30:00"}"#;
        let parsed: Result<MealRecord, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_into_record_trims_fields() {
        let new = NewMeal {
            name: "  Pasta ".to_string(),
            description: " with pesto  ".to_string(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            is_healthy: false,
        };

        let record = new.into_record("meal-7".to_string());
        assert_eq!(record.name, "Pasta");
        assert_eq!(record.description, "with pesto");
        assert_eq!(record.id, "meal-7");
    }
}
