use serde::{Deserialize, Serialize};

/// Diet adherence figures derived from the logged meals.
///
/// `percentage` is NaN when no meals are logged; callers that display it
/// must check [`Stats::has_meals`] first. Two NaN percentages compare equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(with = "nan_as_null")]
    pub percentage: f64,

    /// Longest run of consecutive healthy meals.
    pub better_sequence: usize,

    pub all_meals_count: usize,

    pub healthy_meals: usize,

    pub not_healthy_meals: usize,
}

impl Stats {
    pub fn has_meals(&self) -> bool {
        self.all_meals_count > 0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            percentage: 0.0,
            better_sequence: 0,
            all_meals_count: 0,
            healthy_meals: 0,
            not_healthy_meals: 0,
        }
    }
}

impl PartialEq for Stats {
    fn eq(&self, other: &Self) -> bool {
        let same_percentage = self.percentage == other.percentage
            || (self.percentage.is_nan() && other.percentage.is_nan());

        same_percentage
            && self.better_sequence == other.better_sequence
            && self.all_meals_count == other.all_meals_count
            && self.healthy_meals == other.healthy_meals
            && self.not_healthy_meals == other.not_healthy_meals
    }
}

/// JSON has no NaN: write it as `null` and read `null` back as NaN.
mod nan_as_null {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
