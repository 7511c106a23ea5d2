use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics::{calories_from_steps, distance_from_steps, DEFAULT_WEIGHT_KG};

/// Daily step count. The date is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepData {
    pub date: NaiveDate,
    pub steps: u32,
    /// Kilometres, derived from `steps`
    pub distance: f64,
    /// Derived from `steps` and body weight
    pub calories_burned: u32,
}

impl StepData {
    /// Builds a record with distance and calories derived from the step count.
    ///
    /// Falls back to the reference body weight when none is known.
    pub fn from_steps(date: NaiveDate, steps: u32, weight_kg: Option<f64>) -> Self {
        Self {
            date,
            steps,
            distance: distance_from_steps(steps),
            calories_burned: calories_from_steps(steps, weight_kg.unwrap_or(DEFAULT_WEIGHT_KG)),
        }
    }
}

impl fmt::Display for StepData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {:>6} steps  {:>5.2} km  {:>4} kcal",
            self.date, self.steps, self.distance, self.calories_burned
        )
    }
}
