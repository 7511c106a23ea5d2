use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{invalid_choice, new_id};

/// Clinical condition under which a glucose reading was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealContext {
    Fasting,
    BeforeMeal,
    AfterMeal,
    Random,
}

impl MealContext {
    pub const ALL: [MealContext; 4] = [
        MealContext::Fasting,
        MealContext::BeforeMeal,
        MealContext::AfterMeal,
        MealContext::Random,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealContext::Fasting => "fasting",
            MealContext::BeforeMeal => "before_meal",
            MealContext::AfterMeal => "after_meal",
            MealContext::Random => "random",
        }
    }

    /// Human-readable form, e.g. "before meal".
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for MealContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| invalid_choice("meal context", s, &Self::ALL.map(|c| c.as_str())))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodSugarReading {
    pub id: String,
    pub date: NaiveDate,
    /// Time of day as entered, e.g. "07:45:00"
    pub time: String,
    /// mg/dL
    pub value: u32,
    pub meal_context: MealContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BloodSugarReading {
    pub fn new(
        date: NaiveDate,
        time: impl Into<String>,
        value: u32,
        meal_context: MealContext,
    ) -> Self {
        Self {
            id: new_id(),
            date,
            time: time.into(),
            value,
            meal_context,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl fmt::Display for BloodSugarReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}  {:>3} mg/dL  ({})",
            self.date,
            self.time,
            self.value,
            self.meal_context.label()
        )?;
        if let Some(notes) = &self.notes {
            write!(f, "  {}", notes)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_context_wire_names() {
        assert_eq!(
            serde_json::to_string(&MealContext::BeforeMeal).unwrap(),
            "\"before_meal\""
        );
        let parsed: MealContext = serde_json::from_str("\"after_meal\"").unwrap();
        assert_eq!(parsed, MealContext::AfterMeal);
    }

    #[test]
    fn test_meal_context_from_str_accepts_separators() {
        assert_eq!(MealContext::from_str("after-meal").unwrap(), MealContext::AfterMeal);
        assert_eq!(MealContext::from_str("Before Meal").unwrap(), MealContext::BeforeMeal);
        assert!(MealContext::from_str("bedtime").is_err());
    }

    #[test]
    fn test_reading_display_includes_notes() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
        let reading = BloodSugarReading::new(date, "07:30:00", 92, MealContext::Fasting)
            .with_notes("after walk");
        let out = reading.to_string();
        assert!(out.contains("92 mg/dL"));
        assert!(out.contains("(fasting)"));
        assert!(out.ends_with("after walk"));
    }
}
