use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{invalid_choice, new_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Cardio,
    Strength,
    Flexibility,
    Balance,
}

impl ExerciseType {
    pub const ALL: [ExerciseType; 4] = [
        ExerciseType::Cardio,
        ExerciseType::Strength,
        ExerciseType::Flexibility,
        ExerciseType::Balance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseType::Cardio => "cardio",
            ExerciseType::Strength => "strength",
            ExerciseType::Flexibility => "flexibility",
            ExerciseType::Balance => "balance",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| invalid_choice("exercise type", s, &Self::ALL.map(|t| t.as_str())))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    /// Minutes
    pub duration: u32,
    pub calories_burned: u32,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub date: NaiveDate,
}

impl Exercise {
    pub fn new(
        name: impl Into<String>,
        exercise_type: ExerciseType,
        duration: u32,
        calories_burned: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            duration,
            calories_burned,
            exercise_type,
            date,
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<11} {} - {} min, {} kcal",
            self.date, self.exercise_type, self.name, self.duration, self.calories_burned
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_type_field_is_named_type() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();
        let exercise = Exercise::new("Rowing", ExerciseType::Cardio, 30, 280, date);
        let json = serde_json::to_value(&exercise).unwrap();
        assert_eq!(json["type"], "cardio");
        assert_eq!(json["caloriesBurned"], 280);
        assert!(json.get("exerciseType").is_none());
    }

    #[test]
    fn test_exercise_type_from_str() {
        assert_eq!(ExerciseType::from_str("Strength").unwrap(), ExerciseType::Strength);
        assert!(ExerciseType::from_str("yoga").is_err());
    }
}
