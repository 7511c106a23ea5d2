use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{invalid_choice, new_id};

/// Calorie goal assumed when no profile is configured.
pub const DEFAULT_CALORIE_GOAL: u32 = 2000;
/// Step goal assumed when no profile is configured.
pub const DEFAULT_STEP_GOAL: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == lower)
            .ok_or_else(|| invalid_choice("gender", s, &Self::ALL.map(|g| g.as_str())))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiabetesType {
    None,
    Type1,
    Type2,
    Prediabetes,
}

impl DiabetesType {
    pub const ALL: [DiabetesType; 4] = [
        DiabetesType::None,
        DiabetesType::Type1,
        DiabetesType::Type2,
        DiabetesType::Prediabetes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiabetesType::None => "none",
            DiabetesType::Type1 => "type1",
            DiabetesType::Type2 => "type2",
            DiabetesType::Prediabetes => "prediabetes",
        }
    }
}

impl fmt::Display for DiabetesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiabetesType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| invalid_choice("diabetes type", s, &Self::ALL.map(|d| d.as_str())))
    }
}

/// The single user profile. Absence of a profile means "not yet configured".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimetres
    pub height: f64,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diabetes_type: Option<DiabetesType>,
    pub calorie_goal: u32,
    pub step_goal: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, age: u32, weight: f64, height: f64, gender: Gender) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            age,
            weight,
            height,
            gender,
            diabetes_type: None,
            calorie_goal: DEFAULT_CALORIE_GOAL,
            step_goal: DEFAULT_STEP_GOAL,
            avatar: None,
        }
    }

    pub fn with_diabetes_type(mut self, diabetes_type: DiabetesType) -> Self {
        self.diabetes_type = Some(diabetes_type);
        self
    }

    pub fn with_goals(mut self, calorie_goal: u32, step_goal: u32) -> Self {
        self.calorie_goal = calorie_goal;
        self.step_goal = step_goal;
        self
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", "=".repeat(self.name.len().max(10)))?;
        writeln!(f, "Age:          {}", self.age)?;
        writeln!(f, "Gender:       {}", self.gender)?;
        writeln!(f, "Weight:       {} kg", self.weight)?;
        writeln!(f, "Height:       {} cm", self.height)?;
        if let Some(diabetes) = &self.diabetes_type {
            writeln!(f, "Diabetes:     {}", diabetes)?;
        }
        writeln!(f, "Calorie goal: {} kcal", self.calorie_goal)?;
        write!(f, "Step goal:    {} steps", self.step_goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_new_uses_default_goals() {
        let profile = UserProfile::new("Ada", 34, 62.5, 168.0, Gender::Female);
        assert_eq!(profile.calorie_goal, DEFAULT_CALORIE_GOAL);
        assert_eq!(profile.step_goal, DEFAULT_STEP_GOAL);
        assert!(profile.diabetes_type.is_none());
        assert!(!profile.id.is_empty());
    }

    #[test]
    fn test_diabetes_type_wire_names() {
        let json = serde_json::to_string(&DiabetesType::Type2).unwrap();
        assert_eq!(json, "\"type2\"");
        assert_eq!(DiabetesType::from_str("Prediabetes").unwrap(), DiabetesType::Prediabetes);
        assert!(DiabetesType::from_str("type3").is_err());
    }

    #[test]
    fn test_profile_reads_original_shape() {
        let json = r#"{
            "id": "1718000000000",
            "name": "Sam",
            "age": 41,
            "weight": 80,
            "height": 180,
            "gender": "other",
            "diabetesType": "type1",
            "calorieGoal": 2200,
            "stepGoal": 8000
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.weight, 80.0);
        assert_eq!(profile.gender, Gender::Other);
        assert_eq!(profile.diabetes_type, Some(DiabetesType::Type1));
        assert_eq!(profile.step_goal, 8000);
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn test_profile_display() {
        let profile = UserProfile::new("Ada", 34, 62.5, 168.0, Gender::Female)
            .with_goals(1800, 12000);
        let out = profile.to_string();
        assert!(out.starts_with("Ada"));
        assert!(out.contains("1800 kcal"));
        assert!(out.contains("12000 steps"));
    }
}
