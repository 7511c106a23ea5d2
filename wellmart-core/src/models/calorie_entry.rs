use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{invalid_choice, new_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| {
                invalid_choice(
                    "meal type",
                    s,
                    &Self::ALL.map(|m| m.as_str()),
                )
            })
    }
}

/// A single food item eaten on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieEntry {
    pub id: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub food_name: String,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<u32>,
}

impl CalorieEntry {
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        food_name: impl Into<String>,
        calories: u32,
    ) -> Self {
        Self {
            id: new_id(),
            date,
            meal_type,
            food_name: food_name.into(),
            calories,
            protein: None,
            carbs: None,
            fat: None,
        }
    }

    /// Sets the macronutrients in grams.
    pub fn with_macros(mut self, protein: Option<u32>, carbs: Option<u32>, fat: Option<u32>) -> Self {
        self.protein = protein;
        self.carbs = carbs;
        self.fat = fat;
        self
    }
}

impl fmt::Display for CalorieEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<9} {} ({} kcal)",
            self.date, self.meal_type, self.food_name, self.calories
        )?;
        let macros: Vec<String> = [("P", self.protein), ("C", self.carbs), ("F", self.fat)]
            .iter()
            .filter_map(|(label, grams)| grams.map(|g| format!("{}:{}g", label, g)))
            .collect();
        if !macros.is_empty() {
            write!(f, " [{}]", macros.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_meal_type_from_str_is_case_insensitive() {
        assert_eq!(MealType::from_str("LUNCH").unwrap(), MealType::Lunch);
        assert_eq!(MealType::from_str("Snack").unwrap(), MealType::Snack);
    }

    #[test]
    fn test_meal_type_from_str_invalid_lists_options() {
        let err = MealType::from_str("brunch").unwrap_err();
        assert!(err.contains("brunch"));
        assert!(err.contains("breakfast, lunch, dinner, snack"));
    }

    #[test]
    fn test_entry_serializes_with_camel_case_keys() {
        let entry = CalorieEntry::new(day(), MealType::Breakfast, "Oatmeal", 350)
            .with_macros(Some(12), Some(60), None);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["mealType"], "breakfast");
        assert_eq!(json["foodName"], "Oatmeal");
        assert_eq!(json["date"], "2025-03-14");
        assert_eq!(json["protein"], 12);
        assert!(json.get("fat").is_none());
    }

    #[test]
    fn test_entry_reads_timestamp_style_ids() {
        let json = r#"{"id":"1718000000000","date":"2025-03-14","mealType":"dinner","foodName":"Soup","calories":200}"#;
        let entry: CalorieEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, "1718000000000");
        assert_eq!(entry.meal_type, MealType::Dinner);
        assert!(entry.protein.is_none());
    }

    #[test]
    fn test_entry_display() {
        let entry = CalorieEntry::new(day(), MealType::Lunch, "Salad", 250)
            .with_macros(Some(8), None, Some(14));
        let out = entry.to_string();
        assert!(out.contains("Salad"));
        assert!(out.contains("250 kcal"));
        assert!(out.contains("P:8g F:14g"));
    }
}
