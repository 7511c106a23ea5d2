use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{invalid_choice, new_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Weight,
    Fitness,
    Nutrition,
    Health,
}

impl GoalCategory {
    /// Display order used by the coach overview.
    pub const ALL: [GoalCategory; 4] = [
        GoalCategory::Fitness,
        GoalCategory::Nutrition,
        GoalCategory::Weight,
        GoalCategory::Health,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Weight => "weight",
            GoalCategory::Fitness => "fitness",
            GoalCategory::Nutrition => "nutrition",
            GoalCategory::Health => "health",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| invalid_choice("goal category", s, &Self::ALL.map(|c| c.as_str())))
    }
}

/// A coaching goal. `progress` is a percentage; the store does not clamp it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_date: NaiveDate,
    pub progress: u8,
    pub category: GoalCategory,
}

impl Goal {
    /// Creates a goal with zero progress.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        target_date: NaiveDate,
        category: GoalCategory,
    ) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            description: description.into(),
            target_date,
            progress: 0,
            category,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = usize::from(self.progress.min(100)) / 10;
        write!(
            f,
            "{} [{}] due {}\n    [{}{}] {}%",
            self.title,
            self.category,
            self.target_date,
            "#".repeat(filled),
            "-".repeat(10 - filled),
            self.progress
        )?;
        if !self.description.is_empty() {
            write!(f, "\n    {}", self.description)?;
        }
        Ok(())
    }
}
