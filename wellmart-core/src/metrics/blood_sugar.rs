use serde::Serialize;
use std::fmt;

use crate::models::{BloodSugarReading, MealContext};

/// Inclusive mg/dL range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GlucoseRange {
    pub min: u32,
    pub max: u32,
}

impl GlucoseRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Thresholds for one meal context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SugarRanges {
    pub normal: GlucoseRange,
    pub prediabetes: GlucoseRange,
    pub diabetes: GlucoseRange,
}

/// Per-context thresholds. Contexts without an entry use `Random`.
pub static BLOOD_SUGAR_RANGES: [(MealContext, SugarRanges); 3] = [
    (
        MealContext::Fasting,
        SugarRanges {
            normal: GlucoseRange::new(70, 100),
            prediabetes: GlucoseRange::new(100, 125),
            diabetes: GlucoseRange::new(126, 400),
        },
    ),
    (
        MealContext::AfterMeal,
        SugarRanges {
            normal: GlucoseRange::new(70, 140),
            prediabetes: GlucoseRange::new(140, 199),
            diabetes: GlucoseRange::new(200, 400),
        },
    ),
    (
        MealContext::Random,
        SugarRanges {
            normal: GlucoseRange::new(70, 140),
            prediabetes: GlucoseRange::new(140, 199),
            diabetes: GlucoseRange::new(200, 400),
        },
    ),
];

/// Looks up the thresholds for a meal context.
pub fn ranges_for(context: MealContext) -> &'static SugarRanges {
    let random = &BLOOD_SUGAR_RANGES[2].1;
    BLOOD_SUGAR_RANGES
        .iter()
        .find(|(ctx, _)| *ctx == context)
        .map(|(_, ranges)| ranges)
        .unwrap_or(random)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SugarStatus {
    Normal,
    Prediabetes,
    Diabetes,
}

impl SugarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SugarStatus::Normal => "normal",
            SugarStatus::Prediabetes => "prediabetes",
            SugarStatus::Diabetes => "diabetes",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SugarStatus::Normal => "#00ffd5",
            SugarStatus::Prediabetes => "#a855f7",
            SugarStatus::Diabetes => "#ff4444",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SugarStatus::Normal => "Your blood sugar is in the normal range.",
            SugarStatus::Prediabetes => {
                "Your blood sugar indicates prediabetes. Consult your doctor."
            }
            SugarStatus::Diabetes => {
                "Your blood sugar is high. Please consult your healthcare provider immediately."
            }
        }
    }
}

impl fmt::Display for SugarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SugarAnalysis {
    pub status: SugarStatus,
    pub color: &'static str,
    pub message: &'static str,
}

impl From<SugarStatus> for SugarAnalysis {
    fn from(status: SugarStatus) -> Self {
        Self {
            status,
            color: status.color(),
            message: status.message(),
        }
    }
}

/// Classifies a reading against its meal-context thresholds.
///
/// The normal range is checked first, then prediabetes; every other value,
/// including readings under the normal floor, reports diabetes.
pub fn classify_blood_sugar(reading: &BloodSugarReading) -> SugarAnalysis {
    let ranges = ranges_for(reading.meal_context);
    let status = if ranges.normal.contains(reading.value) {
        SugarStatus::Normal
    } else if ranges.prediabetes.contains(reading.value) {
        SugarStatus::Prediabetes
    } else {
        SugarStatus::Diabetes
    };
    status.into()
}
