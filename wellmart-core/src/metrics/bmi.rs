use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classifies a rounded BMI value.
    ///
    /// Branches run in order underweight, overweight, obese; anything that
    /// matches none of them is `Normal`. The overweight band stops at 29.9
    /// while obese starts at 30, so [29.9, 30) lands on `Normal`, as does NaN.
    pub fn classify(value: f64) -> Self {
        let overweight = BMI_BANDS[2];
        if value < BMI_BANDS[0].max {
            BmiCategory::Underweight
        } else if value >= overweight.min && value < overweight.max {
            BmiCategory::Overweight
        } else if value >= BMI_BANDS[3].min {
            BmiCategory::Obese
        } else {
            BmiCategory::Normal
        }
    }

    pub fn band(&self) -> &'static BmiBand {
        match self {
            BmiCategory::Underweight => &BMI_BANDS[0],
            BmiCategory::Normal => &BMI_BANDS[1],
            BmiCategory::Overweight => &BMI_BANDS[2],
            BmiCategory::Obese => &BMI_BANDS[3],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata for one BMI category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiBand {
    pub min: f64,
    pub max: f64,
    pub color: &'static str,
    pub label: &'static str,
}

/// Bands in category order: underweight, normal, overweight, obese.
pub static BMI_BANDS: [BmiBand; 4] = [
    BmiBand {
        min: 0.0,
        max: 18.5,
        color: "#007aff",
        label: "Underweight",
    },
    BmiBand {
        min: 18.5,
        max: 24.9,
        color: "#00ffd5",
        label: "Normal Weight",
    },
    BmiBand {
        min: 25.0,
        max: 29.9,
        color: "#a855f7",
        label: "Overweight",
    },
    BmiBand {
        min: 30.0,
        max: 100.0,
        color: "#ff4444",
        label: "Obese",
    },
];

/// A computed BMI with its classification and when it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub value: f64,
    pub category: BmiCategory,
    pub date: DateTime<Utc>,
}

impl fmt::Display for BmiReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BMI {:.1} ({})",
            self.value,
            self.category.band().label
        )
    }
}

/// Computes BMI from kilograms and centimetres, rounded to one decimal.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> BmiReading {
    compute_bmi_at(weight_kg, height_cm, Utc::now())
}

/// Same as [`compute_bmi`] with an explicit timestamp.
pub fn compute_bmi_at(weight_kg: f64, height_cm: f64, date: DateTime<Utc>) -> BmiReading {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    let value = (raw * 10.0).round() / 10.0;

    BmiReading {
        value,
        category: BmiCategory::classify(value),
        date,
    }
}

pub fn bmi_advice(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => "Consider consulting a nutritionist to develop a healthy weight gain plan with nutrient-rich foods.",
        BmiCategory::Normal => "Great job! Maintain your healthy weight with balanced nutrition and regular physical activity.",
        BmiCategory::Overweight => "Focus on portion control, increase physical activity, and consider consulting a healthcare provider.",
        BmiCategory::Obese => "We recommend consulting with a healthcare provider to develop a comprehensive weight management plan.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_normal() {
        let bmi = compute_bmi(70.0, 170.0);
        assert_eq!(bmi.value, 24.2);
        assert_eq!(bmi.category, BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_underweight() {
        let bmi = compute_bmi(50.0, 170.0);
        assert!(bmi.value < 18.5);
        assert_eq!(bmi.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_bmi_obese() {
        let bmi = compute_bmi(100.0, 170.0);
        assert_eq!(bmi.value, 34.6);
        assert_eq!(bmi.category, BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_overweight() {
        let bmi = compute_bmi(80.0, 170.0);
        assert_eq!(bmi.value, 27.7);
        assert_eq!(bmi.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_classify_band_edges() {
        assert_eq!(BmiCategory::classify(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(29.8), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_classify_gap_below_obese_falls_to_normal() {
        assert_eq!(BmiCategory::classify(29.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(29.95), BmiCategory::Normal);
    }

    #[test]
    fn test_nan_input_propagates() {
        let bmi = compute_bmi(f64::NAN, 170.0);
        assert!(bmi.value.is_nan());
        assert_eq!(bmi.category, BmiCategory::Normal);
    }

    #[test]
    fn test_advice_differs_per_category() {
        assert!(bmi_advice(BmiCategory::Normal).starts_with("Great job!"));
        assert!(bmi_advice(BmiCategory::Obese).contains("healthcare provider"));
        assert_ne!(
            bmi_advice(BmiCategory::Underweight),
            bmi_advice(BmiCategory::Overweight)
        );
    }

    #[test]
    fn test_reading_json_roundtrip_keeps_category() {
        let bmi = compute_bmi(70.0, 170.0);
        let json = serde_json::to_string(&bmi).unwrap();
        assert!(json.contains("\"category\":\"normal\""));
        let parsed: BmiReading = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, bmi);
    }
}
