//! Derived health metrics.
//!
//! Pure functions from raw input (weight, height, step count, glucose
//! reading) to classified output. Nothing here validates its input: a NaN
//! going in comes back out in the result.

mod activity;
mod blood_sugar;
mod bmi;

pub use activity::{
    calories_from_steps, distance_from_steps, goal_progress, DEFAULT_WEIGHT_KG, KCAL_PER_STEP_KG,
    STRIDE_LENGTH_M,
};
pub use blood_sugar::{
    classify_blood_sugar, ranges_for, GlucoseRange, SugarAnalysis, SugarRanges, SugarStatus,
    BLOOD_SUGAR_RANGES,
};
pub use bmi::{bmi_advice, compute_bmi, compute_bmi_at, BmiBand, BmiCategory, BmiReading, BMI_BANDS};
