/// Reference body weight the step calorie estimate is calibrated for.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Calories per step at the reference weight.
pub const KCAL_PER_STEP_KG: f64 = 0.04;
/// Average stride length in metres.
pub const STRIDE_LENGTH_M: f64 = 0.762;

/// Estimated calories burned walking `steps`, scaled linearly by body weight.
///
/// NaN weight saturates to 0.
pub fn calories_from_steps(steps: u32, weight_kg: f64) -> u32 {
    let kcal = f64::from(steps) * KCAL_PER_STEP_KG * (weight_kg / DEFAULT_WEIGHT_KG);
    kcal.round() as u32
}

/// Estimated distance in kilometres, rounded to two decimals.
pub fn distance_from_steps(steps: u32) -> f64 {
    let km = f64::from(steps) * STRIDE_LENGTH_M / 1000.0;
    (km * 100.0).round() / 100.0
}

/// Percentage of `goal` reached by `amount`, not capped at 100.
///
/// A zero goal reports 0.
pub fn goal_progress(amount: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 0;
    }
    (f64::from(amount) / f64::from(goal) * 100.0).round() as u32
}
