mod appointment;
mod blood_sugar;
mod calorie_entry;
mod exercise;
mod goal;
mod product;
mod profile;
mod step_data;

pub use appointment::{AppointmentStatus, DoctorAppointment, DOCTOR_SPECIALTIES};
pub use blood_sugar::{BloodSugarReading, MealContext};
pub use calorie_entry::{CalorieEntry, MealType};
pub use exercise::{Exercise, ExerciseType};
pub use goal::{Goal, GoalCategory};
pub use product::{CartItem, Product};
pub use profile::{DiabetesType, Gender, UserProfile, DEFAULT_CALORIE_GOAL, DEFAULT_STEP_GOAL};
pub use step_data::StepData;

/// Generates an opaque record id.
///
/// Ids are stored as strings so slots written with other id schemes
/// (e.g. millisecond timestamps) still hydrate.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Builds the error message for an unrecognised enum value.
fn invalid_choice(kind: &str, value: &str, valid: &[&str]) -> String {
    format!(
        "Invalid {} '{}'. Valid options: {}",
        kind,
        value,
        valid.join(", ")
    )
}
