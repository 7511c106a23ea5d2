//! Wellmart Core Library
//!
//! Wellness metrics, persisted client state and storefront logic shared by
//! wellmart front ends.

pub mod catalog;
pub mod metrics;
pub mod models;
pub mod quotes;
pub mod storage;
pub mod store;
pub mod summary;

pub use catalog::{CatalogClient, CatalogError, DEFAULT_CATALOG_URL};
pub use metrics::{
    bmi_advice, calories_from_steps, classify_blood_sugar, compute_bmi, distance_from_steps,
    goal_progress, BmiCategory, BmiReading, SugarAnalysis, SugarStatus,
};
pub use models::{
    AppointmentStatus, BloodSugarReading, CalorieEntry, CartItem, DiabetesType,
    DoctorAppointment, Exercise, ExerciseType, Gender, Goal, GoalCategory, MealContext, MealType,
    Product, StepData, UserProfile,
};
pub use quotes::{random_quote, MOTIVATIONAL_QUOTES};
pub use storage::{FileSlotStore, MemorySlotStore, SlotKey, SlotStore, StorageError};
pub use store::{CartStore, WellnessStore};
pub use summary::DashboardSummary;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
