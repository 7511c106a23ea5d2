use crate::metrics::BmiReading;
use crate::models::{
    BloodSugarReading, CalorieEntry, DoctorAppointment, Exercise, Goal, StepData, UserProfile,
};
use crate::storage::{SlotKey, SlotStore, StorageError};

use super::{load_slot, save_slot};

/// In-memory mirror of the wellness collections, written through to slots.
///
/// Constructed once per session with [`WellnessStore::hydrate`] and handed
/// to whatever drives it. There is exactly one writer; if two sessions
/// write the same slot, the last write wins.
///
/// When a slot write fails the in-memory collection has already been
/// replaced; the error is returned so the caller can report it.
#[derive(Debug)]
pub struct WellnessStore<S: SlotStore> {
    slots: S,
    user_profile: Option<UserProfile>,
    calorie_entries: Vec<CalorieEntry>,
    step_data: Vec<StepData>,
    blood_sugar_readings: Vec<BloodSugarReading>,
    exercises: Vec<Exercise>,
    appointments: Vec<DoctorAppointment>,
    goals: Vec<Goal>,
    last_bmi: Option<BmiReading>,
}

impl<S: SlotStore> WellnessStore<S> {
    /// Loads every collection from its slot, falling back to empty
    /// collections (or no profile) for missing or malformed slots.
    pub fn hydrate(slots: S) -> Self {
        let store = Self {
            user_profile: load_slot(&slots, SlotKey::UserProfile),
            calorie_entries: load_slot(&slots, SlotKey::CalorieEntries).unwrap_or_default(),
            step_data: load_slot(&slots, SlotKey::StepData).unwrap_or_default(),
            blood_sugar_readings: load_slot(&slots, SlotKey::BloodSugarReadings)
                .unwrap_or_default(),
            exercises: load_slot(&slots, SlotKey::Exercises).unwrap_or_default(),
            appointments: load_slot(&slots, SlotKey::Appointments).unwrap_or_default(),
            goals: load_slot(&slots, SlotKey::Goals).unwrap_or_default(),
            last_bmi: load_slot(&slots, SlotKey::LastBmi),
            slots,
        };
        tracing::debug!(
            profile = store.user_profile.is_some(),
            calorie_entries = store.calorie_entries.len(),
            step_data = store.step_data.len(),
            readings = store.blood_sugar_readings.len(),
            exercises = store.exercises.len(),
            appointments = store.appointments.len(),
            goals = store.goals.len(),
            "wellness store hydrated"
        );
        store
    }

    // Profile

    pub fn user_profile(&self) -> Option<&UserProfile> {
        self.user_profile.as_ref()
    }

    pub fn set_user_profile(&mut self, profile: UserProfile) -> Result<(), StorageError> {
        let profile = self.user_profile.insert(profile);
        save_slot(&self.slots, SlotKey::UserProfile, &*profile)
    }

    // Calories

    pub fn calorie_entries(&self) -> &[CalorieEntry] {
        &self.calorie_entries
    }

    pub fn add_calorie_entry(&mut self, entry: CalorieEntry) -> Result<(), StorageError> {
        self.calorie_entries.push(entry);
        save_slot(&self.slots, SlotKey::CalorieEntries, &self.calorie_entries)
    }

    /// Removes the entry with `id`. Returns whether one was found.
    ///
    /// The slot is rewritten either way.
    pub fn remove_calorie_entry(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.calorie_entries.len();
        self.calorie_entries.retain(|e| e.id != id);
        let removed = self.calorie_entries.len() != before;
        save_slot(&self.slots, SlotKey::CalorieEntries, &self.calorie_entries)?;
        Ok(removed)
    }

    // Steps

    pub fn step_data(&self) -> &[StepData] {
        &self.step_data
    }

    /// Records the step count for a day.
    ///
    /// A day has at most one record: an existing record for the same date is
    /// replaced in place, otherwise the record is appended.
    pub fn add_step_data(&mut self, data: StepData) -> Result<(), StorageError> {
        match self.step_data.iter_mut().find(|s| s.date == data.date) {
            Some(existing) => *existing = data,
            None => self.step_data.push(data),
        }
        save_slot(&self.slots, SlotKey::StepData, &self.step_data)
    }

    // Blood sugar

    /// Readings in insertion order, which is chronological in normal use.
    pub fn blood_sugar_readings(&self) -> &[BloodSugarReading] {
        &self.blood_sugar_readings
    }

    pub fn add_blood_sugar_reading(&mut self, reading: BloodSugarReading) -> Result<(), StorageError> {
        self.blood_sugar_readings.push(reading);
        save_slot(&self.slots, SlotKey::BloodSugarReadings, &self.blood_sugar_readings)
    }

    // Exercise

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn add_exercise(&mut self, exercise: Exercise) -> Result<(), StorageError> {
        self.exercises.push(exercise);
        save_slot(&self.slots, SlotKey::Exercises, &self.exercises)
    }

    // Appointments

    pub fn appointments(&self) -> &[DoctorAppointment] {
        &self.appointments
    }

    pub fn add_appointment(&mut self, appointment: DoctorAppointment) -> Result<(), StorageError> {
        self.appointments.push(appointment);
        save_slot(&self.slots, SlotKey::Appointments, &self.appointments)
    }

    // Goals

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn add_goal(&mut self, goal: Goal) -> Result<(), StorageError> {
        self.goals.push(goal);
        save_slot(&self.slots, SlotKey::Goals, &self.goals)
    }

    /// Sets a goal's progress. Returns whether a goal with `id` exists.
    ///
    /// The value is stored as given; clamping to 0-100 is the caller's job.
    pub fn update_goal(&mut self, id: &str, progress: u8) -> Result<bool, StorageError> {
        let mut found = false;
        for goal in self.goals.iter_mut().filter(|g| g.id == id) {
            goal.progress = progress;
            found = true;
        }
        save_slot(&self.slots, SlotKey::Goals, &self.goals)?;
        Ok(found)
    }

    // BMI

    pub fn last_bmi(&self) -> Option<&BmiReading> {
        self.last_bmi.as_ref()
    }

    pub fn record_bmi(&mut self, reading: BmiReading) -> Result<(), StorageError> {
        let reading = self.last_bmi.insert(reading);
        save_slot(&self.slots, SlotKey::LastBmi, &*reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_bmi;
    use crate::models::{
        ExerciseType, Gender, GoalCategory, MealContext, MealType,
    };
    use crate::storage::{FileSlotStore, MemorySlotStore};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    #[test]
    fn test_hydrate_empty_slots_uses_defaults() {
        let slots = MemorySlotStore::new();
        let store = WellnessStore::hydrate(&slots);

        assert!(store.user_profile().is_none());
        assert!(store.calorie_entries().is_empty());
        assert!(store.step_data().is_empty());
        assert!(store.blood_sugar_readings().is_empty());
        assert!(store.exercises().is_empty());
        assert!(store.appointments().is_empty());
        assert!(store.goals().is_empty());
        assert!(store.last_bmi().is_none());
    }

    #[test]
    fn test_add_calorie_entry_survives_rehydration() {
        let slots = MemorySlotStore::new();
        let entry = CalorieEntry::new(day(1), MealType::Lunch, "Lentil soup", 320);

        let mut store = WellnessStore::hydrate(&slots);
        store.add_calorie_entry(entry.clone()).unwrap();
        drop(store);

        let fresh = WellnessStore::hydrate(&slots);
        assert_eq!(fresh.calorie_entries(), &[entry]);
    }

    #[test]
    fn test_malformed_slot_is_treated_as_missing() {
        let slots = MemorySlotStore::new()
            .with_slot(SlotKey::CalorieEntries, "{not json")
            .with_slot(SlotKey::UserProfile, "[1, 2, 3]")
            .with_slot(SlotKey::Goals, "null");

        let store = WellnessStore::hydrate(&slots);
        assert!(store.calorie_entries().is_empty());
        assert!(store.user_profile().is_none());
        assert!(store.goals().is_empty());
    }

    #[test]
    fn test_one_bad_slot_does_not_affect_others() {
        let seeded = MemorySlotStore::new();
        {
            let mut store = WellnessStore::hydrate(&seeded);
            store
                .add_exercise(Exercise::new("Swim", ExerciseType::Cardio, 40, 350, day(2)))
                .unwrap();
        }
        seeded.set(SlotKey::Goals, "garbage").unwrap();

        let store = WellnessStore::hydrate(&seeded);
        assert_eq!(store.exercises().len(), 1);
        assert!(store.goals().is_empty());
    }

    #[test]
    fn test_remove_calorie_entry() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        let keep = CalorieEntry::new(day(1), MealType::Breakfast, "Eggs", 200);
        let drop_me = CalorieEntry::new(day(1), MealType::Snack, "Chips", 300);
        store.add_calorie_entry(keep.clone()).unwrap();
        store.add_calorie_entry(drop_me.clone()).unwrap();

        assert!(store.remove_calorie_entry(&drop_me.id).unwrap());
        assert!(!store.remove_calorie_entry("no-such-id").unwrap());

        let fresh = WellnessStore::hydrate(&slots);
        assert_eq!(fresh.calorie_entries(), &[keep]);
    }

    #[test]
    fn test_step_data_upserts_by_date() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);

        store.add_step_data(StepData::from_steps(day(1), 4_000, None)).unwrap();
        store.add_step_data(StepData::from_steps(day(2), 6_000, None)).unwrap();
        store.add_step_data(StepData::from_steps(day(1), 9_000, None)).unwrap();

        let steps: Vec<(NaiveDate, u32)> =
            store.step_data().iter().map(|s| (s.date, s.steps)).collect();
        assert_eq!(steps, vec![(day(1), 9_000), (day(2), 6_000)]);

        let fresh = WellnessStore::hydrate(&slots);
        assert_eq!(fresh.step_data().len(), 2);
        assert_eq!(fresh.step_data()[0].calories_burned, 360);
    }

    #[test]
    fn test_readings_keep_insertion_order() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        for (value, time) in [(110, "07:00:00"), (150, "13:00:00"), (98, "22:00:00")] {
            store
                .add_blood_sugar_reading(BloodSugarReading::new(
                    day(3),
                    time,
                    value,
                    MealContext::Random,
                ))
                .unwrap();
        }

        let fresh = WellnessStore::hydrate(&slots);
        let values: Vec<u32> = fresh.blood_sugar_readings().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![110, 150, 98]);
    }

    #[test]
    fn test_update_goal_progress() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        let goal = Goal::new("Lose 3kg", "", day(30), GoalCategory::Weight);
        let id = goal.id.clone();
        store.add_goal(goal).unwrap();

        assert!(store.update_goal(&id, 60).unwrap());
        assert!(!store.update_goal("missing", 10).unwrap());

        let fresh = WellnessStore::hydrate(&slots);
        assert_eq!(fresh.goals()[0].progress, 60);
    }

    #[test]
    fn test_set_user_profile_replaces_singleton() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        store
            .set_user_profile(UserProfile::new("Kim", 30, 60.0, 165.0, Gender::Female))
            .unwrap();
        store
            .set_user_profile(UserProfile::new("Kim", 31, 61.0, 165.0, Gender::Female))
            .unwrap();

        let fresh = WellnessStore::hydrate(&slots);
        let profile = fresh.user_profile().unwrap();
        assert_eq!(profile.age, 31);
    }

    #[test]
    fn test_record_bmi() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        let bmi = compute_bmi(70.0, 170.0);
        store.record_bmi(bmi.clone()).unwrap();

        let fresh = WellnessStore::hydrate(&slots);
        assert_eq!(fresh.last_bmi(), Some(&bmi));
    }

    #[test]
    fn test_appointments_written_to_slot() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        store
            .add_appointment(DoctorAppointment::scheduled(
                "Dr. Lee",
                "Cardiologist",
                day(12),
                "10:00",
            ))
            .unwrap();

        let raw = slots.get(SlotKey::Appointments).unwrap().unwrap();
        assert!(raw.contains("\"doctorName\":\"Dr. Lee\""));
    }

    #[test]
    fn test_file_backed_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let entry = CalorieEntry::new(day(4), MealType::Dinner, "Curry", 640);
        {
            let mut store = WellnessStore::hydrate(FileSlotStore::new(temp_dir.path()));
            store.add_calorie_entry(entry.clone()).unwrap();
        }

        let store = WellnessStore::hydrate(FileSlotStore::new(temp_dir.path()));
        assert_eq!(store.calorie_entries(), &[entry]);
        assert!(temp_dir.path().join("calorieEntries.json").exists());
    }
}
