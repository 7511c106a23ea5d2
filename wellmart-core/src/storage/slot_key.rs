use std::fmt;

/// The named slots the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKey {
    UserProfile,
    CalorieEntries,
    StepData,
    BloodSugarReadings,
    Exercises,
    Appointments,
    Goals,
    LastBmi,
    Cart,
}

impl SlotKey {
    pub const ALL: [SlotKey; 9] = [
        SlotKey::UserProfile,
        SlotKey::CalorieEntries,
        SlotKey::StepData,
        SlotKey::BloodSugarReadings,
        SlotKey::Exercises,
        SlotKey::Appointments,
        SlotKey::Goals,
        SlotKey::LastBmi,
        SlotKey::Cart,
    ];

    /// The slot name as stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKey::UserProfile => "userProfile",
            SlotKey::CalorieEntries => "calorieEntries",
            SlotKey::StepData => "stepData",
            SlotKey::BloodSugarReadings => "bloodSugarReadings",
            SlotKey::Exercises => "exercises",
            SlotKey::Appointments => "appointments",
            SlotKey::Goals => "goals",
            SlotKey::LastBmi => "lastBMI",
            SlotKey::Cart => "cart",
        }
    }

    pub fn filename(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
