use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{invalid_choice, new_id};

/// Specialties offered when booking an appointment.
pub const DOCTOR_SPECIALTIES: [&str; 6] = [
    "Endocrinologist",
    "General Physician",
    "Nutritionist",
    "Diabetes Educator",
    "Cardiologist",
    "Ophthalmologist",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "scheduled",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == lower)
            .ok_or_else(|| invalid_choice("status", s, &Self::ALL.map(|st| st.as_str())))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorAppointment {
    pub id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date: NaiveDate,
    /// Time of day as entered, e.g. "14:30"
    pub time: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DoctorAppointment {
    /// Creates a newly booked appointment.
    pub fn scheduled(
        doctor_name: impl Into<String>,
        specialty: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: new_id(),
            doctor_name: doctor_name.into(),
            specialty: specialty.into(),
            date,
            time: time.into(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl fmt::Display for DoctorAppointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}  {} ({}) [{}]",
            self.date, self.time, self.doctor_name, self.specialty, self.status
        )?;
        if let Some(notes) = &self.notes {
            write!(f, "\n    {}", notes)?;
        }
        Ok(())
    }
}
