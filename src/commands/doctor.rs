use clap::{Args, Subcommand};

use super::{parse_date, print_json, OutputFormat};
use wellmart_core::models::{AppointmentStatus, DoctorAppointment, DOCTOR_SPECIALTIES};
use wellmart_core::summary::appointments_with_status;
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct DoctorCommand {
    #[command(subcommand)]
    pub command: DoctorSubcommand,
}

#[derive(Subcommand)]
pub enum DoctorSubcommand {
    /// Book an appointment
    Book {
        /// Doctor's name
        doctor: String,

        /// Specialty (see `wellmart doctor specialties`)
        #[arg(long, short)]
        specialty: String,

        /// Date (YYYY-MM-DD)
        #[arg(long, short)]
        date: String,

        /// Time of day, e.g. 14:30
        #[arg(long, short)]
        time: String,

        #[arg(long)]
        notes: Option<String>,
    },

    /// List appointments
    List {
        /// Include completed and cancelled appointments
        #[arg(long, short)]
        all: bool,

        /// Only appointments with this status (scheduled, completed, cancelled)
        #[arg(long, short, conflicts_with = "all")]
        status: Option<AppointmentStatus>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List bookable specialties
    Specialties,
}

/// Matches a specialty case-insensitively and returns its canonical name.
fn resolve_specialty(input: &str) -> Result<&'static str, String> {
    DOCTOR_SPECIALTIES
        .iter()
        .find(|s| s.eq_ignore_ascii_case(input.trim()))
        .copied()
        .ok_or_else(|| {
            format!(
                "Unknown specialty '{}'. Valid options: {}",
                input,
                DOCTOR_SPECIALTIES.join(", ")
            )
        })
}

fn print_section(title: &str, appointments: &[&DoctorAppointment]) {
    println!("{}", title);
    println!("{}", "-".repeat(60));
    if appointments.is_empty() {
        println!("  None");
    }
    for appointment in appointments {
        println!("  {}", appointment);
    }
}

impl DoctorCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            DoctorSubcommand::Book {
                doctor,
                specialty,
                date,
                time,
                notes,
            } => {
                let specialty = resolve_specialty(specialty)?;
                let date = parse_date(date)?;
                let mut appointment = DoctorAppointment::scheduled(doctor, specialty, date, time);
                if let Some(n) = notes {
                    appointment = appointment.with_notes(n);
                }
                println!("Booked {}", appointment);
                store.add_appointment(appointment)?;
                Ok(())
            }
            DoctorSubcommand::List {
                status: Some(status),
                format,
                ..
            } => {
                let matching = appointments_with_status(store.appointments(), *status);
                match format {
                    OutputFormat::Json => print_json(&matching)?,
                    OutputFormat::Text => {
                        let title = match status {
                            AppointmentStatus::Scheduled => "Upcoming",
                            AppointmentStatus::Completed => "Past",
                            AppointmentStatus::Cancelled => "Cancelled",
                        };
                        print_section(title, &matching);
                    }
                }
                Ok(())
            }
            DoctorSubcommand::List { all, format, .. } => {
                let upcoming =
                    appointments_with_status(store.appointments(), AppointmentStatus::Scheduled);
                let past =
                    appointments_with_status(store.appointments(), AppointmentStatus::Completed);

                match format {
                    OutputFormat::Json => {
                        if *all {
                            print_json(store.appointments())?;
                        } else {
                            print_json(&upcoming)?;
                        }
                    }
                    OutputFormat::Text => {
                        print_section("Upcoming", &upcoming);
                        if *all {
                            println!();
                            print_section("Past", &past);
                        }
                    }
                }
                Ok(())
            }
            DoctorSubcommand::Specialties => {
                for specialty in DOCTOR_SPECIALTIES {
                    println!("{}", specialty);
                }
                Ok(())
            }
        }
    }
}
