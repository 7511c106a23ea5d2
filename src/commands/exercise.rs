use clap::{Args, Subcommand};

use super::{date_or_today, print_json, OutputFormat};
use wellmart_core::models::{Exercise, ExerciseType};
use wellmart_core::summary::exercise_on;
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct ExerciseCommand {
    #[command(subcommand)]
    pub command: ExerciseSubcommand,
}

#[derive(Subcommand)]
pub enum ExerciseSubcommand {
    /// Log a workout
    Add {
        /// What you did, e.g. "Morning run"
        name: String,

        /// Exercise type (cardio, strength, flexibility, balance)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        exercise_type: ExerciseType,

        /// Duration in minutes
        #[arg(long, short = 'm')]
        minutes: u32,

        /// Calories burned
        #[arg(long, short = 'k')]
        calories: u32,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show a day's workouts
    List {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ExerciseCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ExerciseSubcommand::Add {
                name,
                exercise_type,
                minutes,
                calories,
                date,
            } => {
                let date = date_or_today(date)?;
                let exercise = Exercise::new(name, *exercise_type, *minutes, *calories, date);
                println!("Logged {}", exercise);
                store.add_exercise(exercise)?;
                Ok(())
            }
            ExerciseSubcommand::List { date, format } => {
                let date = date_or_today(date)?;
                let day: Vec<&Exercise> =
                    store.exercises().iter().filter(|e| e.date == date).collect();

                match format {
                    OutputFormat::Json => print_json(&day)?,
                    OutputFormat::Text => {
                        if day.is_empty() {
                            println!("No workouts on {}", date);
                            return Ok(());
                        }
                        for exercise in &day {
                            println!("{}", exercise);
                        }
                        let totals = exercise_on(store.exercises(), date);
                        println!(
                            "\nTotal: {} session(s), {} min, {} kcal",
                            totals.sessions, totals.minutes, totals.calories
                        );
                    }
                }
                Ok(())
            }
        }
    }
}
