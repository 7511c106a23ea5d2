use chrono::Utc;
use clap::{Args, Subcommand};
use serde::Serialize;

use super::{date_or_today, print_json, OutputFormat};
use wellmart_core::metrics::{classify_blood_sugar, ranges_for, SugarAnalysis};
use wellmart_core::models::{BloodSugarReading, MealContext};
use wellmart_core::summary::{recent_readings, sugar_stats, SugarStats, SUGAR_AVERAGE_WINDOW};
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct SugarCommand {
    #[command(subcommand)]
    pub command: SugarSubcommand,
}

#[derive(Subcommand)]
pub enum SugarSubcommand {
    /// Record a blood glucose reading
    Log {
        /// Glucose in mg/dL
        value: u32,

        /// When it was taken (fasting, before_meal, after_meal, random)
        #[arg(long, short = 'x', default_value = "fasting")]
        context: MealContext,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Time of day (HH:MM:SS), defaults to now
        #[arg(long, short)]
        time: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Classify a value without saving it
    Check {
        /// Glucose in mg/dL
        value: u32,

        #[arg(long, short = 'x', default_value = "fasting")]
        context: MealContext,
    },

    /// Show recent readings, oldest first
    History {
        /// Number of readings to show
        #[arg(long, short = 'n', default_value_t = 10)]
        limit: usize,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct ClassifiedReading<'a> {
    #[serde(flatten)]
    reading: &'a BloodSugarReading,
    analysis: SugarAnalysis,
}

#[derive(Serialize)]
struct SugarHistory<'a> {
    stats: SugarStats,
    readings: Vec<ClassifiedReading<'a>>,
}

impl SugarCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            SugarSubcommand::Log {
                value,
                context,
                date,
                time,
                notes,
            } => {
                let date = date_or_today(date)?;
                let time = time
                    .clone()
                    .unwrap_or_else(|| Utc::now().format("%H:%M:%S").to_string());
                let mut reading = BloodSugarReading::new(date, time, *value, *context);
                if let Some(n) = notes {
                    reading = reading.with_notes(n);
                }

                let analysis = classify_blood_sugar(&reading);
                println!("Logged {}", reading);
                println!("{}: {}", analysis.status, analysis.message);
                store.add_blood_sugar_reading(reading)?;
                Ok(())
            }
            SugarSubcommand::Check { value, context } => {
                let reading = BloodSugarReading::new(Utc::now().date_naive(), "", *value, *context);
                let analysis = classify_blood_sugar(&reading);
                let ranges = ranges_for(*context);
                println!("{} mg/dL ({}): {}", value, context.label(), analysis.status);
                println!("{}", analysis.message);
                println!(
                    "Normal {}-{}, prediabetes {}-{}, diabetes {}-{}",
                    ranges.normal.min,
                    ranges.normal.max,
                    ranges.prediabetes.min,
                    ranges.prediabetes.max,
                    ranges.diabetes.min,
                    ranges.diabetes.max
                );
                Ok(())
            }
            SugarSubcommand::History { limit, format } => {
                let readings = recent_readings(store.blood_sugar_readings(), *limit);
                if readings.is_empty() {
                    println!("No blood sugar readings yet");
                    return Ok(());
                }
                let classified: Vec<ClassifiedReading<'_>> = readings
                    .iter()
                    .map(|reading| ClassifiedReading {
                        reading,
                        analysis: classify_blood_sugar(reading),
                    })
                    .collect();

                let stats = sugar_stats(store.blood_sugar_readings());

                match format {
                    OutputFormat::Json => print_json(&SugarHistory {
                        stats,
                        readings: classified,
                    })?,
                    OutputFormat::Text => {
                        for item in &classified {
                            println!("{}  {}", item.reading, item.analysis.status);
                        }
                        println!("{}", "-".repeat(60));
                        println!(
                            "Average (last {}): {} mg/dL, {} readings, {}% in range",
                            SUGAR_AVERAGE_WINDOW, stats.average_7, stats.total, stats.in_range_pct
                        );
                    }
                }
                Ok(())
            }
        }
    }
}
