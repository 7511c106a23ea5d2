use clap::{Args, Subcommand};

use super::{date_or_today, print_json, OutputFormat};
use wellmart_core::metrics::goal_progress;
use wellmart_core::models::StepData;
use wellmart_core::summary::{step_goal, steps_on, steps_remaining, weekly_series};
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct StepsCommand {
    #[command(subcommand)]
    pub command: StepsSubcommand,
}

#[derive(Subcommand)]
pub enum StepsSubcommand {
    /// Record the step count for a day, replacing any earlier count
    Log {
        steps: u32,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show a day's steps against the goal
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the seven days ending on a date
    Week {
        /// Last day (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl StepsCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            StepsSubcommand::Log { steps, date } => {
                let date = date_or_today(date)?;
                let weight = store.user_profile().map(|p| p.weight);
                let data = StepData::from_steps(date, *steps, weight);
                println!("Logged {}", data);
                store.add_step_data(data)?;
                Ok(())
            }
            StepsSubcommand::Show { date, format } => {
                let date = date_or_today(date)?;
                let goal = step_goal(store.user_profile());
                let Some(data) = steps_on(store.step_data(), date) else {
                    println!("No steps recorded for {} (goal {})", date, goal);
                    return Ok(());
                };
                match format {
                    OutputFormat::Json => print_json(data)?,
                    OutputFormat::Text => {
                        println!("{}", data);
                        println!(
                            "Goal: {} steps ({}% reached, {} remaining)",
                            goal,
                            goal_progress(data.steps, goal),
                            steps_remaining(data.steps, goal)
                        );
                    }
                }
                Ok(())
            }
            StepsSubcommand::Week { date, format } => {
                let end = date_or_today(date)?;
                let series = weekly_series(store, end);
                match format {
                    OutputFormat::Json => print_json(&series)?,
                    OutputFormat::Text => {
                        let goal = step_goal(store.user_profile());
                        for day in &series {
                            let pct = goal_progress(day.steps, goal).min(100) as usize;
                            println!(
                                "{} {} {:>6}  {}",
                                day.date,
                                day.date.format("%a"),
                                day.steps,
                                "#".repeat(pct / 5)
                            );
                        }
                        let total: u64 = series.iter().map(|d| u64::from(d.steps)).sum();
                        println!("\nTotal: {} steps", total);
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellmart_core::models::{Gender, UserProfile};
    use wellmart_core::MemorySlotStore;

    fn log(steps: u32) -> StepsCommand {
        StepsCommand {
            command: StepsSubcommand::Log {
                steps,
                date: Some("2025-04-02".to_string()),
            },
        }
    }

    #[test]
    fn test_log_uses_profile_weight() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        store
            .set_user_profile(UserProfile::new("Kai", 30, 90.0, 185.0, Gender::Male))
            .unwrap();

        log(10_000).run(&mut store).unwrap();

        let data = &store.step_data()[0];
        assert_eq!(data.calories_burned, 514);
        assert!((data.distance - 7.62).abs() < 1e-9);
    }

    #[test]
    fn test_relogging_a_day_replaces_count() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);

        log(3_000).run(&mut store).unwrap();
        log(7_500).run(&mut store).unwrap();

        assert_eq!(store.step_data().len(), 1);
        assert_eq!(store.step_data()[0].steps, 7_500);
    }
}
