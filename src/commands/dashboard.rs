use clap::Args;
use serde::Serialize;

use super::{date_or_today, print_json, OutputFormat};
use wellmart_core::quotes::random_quote;
use wellmart_core::summary::{weekly_series, DashboardSummary, DayPoint};
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct DashboardCommand {
    /// Day to summarize (YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    date: Option<String>,

    /// Include the seven-day activity series
    #[arg(long, short)]
    week: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct DashboardView {
    quote: &'static str,
    #[serde(flatten)]
    summary: DashboardSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    week: Option<Vec<DayPoint>>,
}

impl DashboardCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let date = date_or_today(&self.date)?;
        let view = DashboardView {
            quote: random_quote(&mut rand::rng()),
            summary: DashboardSummary::build(store, date),
            week: self.week.then(|| weekly_series(store, date)),
        };

        match self.format {
            OutputFormat::Json => print_json(&view)?,
            OutputFormat::Text => print_dashboard(&view),
        }
        Ok(())
    }
}

fn print_dashboard(view: &DashboardView) {
    let summary = &view.summary;
    match &summary.profile_name {
        Some(name) => println!("Welcome back, {}!", name),
        None => println!("Welcome! Set up a profile with 'wellmart profile set'."),
    }
    println!("\"{}\"\n", view.quote);

    println!("{}", summary.date);
    println!("{}", "-".repeat(60));
    println!(
        "Calories   {:>6} / {} kcal ({} remaining)",
        summary.calories, summary.calorie_goal, summary.calories_remaining
    );
    println!(
        "Steps      {:>6} / {} ({}%, {} remaining, {:.2} km)",
        summary.steps,
        summary.step_goal,
        summary.step_progress,
        summary.steps_remaining,
        summary.distance_km
    );
    println!(
        "Exercise   {:>6} min, {} kcal",
        summary.exercise.minutes, summary.exercise.calories
    );
    match (&summary.latest_sugar, &summary.latest_sugar_status) {
        (Some(value), Some(analysis)) => {
            println!("Sugar      {:>6} mg/dL ({})", value, analysis.status)
        }
        _ => println!("Sugar      no readings"),
    }
    println!("Upcoming   {:>6} appointment(s)", summary.upcoming_appointments);

    if let Some(week) = &view.week {
        println!("\nLast 7 days");
        println!("{}", "-".repeat(60));
        for day in week {
            println!(
                "{} {}  {:>5} kcal  {:>6} steps  {:>3} min",
                day.date,
                day.date.format("%a"),
                day.calories,
                day.steps,
                day.exercise_minutes
            );
        }
    }
}
