mod bmi;
mod calories;
mod cart;
mod config_cmd;
mod dashboard;
mod doctor;
mod exercise;
mod goal;
mod profile;
mod shop;
mod steps;
mod sugar;

pub use bmi::BmiCommand;
pub use calories::CaloriesCommand;
pub use cart::CartCommand;
pub use config_cmd::ConfigCommand;
pub use dashboard::DashboardCommand;
pub use doctor::DoctorCommand;
pub use exercise::ExerciseCommand;
pub use goal::GoalCommand;
pub use profile::ProfileCommand;
pub use shop::ShopCommand;
pub use steps::StepsCommand;
pub use sugar::SugarCommand;

use chrono::{NaiveDate, Utc};
use clap::ValueEnum;

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parses a YYYY-MM-DD argument, defaulting to today in UTC.
fn date_or_today(date: &Option<String>) -> Result<NaiveDate, String> {
    match date {
        Some(d) => parse_date(d),
        None => Ok(Utc::now().date_naive()),
    }
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format '{}'. Use YYYY-MM-DD.", date))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(parse_date("09/03/2025")
            .unwrap_err()
            .contains("Use YYYY-MM-DD"));
    }

    #[test]
    fn test_date_or_today_defaults() {
        assert_eq!(date_or_today(&None).unwrap(), Utc::now().date_naive());
    }
}
