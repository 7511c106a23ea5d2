use clap::{Args, Subcommand};

use super::{print_json, OutputFormat};
use wellmart_core::metrics::{bmi_advice, compute_bmi, BMI_BANDS};
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct BmiCommand {
    #[command(subcommand)]
    pub command: BmiSubcommand,
}

#[derive(Subcommand)]
pub enum BmiSubcommand {
    /// Compute BMI and remember the result
    Calc {
        /// Weight in kg, defaults to the profile's
        #[arg(long, short)]
        weight: Option<f64>,

        /// Height in cm, defaults to the profile's
        #[arg(long = "height", short = 'H')]
        height: Option<f64>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the last computed BMI
    Last {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the category bands
    Bands,
}

impl BmiCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            BmiSubcommand::Calc {
                weight,
                height,
                format,
            } => {
                let profile = store.user_profile();
                let weight = weight
                    .or(profile.map(|p| p.weight))
                    .ok_or("--weight is required when no profile is set")?;
                let height = height
                    .or(profile.map(|p| p.height))
                    .ok_or("--height is required when no profile is set")?;

                let reading = compute_bmi(weight, height);
                match format {
                    OutputFormat::Json => print_json(&reading)?,
                    OutputFormat::Text => {
                        println!("{}", reading);
                        println!("{}", bmi_advice(reading.category));
                    }
                }
                store.record_bmi(reading)?;
                Ok(())
            }
            BmiSubcommand::Last { format } => {
                let Some(reading) = store.last_bmi() else {
                    println!("No BMI computed yet");
                    return Ok(());
                };
                match format {
                    OutputFormat::Json => print_json(reading)?,
                    OutputFormat::Text => {
                        println!("{}", reading);
                        println!("Computed {}", reading.date.format("%Y-%m-%d %H:%M UTC"));
                    }
                }
                Ok(())
            }
            BmiSubcommand::Bands => {
                for band in &BMI_BANDS {
                    println!("{:<12} {:>5.1} - {:<5.1}", band.label, band.min, band.max);
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wellmart_core::metrics::BmiCategory;
    use wellmart_core::models::{Gender, UserProfile};
    use wellmart_core::MemorySlotStore;

    fn calc(weight: Option<f64>, height: Option<f64>) -> BmiCommand {
        BmiCommand {
            command: BmiSubcommand::Calc {
                weight,
                height,
                format: OutputFormat::Text,
            },
        }
    }

    #[test]
    fn test_calc_records_last_bmi() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);

        calc(Some(100.0), Some(170.0)).run(&mut store).unwrap();

        let last = store.last_bmi().unwrap();
        assert_eq!(last.value, 34.6);
        assert_eq!(last.category, BmiCategory::Obese);
    }

    #[test]
    fn test_calc_falls_back_to_profile() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        store
            .set_user_profile(UserProfile::new("Ana", 35, 70.0, 170.0, Gender::Female))
            .unwrap();

        calc(None, None).run(&mut store).unwrap();
        assert_eq!(store.last_bmi().unwrap().value, 24.2);
    }

    #[test]
    fn test_calc_without_profile_or_args_fails() {
        let slots = MemorySlotStore::new();
        let mut store = WellnessStore::hydrate(&slots);
        assert!(calc(Some(70.0), None).run(&mut store).is_err());
        assert!(store.last_bmi().is_none());
    }
}
