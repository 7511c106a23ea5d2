use clap::{Args, Subcommand};

use super::{print_json, OutputFormat};
use wellmart_core::models::{
    DiabetesType, Gender, UserProfile, DEFAULT_CALORIE_GOAL, DEFAULT_STEP_GOAL,
};
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub command: ProfileSubcommand,
}

#[derive(Subcommand)]
pub enum ProfileSubcommand {
    /// Show the saved profile
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create or replace the profile
    Set {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        /// Weight in kg
        #[arg(long)]
        weight: f64,

        /// Height in cm
        #[arg(long)]
        height: f64,

        /// Gender (male, female, other)
        #[arg(long)]
        gender: Gender,

        /// Diabetes type (type1, type2, prediabetes, none)
        #[arg(long)]
        diabetes_type: Option<DiabetesType>,

        /// Daily calorie goal (kcal)
        #[arg(long)]
        calorie_goal: Option<u32>,

        /// Daily step goal
        #[arg(long)]
        step_goal: Option<u32>,

        /// Avatar image URL
        #[arg(long)]
        avatar: Option<String>,
    },
}

impl ProfileCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProfileSubcommand::Show { format } => {
                let Some(profile) = store.user_profile() else {
                    println!("No profile yet. Create one with 'wellmart profile set'.");
                    return Ok(());
                };
                match format {
                    OutputFormat::Json => print_json(profile)?,
                    OutputFormat::Text => println!("{}", profile),
                }
                Ok(())
            }
            ProfileSubcommand::Set {
                name,
                age,
                weight,
                height,
                gender,
                diabetes_type,
                calorie_goal,
                step_goal,
                avatar,
            } => {
                let mut profile = UserProfile::new(name, *age, *weight, *height, *gender);
                if let Some(kind) = diabetes_type {
                    profile = profile.with_diabetes_type(*kind);
                }
                profile = profile.with_goals(
                    calorie_goal.unwrap_or(DEFAULT_CALORIE_GOAL),
                    step_goal.unwrap_or(DEFAULT_STEP_GOAL),
                );
                profile.avatar = avatar.clone();

                // Keep the id stable across edits
                if let Some(existing) = store.user_profile() {
                    profile.id = existing.id.clone();
                }

                store.set_user_profile(profile)?;
                println!("Profile saved.");
                Ok(())
            }
        }
    }
}
