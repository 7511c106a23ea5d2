use clap::{Args, Subcommand};

use super::{date_or_today, print_json, OutputFormat};
use wellmart_core::models::{CalorieEntry, MealType};
use wellmart_core::summary::{
    calorie_goal, calories_by_meal, calories_on, calories_remaining, macros_on,
};
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct CaloriesCommand {
    #[command(subcommand)]
    pub command: CaloriesSubcommand,
}

#[derive(Subcommand)]
pub enum CaloriesSubcommand {
    /// Log a food item
    Add {
        /// Food name
        food: String,

        /// Energy in kcal
        #[arg(long, short = 'k')]
        calories: u32,

        /// Meal type (breakfast, lunch, dinner, snack)
        #[arg(long = "meal", short = 'm', value_name = "MEAL")]
        meal_type: MealType,

        /// Protein in grams
        #[arg(long)]
        protein: Option<u32>,

        /// Carbohydrates in grams
        #[arg(long)]
        carbs: Option<u32>,

        /// Fat in grams
        #[arg(long)]
        fat: Option<u32>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,
    },

    /// Show a day's entries and totals
    List {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Delete an entry by id
    Remove {
        /// Entry id
        id: String,
    },
}

impl CaloriesCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            CaloriesSubcommand::Add {
                food,
                calories,
                meal_type,
                protein,
                carbs,
                fat,
                date,
            } => {
                let date = date_or_today(date)?;
                let entry = CalorieEntry::new(date, *meal_type, food, *calories)
                    .with_macros(*protein, *carbs, *fat);
                println!("Logged {}", entry);
                store.add_calorie_entry(entry)?;
                Ok(())
            }
            CaloriesSubcommand::List { date, format } => {
                let date = date_or_today(date)?;
                let entries: Vec<&CalorieEntry> = store
                    .calorie_entries()
                    .iter()
                    .filter(|e| e.date == date)
                    .collect();

                match format {
                    OutputFormat::Json => print_json(&entries)?,
                    OutputFormat::Text => {
                        let consumed = calories_on(store.calorie_entries(), date);
                        let goal = calorie_goal(store.user_profile());

                        println!("{}", date);
                        println!("{}", "-".repeat(60));
                        if entries.is_empty() {
                            println!("  No entries");
                        }
                        for (meal, total) in calories_by_meal(store.calorie_entries(), date) {
                            let meal_entries: Vec<_> =
                                entries.iter().filter(|e| e.meal_type == meal).collect();
                            if meal_entries.is_empty() {
                                continue;
                            }
                            println!("  {} ({} kcal)", meal, total);
                            for entry in meal_entries {
                                println!(
                                    "    {:<30} {:>5} kcal  [{}]",
                                    entry.food_name, entry.calories, entry.id
                                );
                            }
                        }

                        let macros = macros_on(store.calorie_entries(), date);
                        println!();
                        println!(
                            "Consumed: {} / {} kcal ({} remaining)",
                            consumed,
                            goal,
                            calories_remaining(consumed, goal)
                        );
                        println!(
                            "Macros:   protein {}g, carbs {}g, fat {}g",
                            macros.protein, macros.carbs, macros.fat
                        );
                    }
                }
                Ok(())
            }
            CaloriesSubcommand::Remove { id } => {
                if store.remove_calorie_entry(id)? {
                    println!("Removed entry {}", id);
                } else {
                    println!("No entry with id {}", id);
                }
                Ok(())
            }
        }
    }
}
