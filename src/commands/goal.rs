use clap::{Args, Subcommand};

use super::{parse_date, print_json, OutputFormat};
use wellmart_core::models::{Goal, GoalCategory};
use wellmart_core::summary::goal_overview;
use wellmart_core::{SlotStore, WellnessStore};

#[derive(Args)]
pub struct GoalCommand {
    #[command(subcommand)]
    pub command: GoalSubcommand,
}

#[derive(Subcommand)]
pub enum GoalSubcommand {
    /// Create a goal
    Add {
        title: String,

        /// Category (fitness, nutrition, weight, health)
        #[arg(long)]
        category: GoalCategory,

        /// Target date (YYYY-MM-DD)
        #[arg(long, short)]
        target: String,

        #[arg(long, short, default_value = "")]
        description: String,
    },

    /// Set a goal's progress in percent
    Progress {
        /// Goal id
        id: String,

        /// Progress; values outside 0-100 are clamped
        #[arg(allow_negative_numbers = true)]
        percent: i64,
    },

    /// List goals with per-category progress
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn clamp_progress(percent: i64) -> u8 {
    percent.clamp(0, 100) as u8
}

impl GoalCommand {
    pub fn run<S: SlotStore>(
        &self,
        store: &mut WellnessStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GoalSubcommand::Add {
                title,
                category,
                target,
                description,
            } => {
                let target = parse_date(target)?;
                let goal = Goal::new(title, description, target, *category);
                println!("Created goal {} ({})", goal.title, goal.id);
                store.add_goal(goal)?;
                Ok(())
            }
            GoalSubcommand::Progress { id, percent } => {
                let progress = clamp_progress(*percent);
                if store.update_goal(id, progress)? {
                    println!("Goal {} at {}%", id, progress);
                } else {
                    println!("No goal with id {}", id);
                }
                Ok(())
            }
            GoalSubcommand::List { format } => {
                match format {
                    OutputFormat::Json => print_json(store.goals())?,
                    OutputFormat::Text => {
                        if store.goals().is_empty() {
                            println!("No goals yet");
                            return Ok(());
                        }
                        for goal in store.goals() {
                            println!("{}\n    id: {}", goal, goal.id);
                        }
                        println!();
                        for overview in goal_overview(store.goals()) {
                            if overview.goals > 0 {
                                println!(
                                    "{:<10} {} goal(s), {}% average",
                                    overview.category, overview.goals, overview.average_progress
                                );
                            }
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
