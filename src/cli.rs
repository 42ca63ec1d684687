use clap::{Args, Parser, Subcommand};

/// Meal diary: log meals and track how many stay within the diet.
#[derive(Parser, Debug)]
#[command(name = "meal_diary")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal diary JSON file.
    #[arg(short, long, env = "MEAL_DIARY_FILE", default_value = "meals.json")]
    pub file: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// List logged meals by day with the diet percentage.
    #[default]
    Home,

    /// Show diet statistics.
    Stats {
        /// Print the statistics as JSON instead of a report.
        #[arg(long)]
        json: bool,
    },

    /// Show a single meal.
    Show {
        /// Meal id, as listed by `home`.
        id: String,
    },

    /// Log a new meal. Missing fields are prompted for.
    Add(MealArgs),

    /// Edit a logged meal. Missing fields are prompted for, prefilled with current values.
    Edit {
        /// Meal id, as listed by `home`.
        id: String,

        #[command(flatten)]
        meal: MealArgs,
    },

    /// Delete a logged meal.
    Remove {
        /// Meal id, as listed by `home`.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct MealArgs {
    /// Meal name.
    #[arg(long)]
    pub name: Option<String>,

    /// Free text description.
    #[arg(long)]
    pub description: Option<String>,

    /// Day of the meal (YYYY-MM-DD).
    #[arg(long)]
    pub date: Option<String>,

    /// Time of the meal (HH:MM).
    #[arg(long)]
    pub time: Option<String>,

    /// The meal was within the diet.
    #[arg(long, conflicts_with = "not_healthy")]
    pub healthy: bool,

    /// The meal was off the diet.
    #[arg(long)]
    pub not_healthy: bool,
}

impl MealArgs {
    /// Diet flag given on the command line, if any.
    pub fn is_healthy(&self) -> Option<bool> {
        match (self.healthy, self.not_healthy) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}
