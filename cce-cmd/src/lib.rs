//! Command implementations for the cooking emissions CLI.
//!
//! Provides subcommands for running a calculation, showing the history
//! dashboard, and moving report history in and out as CSV.

use clap::Subcommand;
use std::path::PathBuf;

pub mod calculate;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod flow;
pub mod session;
pub mod shell;
pub mod transfer;

pub use config::Settings;

#[derive(Subcommand)]
pub enum Command {
    /// Calculate monthly cooking emissions (saved when a user is signed in)
    Calculate {
        /// Fuel key: wood, charcoal, lpg, electricity or other
        #[arg(short, long, default_value = "other")]
        fuel: String,

        /// Meals cooked per day
        #[arg(short, long, allow_hyphen_values = true)]
        meals: String,

        /// Cooking hours per day
        #[arg(short, long, allow_hyphen_values = true)]
        duration: String,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the signed-in user's emission history
    Dashboard {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known fuels and their emission factors
    Fuels,

    /// Export the signed-in user's reports as CSV
    Export {
        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import reports from CSV into the signed-in user's history
    Import {
        /// CSV with headers: created_at,fuel_type,meals_number,cooking_duration
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub async fn run(settings: Settings, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Calculate {
            fuel,
            meals,
            duration,
            json,
        } => calculate::run_calculate(&settings, &fuel, &meals, &duration, json).await,
        Command::Dashboard { json } => dashboard::run_dashboard(&settings, json).await,
        Command::Fuels => calculate::run_fuels(&mut std::io::stdout().lock()),
        Command::Export { output } => transfer::run_export(&settings, output.as_deref()).await,
        Command::Import { input } => transfer::run_import(&settings, &input).await,
    }
}
