//! `calculate` and `fuels` subcommands.

use crate::config::Settings;
use crate::flow::{CalculationFlow, SaveStatus};
use crate::shell::{OutputFormat, Shell};
use cce_core::{FuelType, RawInput};
use cce_utils::numbers::to_fixed_1;
use log::info;
use std::io::Write;

/// Run one calculation from the command line and save it for the signed-in user.
///
/// `meals` and `duration` are taken as text; anything non-numeric is reported
/// the same way a bad slider value would be.
pub async fn run_calculate(
    settings: &Settings,
    fuel: &str,
    meals: &str,
    duration: &str,
    json: bool,
) -> anyhow::Result<()> {
    let db = settings.open_database()?;
    let auth = settings.user();
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut shell = Shell::new(std::io::stdout().lock(), format);

    let raw = RawInput::from_text(fuel, meals, duration);
    let outcome = CalculationFlow::new(&db, &auth).submit(raw, &mut shell).await?;
    shell.show_save_status(&outcome.save);

    if let SaveStatus::Saved(id) = outcome.save {
        info!(
            "Report {} stored, {} kg CO₂e/month",
            id,
            to_fixed_1(outcome.result.total())
        );
    }
    Ok(())
}

/// Print the fuel table: key, label and per-meal factor.
pub fn run_fuels<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for fuel in FuelType::ALL {
        writeln!(out, "{:<12} {:<12} {}", fuel.key(), fuel.label(), fuel.factor())?;
    }
    Ok(())
}
