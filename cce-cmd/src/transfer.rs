//! `export` and `import` subcommands: report history as CSV.

use crate::config::Settings;
use anyhow::{bail, Context};
use cce_core::User;
use log::info;
use std::fs;
use std::path::Path;

fn require_user(settings: &Settings) -> anyhow::Result<User> {
    match settings.user() {
        Some(user) => Ok(user),
        None => bail!("Please log in."),
    }
}

/// Write the signed-in user's history to `output`, or stdout when absent.
pub async fn run_export(settings: &Settings, output: Option<&Path>) -> anyhow::Result<()> {
    let user = require_user(settings)?;
    let db = settings.open_database()?;
    let csv = db.export_reports(&user.id)?;
    match output {
        Some(path) => {
            fs::write(path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Export complete. Output: {}", path.display());
        }
        None => print!("{}", csv),
    }
    Ok(())
}

/// Load history rows from `input` into the signed-in user's collection.
pub async fn run_import(settings: &Settings, input: &Path) -> anyhow::Result<()> {
    let user = require_user(settings)?;
    let csv = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let db = settings.open_database()?;
    let count = db.import_reports(&user, &csv)?;
    println!("Imported {} report(s) for {}.", count, user.display_name());
    Ok(())
}
