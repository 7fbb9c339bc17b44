//! Runtime settings shared by every subcommand.
//!
//! Each setting comes from a global flag, falling back to an environment
//! variable; only the database path has a default.

use cce_core::User;
use cce_db::Database;
use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_DATABASE: &str = "cooking-emissions.sqlite3";

#[derive(Args, Debug, Clone, PartialEq)]
pub struct Settings {
    /// SQLite file holding report history
    #[arg(long, env = "CCE_DATABASE", default_value = DEFAULT_DATABASE, global = true)]
    pub database: PathBuf,

    /// Id of the signed-in user; without it nothing is saved or listed
    #[arg(long, env = "CCE_USER_ID", global = true)]
    pub user_id: Option<String>,

    /// Email of the signed-in user
    #[arg(long, env = "CCE_USER_EMAIL", global = true)]
    pub user_email: Option<String>,
}

impl Settings {
    /// The signed-in user, if a non-blank id was given.
    pub fn user(&self) -> Option<User> {
        let id = self.user_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        let email = self
            .user_email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
            .map(str::to_string);
        Some(User::new(id, email))
    }

    pub fn open_database(&self) -> anyhow::Result<Database> {
        Database::open(&self.database)
    }
}
