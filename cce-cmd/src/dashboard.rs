//! `dashboard` subcommand.

use crate::config::Settings;
use crate::session::AuthSession;
use crate::shell::{OutputFormat, Shell};

/// Show the signed-in user's history summary and chart, or the login prompt.
///
/// The session starts from the configured user; the shell reacts to that
/// state the same way it reacts to a live sign-in.
pub async fn run_dashboard(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let db = settings.open_database()?;
    let session = AuthSession::new(settings.user());
    let mut events = session.subscribe();
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut shell = Shell::new(std::io::stdout().lock(), format);

    // no further sign-in changes come from the command line
    drop(session);
    shell.follow_auth(&mut events, &db).await;
    Ok(())
}
