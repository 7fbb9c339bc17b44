//! CCE CLI - Command line tool for estimating cooking emissions.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cce-cli",
    version,
    about = "Household cooking emissions estimator"
)]
struct Cli {
    #[command(flatten)]
    settings: cce_cmd::Settings,

    #[command(subcommand)]
    command: cce_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("using database {}", cli.settings.database.display());
    cce_cmd::run(cli.settings, cli.command).await
}
