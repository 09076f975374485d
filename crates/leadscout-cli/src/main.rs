mod search;
mod view;

use anyhow::Context;
use clap::{Parser, Subcommand};
use leadscout_core::RUBRIC_V1;
use tracing_subscriber::EnvFilter;

use crate::search::SearchArgs;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Find and qualify B2B leads in recent X posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search X for each query, qualify the posts and show the leads
    Search(SearchArgs),
    /// Print the qualification rubric sent to the model
    Rubric,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = leadscout_core::load_app_config().context("failed to load configuration")?;
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => search::run_search(&config, &args).await?,
        Commands::Rubric => {
            println!("Qualification rubric {}", RUBRIC_V1.version);
            println!();
            println!("{}", RUBRIC_V1.render());
        }
    }

    Ok(())
}
