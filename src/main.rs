//! Media Assistant CLI
//!
//! A command-line tool for analyzing a personal video library: duplicate
//! movie detection, title search and missing-episode reports via TMDB.

use clap::Parser;
use media_assistant::cli::{
    args::{Cli, Commands},
    commands::{duplicates, missing, search, seasons},
};
use media_assistant::models::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    let config = config::load_config();

    // Run the appropriate command
    match cli.command {
        Commands::Duplicates { directories, json } => {
            duplicates::execute_duplicates(&config, directories, json)?;
        }

        Commands::Search { title, kind, strict } => {
            search::execute_search(&config, &title, &kind, strict)?;
        }

        Commands::Seasons { title } => {
            seasons::execute_seasons(&config, &title)?;
        }

        Commands::Missing { title, season } => {
            missing::execute_missing(&config, &title, season).await?;
        }
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_assistant=debug")
    } else {
        EnvFilter::new("media_assistant=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
