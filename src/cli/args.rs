//! Command line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Media Assistant - find duplicates and missing episodes in your library
#[derive(Parser, Debug)]
#[command(name = "media-assistant")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find duplicate movies and report reclaimable space
    Duplicates {
        /// Directories to scan (defaults to configured movie directories)
        #[arg(value_name = "DIR")]
        directories: Vec<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the collection by title
    Search {
        /// Title to search for
        #[arg(value_name = "TITLE")]
        title: String,

        /// Media kind: movies or tvshows
        #[arg(short, long, default_value = "movies")]
        kind: String,

        /// Require a strict match (confidence >= 0.9)
        #[arg(long)]
        strict: bool,
    },

    /// Show the local season/episode inventory for a TV show
    Seasons {
        /// Show title
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Report missing seasons/episodes for a TV show via TMDB
    Missing {
        /// Show title
        #[arg(value_name = "TITLE")]
        title: String,

        /// Only check a specific season
        #[arg(short, long, value_name = "N")]
        season: Option<u16>,
    },
}
