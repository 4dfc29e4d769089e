//! Season inventory command.

use crate::core::{matcher, scanner};
use crate::models::config::Config;
use crate::models::media::MediaKind;
use anyhow::Result;
use colored::Colorize;

/// Print the local season/episode inventory for a show.
pub fn execute_seasons(config: &Config, title: &str) -> Result<()> {
    if config.tv_directories.is_empty() {
        anyhow::bail!("No TV directories configured");
    }

    let outcome = scanner::scan_directories(&config.tv_directories, MediaKind::TvShows);
    let inventory = matcher::season_inventory(title, &outcome.records);

    if !inventory.found {
        println!("{}", format!("No TV shows found matching '{}'", title).red());
        return Ok(());
    }

    println!("{}", inventory.show_title.bold());
    println!(
        "   Seasons: {}   Episodes: {}",
        inventory.seasons.len(),
        inventory.total_episodes()
    );
    println!();

    for (season, entries) in &inventory.seasons {
        let episodes = inventory.episode_numbers(*season);
        let range = match (episodes.first(), episodes.last()) {
            (Some(first), Some(last)) => format!(" (E{:02}-E{:02})", first, last),
            _ => String::new(),
        };
        println!("   Season {}: {} episodes{}", season, entries.len(), range);
    }

    Ok(())
}
