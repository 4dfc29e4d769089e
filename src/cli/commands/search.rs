//! Search command implementation.

use crate::core::{matcher, scanner, similarity::MatchMode};
use crate::models::config::Config;
use crate::models::media::MediaKind;
use crate::utils::fs::format_size;
use anyhow::Result;
use colored::Colorize;

/// Search the configured libraries for a title.
pub fn execute_search(config: &Config, title: &str, kind: &str, strict: bool) -> Result<()> {
    let kind = match kind {
        "movies" => MediaKind::Movies,
        "tvshows" => MediaKind::TvShows,
        other => anyhow::bail!("Unknown media kind '{}' (expected movies or tvshows)", other),
    };

    let directories = match kind {
        MediaKind::Movies => &config.movie_directories,
        MediaKind::TvShows => &config.tv_directories,
    };
    if directories.is_empty() {
        anyhow::bail!("No {} directories configured", kind);
    }

    let mode = if strict { MatchMode::Strict } else { MatchMode::Fuzzy };

    let outcome = scanner::scan_directories(directories, kind);
    let matches = match kind {
        MediaKind::Movies => matcher::search_movies(title, &outcome.records, mode),
        MediaKind::TvShows => matcher::search_tv_shows(title, &outcome.records, mode),
    };

    if matches.is_empty() {
        println!("{}", format!("No {} found matching '{}'", kind, title).red());
        return Ok(());
    }

    println!("Found {} match(es) for '{}':", matches.len(), title);
    println!();

    for (i, m) in matches.iter().take(10).enumerate() {
        let year = m
            .identity
            .year
            .map(|y| format!(" ({})", y))
            .unwrap_or_default();
        let confidence = if m.confidence < 0.95 {
            format!(" [{:.0}% match]", m.confidence * 100.0)
        } else {
            String::new()
        };
        let episode = match (m.identity.season, m.identity.episode) {
            (Some(s), Some(e)) => format!(" S{:02}E{:02}", s, e),
            (Some(s), None) => format!(" S{:02}", s),
            _ => String::new(),
        };

        println!(
            "{}. {}{}{}{}",
            i + 1,
            m.identity.title.bold(),
            year,
            episode,
            confidence.dimmed()
        );
        println!("   {}", m.path.display());
        if let Some(size) = m.size_bytes {
            println!("   {}", format_size(size).dimmed());
        }
        println!();
    }

    Ok(())
}
