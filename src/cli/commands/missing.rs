//! Missing-episode report command.

use crate::core::{matcher, reconciler, scanner};
use crate::models::config::Config;
use crate::models::media::{MediaKind, ShowCatalog};
use crate::models::report::ReconciliationReport;
use crate::services::tmdb::TmdbClient;
use anyhow::Result;
use colored::Colorize;

/// Reconcile the local collection against TMDB and report what is missing.
pub async fn execute_missing(config: &Config, title: &str, season: Option<u16>) -> Result<()> {
    if config.tv_directories.is_empty() {
        anyhow::bail!("No TV directories configured");
    }

    let outcome = scanner::scan_directories(&config.tv_directories, MediaKind::TvShows);
    let inventory = matcher::season_inventory(title, &outcome.records);

    // Catalog failure degrades to a local-only report, never aborts.
    let catalog = if inventory.found {
        lookup_catalog(config, title).await
    } else {
        None
    };

    let report = reconciler::reconcile(&inventory, catalog.as_ref(), season);
    print_report(&report, catalog.is_some());
    Ok(())
}

async fn lookup_catalog(config: &Config, title: &str) -> Option<ShowCatalog> {
    let client = match TmdbClient::from_settings(&config.tmdb) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("TMDB unavailable: {}", e);
            return None;
        }
    };

    match client.lookup_show(title).await {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("TMDB lookup failed for '{}': {}", title, e);
            None
        }
    }
}

fn print_report(report: &ReconciliationReport, had_catalog: bool) {
    if !report.found_locally {
        println!(
            "{}",
            format!("'{}' was not found in the local collection", report.show_title).red()
        );
        return;
    }

    println!("{}", report.show_title.bold());

    if !had_catalog {
        println!(
            "   {}",
            "No catalog data available - reporting local collection only".yellow()
        );
    }

    println!(
        "   Local seasons: {}   Catalog seasons: {}",
        report.local_seasons.len(),
        report.catalog_seasons.len()
    );
    println!(
        "   Completeness: {:.1}% ({})",
        report.completeness_percent,
        report.status()
    );

    if report.total_missing == 0 {
        println!("   {}", "Nothing missing.".green());
        return;
    }

    println!();
    for (season, episodes) in &report.missing_episodes {
        let label = if report.missing_seasons.contains(season) {
            " (entire season missing)".red().to_string()
        } else {
            String::new()
        };
        let list = episodes
            .iter()
            .map(|e| format!("E{:02}", e))
            .collect::<Vec<_>>()
            .join(", ");
        println!("   Season {}: missing {}{}", season, list, label);
    }
    println!();
    println!("   Total missing episodes: {}", report.total_missing.to_string().red().bold());
}
