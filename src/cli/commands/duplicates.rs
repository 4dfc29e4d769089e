//! Duplicate report command.

use crate::core::{duplicates, scanner};
use crate::models::config::Config;
use crate::models::media::MediaKind;
use crate::models::report::DuplicateGroup;
use crate::utils::fs::format_size;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Scan the movie libraries and print a ranked duplicate report.
pub fn execute_duplicates(config: &Config, directories: Vec<PathBuf>, json: bool) -> Result<()> {
    let directories = if directories.is_empty() {
        config.movie_directories.clone()
    } else {
        directories
    };

    if directories.is_empty() {
        anyhow::bail!("No movie directories given. Pass them as arguments or set them in config.toml");
    }

    println!("Scanning {} directories for movie files...", directories.len());
    let outcome = scanner::scan_directories(&directories, MediaKind::Movies);

    if outcome.skipped_dirs.len() == directories.len() {
        anyhow::bail!("None of the given directories could be scanned");
    }

    let groups = duplicates::group_duplicates(&outcome.records);

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    print_report(&groups);
    Ok(())
}

fn print_report(groups: &[DuplicateGroup]) {
    if groups.is_empty() {
        println!("{}", "No duplicate movies found.".green());
        return;
    }

    println!();
    println!("Found {} groups of duplicate movies:", groups.len());
    println!("{}", "=".repeat(70));

    for (i, group) in groups.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, group.group_key.bold());
        for member in &group.members {
            let size = member
                .size_bytes
                .map(format_size)
                .unwrap_or_else(|| "unknown size".to_string());
            let marker = if member.path == group.canonical.path {
                "KEEP".green().bold()
            } else {
                "DELETE CANDIDATE".red()
            };
            println!("   {} [{}] {}", member.path.display(), size, marker);
        }
        println!(
            "   Space reclaimable: {}",
            format_size(group.wasted_bytes()).yellow()
        );
    }

    let stats = duplicates::duplicate_stats(groups);
    println!();
    println!("{}", "Summary".bold());
    println!("   Duplicate groups: {}", stats.groups);
    println!("   Files that can be deleted: {}", stats.removable_files);
    println!(
        "   Total space reclaimable: {}",
        format_size(stats.reclaimable_bytes).yellow().bold()
    );
    println!();
    println!("{}", "Analysis only - no files have been deleted.".bold());
}
