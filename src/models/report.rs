//! Report-shaped outputs of the analysis engine.

use crate::models::media::MediaFileRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// A set of files that resolve to the same movie identity.
///
/// Only exists when at least two members share the group key. `canonical`
/// is the member recommended to keep: largest by size, ties broken by
/// first-encountered order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Normalized title plus year, as produced by `MediaIdentity::group_key`.
    pub group_key: String,
    /// All members, in the order they were encountered.
    pub members: Vec<MediaFileRecord>,
    /// The member recommended to keep.
    pub canonical: MediaFileRecord,
}

impl DuplicateGroup {
    /// Bytes reclaimable by deleting everything except the canonical file.
    pub fn wasted_bytes(&self) -> u64 {
        let total: u64 = self.members.iter().map(|m| m.size_or_zero()).sum();
        total.saturating_sub(self.canonical.size_or_zero())
    }
}

/// Aggregate statistics over a set of duplicate groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuplicateStats {
    /// Number of duplicate groups.
    pub groups: usize,
    /// Files that could be deleted (members minus canonicals).
    pub removable_files: usize,
    /// Total bytes reclaimable.
    pub reclaimable_bytes: u64,
}

/// One locally-present episode file within a season.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeEntry {
    /// Episode number, `None` when it could not be parsed.
    pub episode: Option<u16>,
    /// Path to the file.
    pub path: PathBuf,
    /// File size in bytes, if known.
    pub size_bytes: Option<u64>,
}

/// Locally-present seasons and episodes for one show.
///
/// Entries with an unparseable episode number stay in the listing but are
/// excluded from episode counting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonInventory {
    /// Display title (top-confidence match, or the query when not found).
    pub show_title: String,
    /// Whether any local files matched the show at all.
    pub found: bool,
    /// Episodes grouped by season number.
    pub seasons: BTreeMap<u16, Vec<EpisodeEntry>>,
}

impl SeasonInventory {
    /// Inventory for a show with no local matches.
    pub fn not_found(title: &str) -> Self {
        Self {
            show_title: title.to_string(),
            found: false,
            seasons: BTreeMap::new(),
        }
    }

    /// Season numbers present locally.
    pub fn season_numbers(&self) -> BTreeSet<u16> {
        self.seasons.keys().copied().collect()
    }

    /// Distinct episode numbers present for a season.
    pub fn episode_numbers(&self, season: u16) -> BTreeSet<u16> {
        self.seasons
            .get(&season)
            .map(|entries| entries.iter().filter_map(|e| e.episode).collect())
            .unwrap_or_default()
    }

    /// Total distinct episodes across all seasons.
    pub fn total_episodes(&self) -> usize {
        self.seasons
            .keys()
            .map(|s| self.episode_numbers(*s).len())
            .sum()
    }
}

/// Result of comparing the local inventory against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Show title (catalog title when available, local title otherwise).
    pub show_title: String,
    /// Whether the show was found locally at all.
    pub found_locally: bool,
    /// Seasons present locally.
    pub local_seasons: BTreeSet<u16>,
    /// Seasons the catalog lists.
    pub catalog_seasons: BTreeSet<u16>,
    /// Catalog seasons with no local files.
    pub missing_seasons: BTreeSet<u16>,
    /// Missing episode numbers per season, sorted ascending.
    pub missing_episodes: BTreeMap<u16, Vec<u16>>,
    /// Total count of missing episodes.
    pub total_missing: usize,
    /// Percentage of expected episodes present locally, in `[0, 100]`.
    pub completeness_percent: f64,
}

impl ReconciliationReport {
    /// Human-readable completeness label.
    pub fn status(&self) -> &'static str {
        if !self.found_locally {
            "Not Found"
        } else if self.completeness_percent >= 100.0 {
            "Complete"
        } else if self.completeness_percent >= 90.0 {
            "Nearly Complete"
        } else if self.completeness_percent >= 75.0 {
            "Mostly Complete"
        } else if self.completeness_percent >= 50.0 {
            "Partially Complete"
        } else if self.completeness_percent > 0.0 {
            "Incomplete"
        } else {
            "Not Found"
        }
    }
}
