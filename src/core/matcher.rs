//! Search matching over scanned (or cached) records.
//!
//! Pure functions over a record sequence: callers may feed them a live
//! scan, a cache lookup, or a merge of both.

use crate::core::identity;
use crate::core::similarity::{self, MatchMode};
use crate::models::media::{MediaFileRecord, SearchMatch};
use crate::models::report::{EpisodeEntry, SeasonInventory};
use std::cmp::Ordering;

/// Read contract an index/cache accelerator must expose. Candidates carry
/// the same record shape a live scan produces, so matching stays agnostic
/// to the source.
pub trait CollectionIndex {
    /// Candidate movie records for a title.
    fn search_movies_by_title(&self, title: &str) -> Vec<MediaFileRecord>;
    /// Candidate TV episode records for a title.
    fn search_tv_shows_by_title(&self, title: &str) -> Vec<MediaFileRecord>;
}

/// Search movie records for a query title.
pub fn search_movies(query: &str, records: &[MediaFileRecord], mode: MatchMode) -> Vec<SearchMatch> {
    search(query, records, mode)
}

/// Search TV show records for a query title.
pub fn search_tv_shows(query: &str, records: &[MediaFileRecord], mode: MatchMode) -> Vec<SearchMatch> {
    search(query, records, mode)
}

fn search(query: &str, records: &[MediaFileRecord], mode: MatchMode) -> Vec<SearchMatch> {
    let query = identity::normalize_title(query);
    let threshold = mode.threshold();

    let mut matches: Vec<SearchMatch> = records
        .iter()
        .filter_map(|record| {
            let confidence = similarity::score(&record.identity.normalized_title, &query);
            if confidence < threshold {
                return None;
            }
            Some(SearchMatch {
                identity: record.identity.clone(),
                path: record.path.clone(),
                confidence,
                size_bytes: record.size_bytes,
            })
        })
        .collect();

    // Stable sort: ties keep input order
    matches.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!("Query '{}' matched {} of {} records", query, matches.len(), records.len());

    matches
}

/// Build the local season/episode inventory for a show.
///
/// Runs a fuzzy TV search; episodes without a season number stay out of
/// the inventory, and the display title comes from the top-confidence
/// match.
pub fn season_inventory(query: &str, records: &[MediaFileRecord]) -> SeasonInventory {
    let matches = search_tv_shows(query, records, MatchMode::Fuzzy);

    if matches.is_empty() {
        return SeasonInventory::not_found(query);
    }

    let mut inventory = SeasonInventory {
        show_title: matches[0].identity.title.clone(),
        found: true,
        seasons: Default::default(),
    };

    for m in &matches {
        let Some(season) = m.identity.season else {
            continue;
        };
        inventory.seasons.entry(season).or_default().push(EpisodeEntry {
            episode: m.identity.episode,
            path: m.path.clone(),
            size_bytes: m.size_bytes,
        });
    }

    for entries in inventory.seasons.values_mut() {
        entries.sort_by_key(|e| e.episode.unwrap_or(0));
    }

    inventory
}
