//! Local-vs-catalog reconciliation.
//!
//! Compares the local season/episode inventory against the catalog
//! structure and reports missing seasons, missing episodes per season and
//! an overall completeness percentage. Single-pass, idempotent, no side
//! effects.

use crate::models::media::ShowCatalog;
use crate::models::report::{ReconciliationReport, SeasonInventory};
use std::collections::{BTreeMap, BTreeSet};

/// Reconcile a local inventory against the catalog.
///
/// A missing catalog (lookup failed or returned nothing) degrades to a
/// local-only report: the engine cannot assert anything is missing without
/// a reference, so completeness is vacuously 100%.
pub fn reconcile(
    local: &SeasonInventory,
    catalog: Option<&ShowCatalog>,
    target_season: Option<u16>,
) -> ReconciliationReport {
    if !local.found {
        return ReconciliationReport {
            show_title: local.show_title.clone(),
            found_locally: false,
            local_seasons: BTreeSet::new(),
            catalog_seasons: BTreeSet::new(),
            missing_seasons: BTreeSet::new(),
            missing_episodes: BTreeMap::new(),
            total_missing: 0,
            completeness_percent: 0.0,
        };
    }

    let catalog = match catalog {
        Some(c) if !c.seasons.is_empty() => c,
        _ => return local_only_report(local),
    };

    let mut local_seasons = local.season_numbers();
    let mut catalog_seasons: BTreeSet<u16> =
        catalog.seasons.iter().map(|s| s.season_number).collect();

    if let Some(target) = target_season {
        local_seasons.retain(|s| *s == target);
        catalog_seasons.retain(|s| *s == target);
    }

    let missing_seasons: BTreeSet<u16> =
        catalog_seasons.difference(&local_seasons).copied().collect();

    let mut missing_episodes: BTreeMap<u16, Vec<u16>> = BTreeMap::new();
    let mut expected_total = 0usize;
    let mut found_total = 0usize;

    for season in &catalog.seasons {
        if let Some(target) = target_season {
            if season.season_number != target {
                continue;
            }
        }

        let expected: BTreeSet<u16> = (1..=season.episode_count).collect();
        expected_total += expected.len();

        if local_seasons.contains(&season.season_number) {
            let have = local.episode_numbers(season.season_number);
            found_total += have.len();

            let missing: Vec<u16> = expected.difference(&have).copied().collect();
            if !missing.is_empty() {
                missing_episodes.insert(season.season_number, missing);
            }
        } else {
            // Entire season absent
            missing_episodes.insert(season.season_number, expected.into_iter().collect());
        }
    }

    let total_missing = missing_episodes.values().map(|v| v.len()).sum();

    let completeness_percent = if expected_total == 0 {
        100.0
    } else {
        (found_total as f64 / expected_total as f64 * 100.0).clamp(0.0, 100.0)
    };

    ReconciliationReport {
        show_title: catalog.title.clone(),
        found_locally: true,
        local_seasons,
        catalog_seasons,
        missing_seasons,
        missing_episodes,
        total_missing,
        completeness_percent,
    }
}

/// Report built from local data alone, used when no catalog is available.
fn local_only_report(local: &SeasonInventory) -> ReconciliationReport {
    ReconciliationReport {
        show_title: local.show_title.clone(),
        found_locally: true,
        local_seasons: local.season_numbers(),
        catalog_seasons: BTreeSet::new(),
        missing_seasons: BTreeSet::new(),
        missing_episodes: BTreeMap::new(),
        total_missing: 0,
        completeness_percent: 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::CatalogSeason;
    use crate::models::report::EpisodeEntry;
    use std::path::PathBuf;

    fn inventory(seasons: &[(u16, &[u16])]) -> SeasonInventory {
        let mut inv = SeasonInventory {
            show_title: "The Show".to_string(),
            found: true,
            seasons: BTreeMap::new(),
        };
        for (season, episodes) in seasons {
            let entries = episodes
                .iter()
                .map(|e| EpisodeEntry {
                    episode: Some(*e),
                    path: PathBuf::from(format!("s{}e{}.mkv", season, e)),
                    size_bytes: Some(1),
                })
                .collect();
            inv.seasons.insert(*season, entries);
        }
        inv
    }

    fn catalog(seasons: &[(u16, u16)]) -> ShowCatalog {
        ShowCatalog {
            tmdb_id: 42,
            title: "The Show".to_string(),
            seasons: seasons
                .iter()
                .map(|(n, count)| CatalogSeason {
                    season_number: *n,
                    episode_count: *count,
                })
                .collect(),
        }
    }

    #[test]
    fn test_not_found_locally() {
        let inv = SeasonInventory::not_found("Ghost Show");
        let report = reconcile(&inv, Some(&catalog(&[(1, 10)])), None);
        assert!(!report.found_locally);
        assert_eq!(report.total_missing, 0);
        assert_eq!(report.completeness_percent, 0.0);
        assert_eq!(report.status(), "Not Found");
    }

    #[test]
    fn test_no_catalog_is_vacuously_complete() {
        let inv = inventory(&[(1, &[1, 2])]);
        let report = reconcile(&inv, None, None);
        assert!(report.found_locally);
        assert_eq!(report.completeness_percent, 100.0);
        assert!(report.missing_seasons.is_empty());
        assert!(report.missing_episodes.is_empty());
    }

    #[test]
    fn test_empty_catalog_is_vacuously_complete() {
        let inv = inventory(&[(1, &[1])]);
        let report = reconcile(&inv, Some(&catalog(&[])), None);
        assert_eq!(report.completeness_percent, 100.0);
        assert_eq!(report.total_missing, 0);
    }

    #[test]
    fn test_complete_collection() {
        let inv = inventory(&[(1, &[1, 2, 3]), (2, &[1, 2])]);
        let report = reconcile(&inv, Some(&catalog(&[(1, 3), (2, 2)])), None);
        assert_eq!(report.total_missing, 0);
        assert_eq!(report.completeness_percent, 100.0);
        assert_eq!(report.status(), "Complete");
    }

    #[test]
    fn test_missing_season_contributes_full_expected_set() {
        let inv = inventory(&[(1, &[1, 2, 3])]);
        let report = reconcile(&inv, Some(&catalog(&[(1, 3), (2, 2)])), None);
        assert_eq!(
            report.missing_seasons.iter().copied().collect::<Vec<_>>(),
            vec![2]
        );
        assert_eq!(report.missing_episodes[&2], vec![1, 2]);
        assert_eq!(report.total_missing, 2);
        assert_eq!(report.completeness_percent, 60.0);
    }

    #[test]
    fn test_partial_season_set_difference() {
        let inv = inventory(&[(1, &[1, 3])]);
        let report = reconcile(&inv, Some(&catalog(&[(1, 4)])), None);
        assert_eq!(report.missing_episodes[&1], vec![2, 4]);
        assert_eq!(report.total_missing, 2);
        assert_eq!(report.completeness_percent, 50.0);
    }

    #[test]
    fn test_target_season_filtering() {
        let inv = inventory(&[(1, &[1, 2, 3]), (2, &[1])]);
        let report = reconcile(&inv, Some(&catalog(&[(1, 3), (2, 2)])), Some(2));
        assert_eq!(report.local_seasons.iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(report.catalog_seasons.iter().copied().collect::<Vec<_>>(), vec![2]);
        assert_eq!(report.missing_episodes[&2], vec![2]);
        assert_eq!(report.total_missing, 1);
        assert_eq!(report.completeness_percent, 50.0);
    }

    #[test]
    fn test_extra_local_episodes_clamp_to_100() {
        // Local has an episode number beyond what the catalog expects
        let inv = inventory(&[(1, &[1, 2, 3, 4])]);
        let report = reconcile(&inv, Some(&catalog(&[(1, 3)])), None);
        assert_eq!(report.completeness_percent, 100.0);
        assert_eq!(report.total_missing, 0);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let inv = inventory(&[(1, &[1])]);
        let cat = catalog(&[(1, 2)]);
        let a = reconcile(&inv, Some(&cat), None);
        let b = reconcile(&inv, Some(&cat), None);
        assert_eq!(a.total_missing, b.total_missing);
        assert_eq!(a.completeness_percent, b.completeness_percent);
        assert_eq!(a.missing_episodes, b.missing_episodes);
    }
}
