//! Integration tests for search matching and season inventories over a
//! real directory tree, plus the index-collaborator contract.

use media_assistant::core::matcher::{self, CollectionIndex};
use media_assistant::core::scanner;
use media_assistant::core::similarity::MatchMode;
use media_assistant::models::media::{MediaFileRecord, MediaKind};
use std::fs;
use tempfile::TempDir;

fn build_tv_library() -> TempDir {
    let dir = TempDir::new().unwrap();

    let s1 = dir.path().join("Breaking Bad").join("Season 1");
    let s2 = dir.path().join("Breaking Bad").join("Season 2");
    fs::create_dir_all(&s1).unwrap();
    fs::create_dir_all(&s2).unwrap();
    fs::write(s1.join("Breaking.Bad.S01E01.mkv"), "a").unwrap();
    fs::write(s1.join("Breaking.Bad.S01E02.mkv"), "b").unwrap();
    fs::write(s2.join("Breaking.Bad.S02E01.mkv"), "c").unwrap();

    let other = dir.path().join("The Wire").join("Season 1");
    fs::create_dir_all(&other).unwrap();
    fs::write(other.join("The.Wire.S01E01.mkv"), "d").unwrap();

    dir
}

#[test]
fn test_search_tv_shows_filters_by_confidence() {
    let dir = build_tv_library();
    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::TvShows);

    let matches = matcher::search_tv_shows("Breaking Bad", &outcome.records, MatchMode::Fuzzy);
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|m| m.confidence >= 0.6));
    assert!(matches
        .iter()
        .all(|m| m.identity.normalized_title == "breaking bad"));
}

#[test]
fn test_matches_sorted_by_confidence_descending() {
    let dir = build_tv_library();
    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::TvShows);

    let matches = matcher::search_tv_shows("Breaking", &outcome.records, MatchMode::Fuzzy);
    for pair in matches.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
}

#[test]
fn test_season_inventory_from_scan() {
    let dir = build_tv_library();
    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::TvShows);

    let inventory = matcher::season_inventory("breaking bad", &outcome.records);
    assert!(inventory.found);
    assert_eq!(inventory.show_title, "Breaking Bad");
    assert_eq!(
        inventory.season_numbers().into_iter().collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(
        inventory.episode_numbers(1).into_iter().collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(inventory.total_episodes(), 3);
}

#[test]
fn test_season_inventory_not_found() {
    let dir = build_tv_library();
    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::TvShows);

    let inventory = matcher::season_inventory("Some Other Show Entirely", &outcome.records);
    assert!(!inventory.found);
    assert!(inventory.seasons.is_empty());
}

/// Minimal in-memory index: the matcher must behave identically whether
/// records come from a live scan or a cache.
struct InMemoryIndex {
    records: Vec<MediaFileRecord>,
}

impl CollectionIndex for InMemoryIndex {
    fn search_movies_by_title(&self, _title: &str) -> Vec<MediaFileRecord> {
        self.records.clone()
    }

    fn search_tv_shows_by_title(&self, _title: &str) -> Vec<MediaFileRecord> {
        self.records.clone()
    }
}

#[test]
fn test_index_candidates_match_like_scan_results() {
    let dir = build_tv_library();
    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::TvShows);

    let index = InMemoryIndex {
        records: outcome.records.clone(),
    };

    let from_scan = matcher::search_tv_shows("Breaking Bad", &outcome.records, MatchMode::Fuzzy);
    let candidates = index.search_tv_shows_by_title("Breaking Bad");
    let from_index = matcher::search_tv_shows("Breaking Bad", &candidates, MatchMode::Fuzzy);

    assert_eq!(from_scan.len(), from_index.len());
    for (a, b) in from_scan.iter().zip(from_index.iter()) {
        assert_eq!(a.path, b.path);
        assert_eq!(a.confidence, b.confidence);
    }
}
