//! End-to-end duplicate detection: scan real directories, group, pick the
//! canonical file.

use media_assistant::core::{duplicates, scanner};
use media_assistant::models::media::MediaKind;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_same_movie_in_two_directories_forms_one_group() {
    let dir_a = TempDir::new().unwrap();
    let dir_b = TempDir::new().unwrap();

    // Same movie, scene-style name vs plain name, different sizes
    fs::write(
        dir_a.path().join("Movie.Title.2020.1080p.BluRay.x264-GROUP.mkv"),
        vec![0u8; 900],
    )
    .unwrap();
    fs::write(dir_b.path().join("Movie Title (2020).mkv"), vec![0u8; 4500]).unwrap();

    let dirs = vec![dir_a.path().to_path_buf(), dir_b.path().to_path_buf()];
    let outcome = scanner::scan_directories(&dirs, MediaKind::Movies);
    assert_eq!(outcome.records.len(), 2);

    let groups = duplicates::group_duplicates(&outcome.records);
    assert_eq!(groups.len(), 1);

    let group = &groups[0];
    assert_eq!(group.group_key, "movie title_2020");
    assert_eq!(group.members.len(), 2);
    assert_eq!(group.canonical.size_bytes, Some(4500));
    assert!(group
        .canonical
        .path
        .to_string_lossy()
        .contains("Movie Title (2020)"));
    assert_eq!(group.wasted_bytes(), 900);
}

#[test]
fn test_distinct_movies_do_not_group() {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("First.Film.2020.mkv"), "a").unwrap();
    fs::write(dir.path().join("Second.Film.2020.mkv"), "b").unwrap();
    fs::write(dir.path().join("First.Film.2015.mkv"), "c").unwrap();

    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::Movies);
    let groups = duplicates::group_duplicates(&outcome.records);

    assert!(groups.is_empty());
}

#[test]
fn test_report_ranked_by_wasted_space() {
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("Small.Dupe.2020.mkv"), vec![0u8; 100]).unwrap();
    fs::write(dir.path().join("Small Dupe (2020).mkv"), vec![0u8; 90]).unwrap();
    fs::write(dir.path().join("Big.Dupe.2019.mkv"), vec![0u8; 5000]).unwrap();
    fs::write(dir.path().join("Big Dupe (2019).mkv"), vec![0u8; 4000]).unwrap();

    let outcome = scanner::scan_directories(&[dir.path().to_path_buf()], MediaKind::Movies);
    let groups = duplicates::group_duplicates(&outcome.records);

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group_key, "big dupe_2019");
    assert_eq!(groups[0].wasted_bytes(), 4000);
    assert_eq!(groups[1].wasted_bytes(), 90);

    let stats = duplicates::duplicate_stats(&groups);
    assert_eq!(stats.groups, 2);
    assert_eq!(stats.removable_files, 2);
    assert_eq!(stats.reclaimable_bytes, 4090);
}
