//! Integration tests for filename identity parsing.
//!
//! Tests cover:
//! - Year and title extraction from scene-style names
//! - Season/episode pattern cascade
//! - Normalization invariants

use media_assistant::core::identity::{normalize_title, parse, parse_movie, parse_tv};
use media_assistant::models::media::MediaKind;
use std::path::Path;

#[test]
fn test_movie_and_plain_name_share_group_key() {
    let scene = parse_movie(Path::new("Movie.Title.2020.1080p.BluRay.x264-GROUP.mkv"));
    let plain = parse_movie(Path::new("Movie Title (2020).mkv"));

    assert_eq!(scene.group_key(), "movie title_2020");
    assert_eq!(plain.group_key(), "movie title_2020");
}

#[test]
fn test_season_episode_patterns() {
    let sxxeyy = parse_tv(Path::new("Show.Name.S02E05.mkv"));
    assert_eq!((sxxeyy.season, sxxeyy.episode), (Some(2), Some(5)));

    let nxnn = parse_tv(Path::new("Show Name - 2x05.mkv"));
    assert_eq!((nxnn.season, nxnn.episode), (Some(2), Some(5)));

    let season_dir = parse_tv(Path::new("Show Name/Season 3/ep.mkv"));
    assert_eq!((season_dir.season, season_dir.episode), (Some(3), None));
}

#[test]
fn test_parse_dispatches_on_kind() {
    let movie = parse(Path::new("Thing.2019.S01E01.mkv"), MediaKind::Movies);
    assert!(movie.season.is_none());

    let tv = parse(Path::new("Thing.2019.S01E01.mkv"), MediaKind::TvShows);
    assert_eq!(tv.season, Some(1));
}

#[test]
fn test_parse_never_fails() {
    for name in ["", ".", "....mkv", "???.mkv", "no_extension"] {
        let id = parse_movie(Path::new(name));
        assert!(!id.normalized_title.is_empty());
    }
}

#[test]
fn test_normalization_idempotent() {
    for raw in [
        "Movie.Title.2020.1080p",
        "Some_Show__Name",
        "  spaced   out  ",
        "plain",
    ] {
        let once = normalize_title(raw);
        assert_eq!(normalize_title(&once), once);
    }
}

#[test]
fn test_normalized_title_is_lowercase_and_collapsed() {
    let id = parse_movie(Path::new("SOME_Loud.Movie...Name.2021.mkv"));
    assert_eq!(id.normalized_title, "some loud movie name");
    assert_eq!(id.title, "SOME Loud Movie Name");
}
