//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Media kind enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movies,
    TvShows,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movies => write!(f, "movies"),
            MediaKind::TvShows => write!(f, "tvshows"),
        }
    }
}

/// Structured identity extracted from a filename/path.
///
/// Built once per file by the identity parser and never mutated afterwards.
/// `normalized_title` is lowercase, separator-collapsed and stripped of
/// quality/codec/release-group tokens; `title` keeps the original casing
/// for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaIdentity {
    /// Raw file name the identity was parsed from.
    pub raw_name: String,
    /// Display title (case preserved).
    pub title: String,
    /// Normalized title used for matching and grouping.
    pub normalized_title: String,
    /// Release year, if present in the filename.
    pub year: Option<u16>,
    /// Season number (TV shows).
    pub season: Option<u16>,
    /// Episode number (TV shows).
    pub episode: Option<u16>,
}

impl MediaIdentity {
    /// Grouping key for duplicate detection: normalized title plus year
    /// when one was parsed.
    pub fn group_key(&self) -> String {
        match self.year {
            Some(year) => format!("{}_{}", self.normalized_title, year),
            None => self.normalized_title.clone(),
        }
    }
}

/// A video file found during a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFileRecord {
    /// Full path to the file.
    pub path: PathBuf,
    /// Parsed identity.
    pub identity: MediaIdentity,
    /// File size in bytes. `None` when the metadata was unreadable.
    pub size_bytes: Option<u64>,
}

impl MediaFileRecord {
    /// Size with unreadable files counted as zero.
    pub fn size_or_zero(&self) -> u64 {
        self.size_bytes.unwrap_or(0)
    }
}

/// A search hit against a query title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// Parsed identity of the matched file.
    pub identity: MediaIdentity,
    /// Full path to the file.
    pub path: PathBuf,
    /// Similarity score against the query, in `[0, 1]`.
    pub confidence: f64,
    /// File size in bytes, if known.
    pub size_bytes: Option<u64>,
}

/// Season/episode structure of a show as reported by the catalog provider.
///
/// Specials (season 0) are filtered out before this struct is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowCatalog {
    /// Provider id of the show.
    pub tmdb_id: u64,
    /// Show title as known to the provider.
    pub title: String,
    /// Regular seasons.
    pub seasons: Vec<CatalogSeason>,
}

/// One season entry in a show catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSeason {
    /// Season number (>= 1).
    pub season_number: u16,
    /// Number of episodes the season is expected to have.
    pub episode_count: u16,
}
