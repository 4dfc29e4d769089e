//! Filename identity parser.
//!
//! Turns a raw filename/path into a normalized `MediaIdentity` (title, year,
//! season, episode). Parsing is best-effort and never fails: unparseable
//! input still yields an identity with `None` fields so the file stays
//! visible downstream as a low-confidence match.

use crate::models::media::{MediaIdentity, MediaKind};
use std::path::Path;

/// Parse a file path into a media identity.
pub fn parse(path: &Path, kind: MediaKind) -> MediaIdentity {
    match kind {
        MediaKind::Movies => parse_movie(path),
        MediaKind::TvShows => parse_tv(path),
    }
}

/// Parse a movie file path.
pub fn parse_movie(path: &Path) -> MediaIdentity {
    let raw_name = file_name(path);
    let stem = file_stem(path);

    let (year, year_offset) = extract_year(&stem);

    // Everything from the year token onward is release metadata, not title.
    let head = match year_offset {
        Some(offset) => &stem[..offset],
        None => stem.as_str(),
    };

    let mut title = clean_title(head);
    if title.is_empty() {
        title = collapse_separators(&stem);
    }
    if title.is_empty() {
        title = "Unknown".to_string();
    }

    MediaIdentity {
        raw_name,
        normalized_title: title.to_lowercase(),
        title,
        year,
        season: None,
        episode: None,
    }
}

/// Parse a TV episode file path.
///
/// The show name is preferred from the nearest ancestor directory that is
/// not itself a `Season N` directory; the filename is only used as a
/// fallback.
pub fn parse_tv(path: &Path) -> MediaIdentity {
    let raw_name = file_name(path);
    let stem = file_stem(path);

    let (mut season, episode) = extract_season_episode(&raw_name);

    // Recover the season from a "Season N" directory when the filename
    // carries no pattern.
    if season.is_none() {
        season = season_from_ancestors(path);
    }

    let (year, _) = extract_year(&stem);

    let mut title = show_name_from_ancestors(path)
        .unwrap_or_else(|| show_name_from_filename(&stem));
    if title.is_empty() {
        title = "Unknown".to_string();
    }

    MediaIdentity {
        raw_name,
        normalized_title: title.to_lowercase(),
        title,
        year,
        season,
        episode,
    }
}

/// Normalize a title string for matching: lowercase plus separator collapse.
/// Idempotent.
pub fn normalize_title(s: &str) -> String {
    collapse_separators(s).to_lowercase()
}

/// Collapse dots, underscores, dashes-between-words handling and whitespace
/// runs into single spaces.
fn collapse_separators(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true;
    for c in s.chars() {
        let mapped = if c == '.' || c == '_' || c.is_whitespace() {
            ' '
        } else {
            c
        };
        if mapped == ' ' {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(mapped);
            last_was_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Extract a release year (19xx/20xx, optionally parenthesized) and the
/// byte offset where the year token starts.
fn extract_year(name: &str) -> (Option<u16>, Option<usize>) {
    if let Ok(re) = regex::Regex::new(r"[\(\[]?\b((?:19|20)\d{2})\b[\)\]]?") {
        if let Some(caps) = re.captures(name) {
            let year = caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok());
            let offset = caps.get(0).map(|m| m.start());
            return (year, offset);
        }
    }
    (None, None)
}

/// Title cleanup cascade: edition markers, then the first quality/source/
/// codec/audio token and everything after it, then release-group markers.
fn clean_title(name: &str) -> String {
    let mut name = name.to_string();

    // Edition/cut markers anywhere in the name
    if let Ok(re) = regex::Regex::new(
        r"(?i)\b(REPACK|PROPER|REAL|LIMITED|UNRATED|EXTENDED|REMASTERED|DIRECTORS?[ ._]?CUT|DC)\b",
    ) {
        name = re.replace_all(&name, "").to_string();
    }

    // First quality/source/codec/audio token truncates the rest
    if let Ok(re) = regex::Regex::new(
        r"(?i)\b(480p|720p|1080p|2160p|4K|HDR|BluRay|BRRip|BDRip|DVDRip|WEB-?DL|WEBRip|HDTV|CAM|x264|x265|H[ .]?264|H[ .]?265|HEVC|DivX|XviD|AC3|DTS|AAC|MP3)\b.*",
    ) {
        name = re.replace(&name, "").to_string();
    }

    // Release groups in brackets/braces or as a trailing dash suffix
    if let Ok(re) = regex::Regex::new(r"\[[^\]]*\]|\{[^}]*\}") {
        name = re.replace_all(&name, "").to_string();
    }
    if let Ok(re) = regex::Regex::new(r"-\w+$") {
        name = re.replace(&name, "").to_string();
    }

    collapse_separators(&name)
}

/// Extract season/episode numbers from a filename.
///
/// Patterns are tried in fixed order, first match wins.
fn extract_season_episode(filename: &str) -> (Option<u16>, Option<u16>) {
    let patterns = [
        r"(?i)s(\d{1,2})\s?e(\d{1,3})",          // S01E01
        r"(\d{1,2})x(\d{2,3})",                  // 1x01
        r"(?i)season (\d{1,2}) episode (\d{1,3})", // Season 1 Episode 1
        r"(?i)season (\d{1,2})episode (\d{1,3})",  // Season 1Episode 1
    ];

    for pattern in patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(filename) {
                let season = caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok());
                let episode = caps.get(2).and_then(|m| m.as_str().parse::<u16>().ok());
                if season.is_some() || episode.is_some() {
                    return (season, episode);
                }
            }
        }
    }

    (None, None)
}

/// Check if a directory name is a season directory ("Season N").
fn is_season_directory(name: &str) -> bool {
    regex::Regex::new(r"(?i)^season \d+$")
        .map(|re| re.is_match(name))
        .unwrap_or(false)
}

/// Look for a "Season N" component anywhere in the containing directories.
fn season_from_ancestors(path: &Path) -> Option<u16> {
    let parent = path.parent()?;
    let re = regex::Regex::new(r"(?i)season (\d+)").ok()?;
    for component in parent.components() {
        if let std::path::Component::Normal(name) = component {
            if let Some(caps) = re.captures(&name.to_string_lossy()) {
                if let Some(season) = caps.get(1).and_then(|m| m.as_str().parse::<u16>().ok()) {
                    return Some(season);
                }
            }
        }
    }
    None
}

/// Find the nearest ancestor directory that is not a season directory.
fn show_name_from_ancestors(path: &Path) -> Option<String> {
    let parent = path.parent()?;
    for component in parent.components().rev() {
        if let std::path::Component::Normal(name) = component {
            let name = name.to_string_lossy();
            if !is_season_directory(&name) {
                let collapsed = collapse_separators(&name);
                if !collapsed.is_empty() {
                    return Some(collapsed);
                }
            }
        }
    }
    None
}

/// Fallback: derive the show name from the filename itself by stripping
/// the season/episode token and everything after it.
fn show_name_from_filename(stem: &str) -> String {
    let mut name = stem.to_string();
    if let Ok(re) = regex::Regex::new(r"(?i)s\d{1,2}\s?e\d{1,3}.*|\d{1,2}x\d{2,3}.*|season \d{1,2}.*") {
        name = re.replace(&name, "").to_string();
    }
    // Trailing junk left over from " - " style separators
    let name = name.trim_end_matches(['-', ' ', '.', '_']);
    collapse_separators(name)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
