//! Collection scanner.
//!
//! Walks library directories recursively, keeps files with a recognized
//! video extension and attaches a parsed identity to each. Traversal order
//! is whatever the filesystem yields; consumers must not rely on it.

use crate::core::identity;
use crate::models::media::{MediaFileRecord, MediaKind};
use crate::utils::fs::is_video_file;
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of scanning one or more directories.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Video files found.
    pub records: Vec<MediaFileRecord>,
    /// Directories that were missing or unreadable and got skipped.
    pub skipped_dirs: Vec<PathBuf>,
    /// Total files visited.
    pub total_files_scanned: usize,
    /// Total directories visited.
    pub total_dirs_scanned: usize,
}

/// Scan several library directories.
///
/// A missing directory is logged and skipped; it never fails the batch.
pub fn scan_directories(directories: &[PathBuf], kind: MediaKind) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for dir in directories {
        match scan_directory(dir, kind) {
            Ok(partial) => {
                outcome.records.extend(partial.records);
                outcome.total_files_scanned += partial.total_files_scanned;
                outcome.total_dirs_scanned += partial.total_dirs_scanned;
            }
            Err(e) => {
                tracing::warn!("Skipping directory {}: {}", dir.display(), e);
                outcome.skipped_dirs.push(dir.clone());
            }
        }
    }

    tracing::info!(
        "Scanned {} files in {} directories: {} videos, {} directories skipped",
        outcome.total_files_scanned,
        outcome.total_dirs_scanned,
        outcome.records.len(),
        outcome.skipped_dirs.len()
    );

    outcome
}

/// Scan a single directory for video files.
pub fn scan_directory(path: &Path, kind: MediaKind) -> Result<ScanOutcome> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();

        if entry.file_type().is_dir() {
            outcome.total_dirs_scanned += 1;
        } else if entry.file_type().is_file() {
            outcome.total_files_scanned += 1;

            if is_video_file(entry_path) {
                outcome.records.push(create_record(entry_path, kind));
            }
        }
    }

    Ok(outcome)
}

/// Build a record for a video file. An unreadable size is kept as `None`
/// rather than dropping the file.
fn create_record(path: &Path, kind: MediaKind) -> MediaFileRecord {
    let size_bytes = match std::fs::metadata(path) {
        Ok(meta) => Some(meta.len()),
        Err(e) => {
            tracing::warn!("Could not read metadata for {}: {}", path.display(), e);
            None
        }
    };

    MediaFileRecord {
        path: path.to_path_buf(),
        identity: identity::parse(path, kind),
        size_bytes,
    }
}
