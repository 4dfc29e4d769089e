//! Duplicate movie grouping.
//!
//! Buckets scanned records by identity key (normalized title plus year)
//! and keeps only buckets with two or more members. The canonical member
//! of each group is the largest file; raw byte size stands in for quality.

use crate::models::media::MediaFileRecord;
use crate::models::report::{DuplicateGroup, DuplicateStats};
use std::collections::HashMap;

/// Group movie records into duplicate sets.
///
/// Returned groups are ordered by wasted space descending, so the report
/// surfaces the biggest wins first. Member order within a group is the
/// order records were encountered.
pub fn group_duplicates(records: &[MediaFileRecord]) -> Vec<DuplicateGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, Vec<MediaFileRecord>)> = Vec::new();

    for record in records {
        let key = record.identity.group_key();
        match index.get(&key) {
            Some(&i) => buckets[i].1.push(record.clone()),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![record.clone()]));
            }
        }
    }

    let mut groups: Vec<DuplicateGroup> = buckets
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|(group_key, members)| {
            let canonical = select_canonical(&members).clone();
            DuplicateGroup {
                group_key,
                members,
                canonical,
            }
        })
        .collect();

    groups.sort_by(|a, b| b.wasted_bytes().cmp(&a.wasted_bytes()));

    tracing::debug!("Found {} duplicate groups in {} records", groups.len(), records.len());

    groups
}

/// Pick the member to keep: largest by size, ties broken by first-seen.
fn select_canonical(members: &[MediaFileRecord]) -> &MediaFileRecord {
    let mut best = &members[0];
    for member in &members[1..] {
        if member.size_or_zero() > best.size_or_zero() {
            best = member;
        }
    }
    best
}

/// Aggregate statistics over a set of groups.
pub fn duplicate_stats(groups: &[DuplicateGroup]) -> DuplicateStats {
    DuplicateStats {
        groups: groups.len(),
        removable_files: groups.iter().map(|g| g.members.len() - 1).sum(),
        reclaimable_bytes: groups.iter().map(|g| g.wasted_bytes()).sum(),
    }
}
