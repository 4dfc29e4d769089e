//! Title similarity scoring.
//!
//! Scores are in `[0, 1]` and drive search matching: exact (normalized)
//! equality scores 1.0, substring containment 0.9, anything else falls
//! through to a longest-common-subsequence ratio.

/// Search mode, fixing the confidence threshold a match must reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Accepts scores >= 0.6.
    Fuzzy,
    /// Accepts scores >= 0.9.
    Strict,
}

impl MatchMode {
    /// Minimum confidence a match must reach in this mode.
    pub fn threshold(self) -> f64 {
        match self {
            MatchMode::Fuzzy => 0.6,
            MatchMode::Strict => 0.9,
        }
    }
}

/// Compute the similarity between two title strings.
pub fn score(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.9;
    }

    lcs_ratio(&a, &b)
}

/// Ratio of the longest common subsequence over the combined length:
/// `2 * lcs / (len_a + len_b)`. More shared character runs means a higher
/// score; equal strings would score 1.0.
fn lcs_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in &a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[b.len()];
    2.0 * lcs as f64 / (a.len() + b.len()) as f64
}
