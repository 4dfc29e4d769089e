//! CLI command implementations.

pub mod duplicates;
pub mod missing;
pub mod search;
pub mod seasons;
