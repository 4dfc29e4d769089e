//! Core analysis logic modules.

pub mod duplicates;
pub mod identity;
pub mod matcher;
pub mod reconciler;
pub mod scanner;
pub mod similarity;
