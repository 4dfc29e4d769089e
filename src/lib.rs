//! Media Assistant Library
//!
//! A library for analyzing a personal video collection: duplicate movie
//! detection, fuzzy title search and missing-episode reconciliation via TMDB.

pub mod cli;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{Error, Result};
