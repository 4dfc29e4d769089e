//! Command line interface modules.

pub mod args;
pub mod commands;
