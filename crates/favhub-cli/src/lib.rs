//! # favhub-cli
//!
//! Command-line presentation layer for FavHub: clap command definitions,
//! table/JSON output, and a console event sink that shows status
//! notices.

pub mod commands;
pub mod output;
pub mod sink;

pub use commands::{Cli, Commands};
