//! Concordia CLI library
//!
//! This library provides the command-line interface for the concordia
//! concordance builder.

pub mod args;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
