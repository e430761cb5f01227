//! Cloak CLI library
//!
//! This library provides the command-line interface for the cloak text
//! transformation strategies.

pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};
