//! CLI module
//!
//! Command-line interface for issuing calls against a Mints instance.
//!
//! # Commands
//!
//! - `request` - Send one raw request and print the response body
//! - `visit` - Register a page visit

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
