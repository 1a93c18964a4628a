//! binrel CLI library.
//!
//! This library provides the core functionality for the binrel command-line
//! interface: definition file loading, configuration, command execution and
//! output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod definitions;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use definitions::Definitions;
pub use error::{CliError, Result};
pub use output::Formatter;
