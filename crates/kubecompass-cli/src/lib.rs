//! KubeCompass CLI library.
//!
//! This library provides the core functionality for the KubeCompass
//! command-line interface, including configuration management, the
//! interactive wizard, command execution, and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod store;
pub mod telemetry;
pub mod wizard;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
