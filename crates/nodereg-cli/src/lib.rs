//! Command-line front end for the node registry.

pub mod cli;

pub use cli::{execute, Action, Cli, CliConfig, Command, CommandOutput, ValidationChoice};
