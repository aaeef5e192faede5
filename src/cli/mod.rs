//! CLI layer: argument parsing and output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Action, Cli};
pub use commands::execute_command;
pub use error::{CliError, CliResult};
