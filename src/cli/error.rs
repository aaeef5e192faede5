//! CLI-level errors

use thiserror::Error;

/// Errors raised while producing output.
/// None of them change the exit status; see [`CliError::exit_code`].
#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// The program always terminates successfully, write failures included.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Output(_) => crate::exitcode::OK,
        }
    }
}
