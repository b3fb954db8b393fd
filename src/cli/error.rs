//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(d) => match d {
                    DomainError::BaseTooSmall(_) | DomainError::UnsupportedBase(_) => {
                        crate::exitcode::USAGE
                    }
                    DomainError::NotANumber { .. }
                    | DomainError::LiteralTooLong { .. }
                    | DomainError::MissingBinaryMarker(_)
                    | DomainError::OutOfRange(_) => crate::exitcode::DATAERR,
                },
            },
        }
    }

    /// Errors that end the run with only an exit status, no diagnostic.
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            CliError::Application(ApplicationError::Domain(DomainError::BaseTooSmall(_)))
        )
    }
}
