//! CLI errors and exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General error |
//! | 2 | Argument parsing failed (reported by clap) |
//! | 3 | Output could not be written |
//! | 4 | Invalid input or configuration |

use kuramoto_core::SimError;
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    /// Run completed
    Success = 0,
    /// Unspecified failure
    GeneralError = 1,
    /// Recording or stream could not be written
    OutputError = 3,
    /// Rejected K, initial values or configuration
    InvalidInput = 4,
}

impl From<CliExitCode> for i32 {
    fn from(code: CliExitCode) -> Self {
        code as i32
    }
}

/// Errors surfaced by the `kuramoto-cli` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Simulation rejected its input or failed while running
    /// Exit code: 4 for input errors, 3 for I/O, 1 otherwise
    #[error(transparent)]
    Simulation(#[from] SimError),

    /// Writing to stdout or the output directory failed
    /// Exit code: 3
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// General/unspecified error
    /// Exit code: 1
    #[error("{0}")]
    General(String),
}

impl CliError {
    /// Exit code for this error.
    #[inline]
    pub fn exit_code(&self) -> CliExitCode {
        match self {
            Self::Simulation(err) if err.is_input_error() => CliExitCode::InvalidInput,
            Self::Simulation(SimError::Io(_) | SimError::SerializationError(_)) => {
                CliExitCode::OutputError
            }
            Self::Simulation(_) => CliExitCode::GeneralError,
            Self::Output(_) => CliExitCode::OutputError,
            Self::General(_) => CliExitCode::GeneralError,
        }
    }
}
