//! Shared CLI error type and exit codes.

use std::fmt;

use crate::provider::FetchError;

/// Process exit codes for headless commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Bad arguments or unknown IDs
    Validation = 1,
    /// Filesystem or serialization failure
    Io = 2,
    /// Catalog fetch failed
    Fetch = 3,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error carrying the exit code it should terminate with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Bad input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// Filesystem or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Catalog fetch failure; the message leads with the failure kind.
    #[must_use]
    pub fn fetch(err: &FetchError) -> Self {
        Self {
            kind: ExitCode::Fetch,
            message: format!("{}: {}", err.kind(), err.message()),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        Self::fetch(&err)
    }
}

/// Result alias for CLI handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Pretty-prints a value as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize output to JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::validation("x").exit_code(), 1);
        assert_eq!(CliError::io("x").exit_code(), 2);
    }

    #[test]
    fn test_fetch_error_message() {
        let err = CliError::from(FetchError::Server("bridge returned HTTP 500".to_string()));
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "ServerError: bridge returned HTTP 500");
    }
}
