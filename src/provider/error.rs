//! Failure taxonomy for catalog fetches.

use std::fmt;
use thiserror::Error;

/// Structured failure returned by a [`ConfigProvider`](super::ConfigProvider).
///
/// Providers never panic past this boundary; every failure mode is a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Missing or invalid credential. The user must fix configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Network unreachable or timed out. The caller may retry.
    #[error("transport error: {0}")]
    Transport(String),
    /// The bridge answered with a failure status or an invalid payload.
    #[error("server error: {0}")]
    Server(String),
}

impl FetchError {
    /// Returns the failure kind without its message.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Configuration(_) => FailureKind::Configuration,
            Self::Transport(_) => FailureKind::Transport,
            Self::Server(_) => FailureKind::Server,
        }
    }

    /// Returns the human-readable detail.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration(msg) | Self::Transport(msg) | Self::Server(msg) => msg,
        }
    }

    /// Shorthand for `self.kind().is_retryable()`.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

/// Kind of a [`FetchError`], for callers that branch on the category only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// See [`FetchError::Configuration`]
    Configuration,
    /// See [`FetchError::Transport`]
    Transport,
    /// See [`FetchError::Server`]
    Server,
}

impl FailureKind {
    /// Only transport failures are worth retrying without a fix elsewhere.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Transport)
    }

    /// Stable label used in logs and CLI output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Configuration => "ConfigurationError",
            Self::Transport => "TransportError",
            Self::Server => "ServerError",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
