//! Error types for concierge.

pub mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Primary error type for all concierge operations.
///
/// Only the remote path and configuration loading produce these;
/// [`ResponseResolver::resolve`](crate::resolver::ResponseResolver::resolve)
/// absorbs them into a fallback reply.
#[derive(Error, Debug)]
pub enum ConciergeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ConciergeError {
    /// Create an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Classify this error into the resolver's failure taxonomy.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) | Self::Timeout(_) => FailureKind::TransportFailure,
            Self::Api { .. } => FailureKind::ProtocolFailure,
            Self::MalformedResponse(_) | Self::Serialization(_) => {
                FailureKind::MalformedResponse
            }
            Self::Configuration(_) | Self::Io(_) | Self::Toml(_) => {
                FailureKind::ConfigurationAbsent
            }
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConciergeError>;
