//! Tool-call failures and the `{"error": ...}` envelope they serialize to.

use serde::Serialize;
use thiserror::Error;

use crate::platform::Platform;

/// Everything that can end a profile lookup early.
///
/// Backend failures are collapsed into one variant whatever their cause
/// (network, auth, quota, rejected actor input); callers cannot tell an
/// unreachable backend from one that returned nonsense.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Identifier absent or empty after normalization. No job is started.
    #[error("No {platform} {} provided", .platform.identifier_label())]
    MissingInput { platform: Platform },

    /// Job submission or dataset read failed.
    #[error("Error: {0:#}")]
    Backend(anyhow::Error),

    /// Job succeeded but produced nothing to select.
    #[error(
        "No {} found for {}: {identifier}",
        .platform.content_noun(),
        .platform.identifier_label()
    )]
    NoContentFound {
        platform: Platform,
        identifier: String,
    },
}

pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Wire shape of every failed tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.error }).to_string()
    }
}

impl FetchError {
    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::new(self.to_string())
    }

    pub fn to_envelope(&self) -> String {
        self.envelope().to_json()
    }
}
