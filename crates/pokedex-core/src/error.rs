//! Error types for catalogue fetches.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching from a catalogue.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure (connection, timeout, TLS).
    #[error("Network error for {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// The response body did not have the expected shape.
    #[error("Malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchErrorKind {
    /// Transport or HTTP-level failure.
    Network,
    /// Response shape mismatch.
    Decode,
}

impl FetchError {
    /// Create a network error with URL context.
    pub fn network(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            url: url.into(),
            source: source.into(),
        }
    }

    /// Create a decode error with URL context.
    pub fn decode(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            url: url.into(),
            source,
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } | Self::Status { .. } => FetchErrorKind::Network,
            Self::Decode { .. } => FetchErrorKind::Decode,
        }
    }

    /// Check if this is a transport-level failure.
    pub fn is_network(&self) -> bool {
        self.kind() == FetchErrorKind::Network
    }

    /// Check if this is a response shape mismatch.
    pub fn is_decode(&self) -> bool {
        self.kind() == FetchErrorKind::Decode
    }

    /// URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_kinds() {
        let err = FetchError::network(
            "https://example.test/a",
            std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out"),
        );
        assert!(err.is_network());
        assert_eq!(err.url(), "https://example.test/a");

        let err = FetchError::Status {
            url: "https://example.test/b".to_string(),
            status: 503,
        };
        assert_eq!(err.kind(), FetchErrorKind::Network);
        assert_eq!(err.to_string(), "HTTP 503 for https://example.test/b");

        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = FetchError::decode("https://example.test/c", source);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("Malformed response"));
    }
}
