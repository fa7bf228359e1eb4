//! Error types for the sources crate.
//!
//! A [`SourceError`] always means the source could not retrieve or
//! understand its page. "Found nothing" is never an error: sources return
//! an empty list for that case.

use thiserror::Error;

/// Errors that can occur while a source fetches or parses its page.
///
/// Every variant is recoverable from the aggregation point of view: the
/// resolver and the merger log it and move on to the next ranked source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The request could not be sent or the body could not be read.
    #[error("Transport error: {source_name} - {message}")]
    Transport {
        /// The source that failed
        source_name: String,
        /// The underlying error message
        message: String,
    },

    /// The fetch did not complete within the allotted time.
    #[error("Timeout: {source_name}")]
    Timeout {
        /// The source that timed out
        source_name: String,
    },

    /// The site answered with a non-success HTTP status.
    #[error("HTTP {status} from {source_name}")]
    HttpStatus {
        /// The source that returned the status
        source_name: String,
        /// The HTTP status code
        status: u16,
    },

    /// The page was retrieved but its structure could not be interpreted.
    #[error("Parse error: {source_name} - {message}")]
    Parse {
        /// The source whose page could not be parsed
        source_name: String,
        /// What went wrong
        message: String,
    },
}

impl SourceError {
    /// Builds a [`SourceError`] from a `reqwest` failure.
    pub fn from_reqwest(source_name: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout {
                source_name: source_name.to_string(),
            };
        }
        if let Some(status) = err.status() {
            return Self::HttpStatus {
                source_name: source_name.to_string(),
                status: status.as_u16(),
            };
        }
        Self::Transport {
            source_name: source_name.to_string(),
            message: err.to_string(),
        }
    }

    /// Builds a parse error.
    pub fn parse(source_name: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.to_string(),
            message: message.into(),
        }
    }

    /// Name of the source that produced this error.
    pub fn source_name(&self) -> &str {
        match self {
            Self::Transport { source_name, .. }
            | Self::Timeout { source_name }
            | Self::HttpStatus { source_name, .. }
            | Self::Parse { source_name, .. } => source_name,
        }
    }

    /// Whether the failure is likely to go away on its own.
    ///
    /// Timeouts, rate limiting (429) and server errors (5xx) are transient.
    /// A 403 from a site that blocks cloud IP ranges, or a page whose layout
    /// changed, is not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Transport { .. } => true,
            Self::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            Self::Parse { .. } => false,
        }
    }
}
