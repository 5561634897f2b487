//! Typed errors for the transformation pipeline.

use std::fmt;

/// Errors surfaced by a transformation run.
///
/// All variants are recoverable at the presentation layer: they are shown as
/// a dismissible message with a remediation hint, never treated as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// No API key is configured and the endpoint is not a local server.
    MissingCredentials,
    /// Network or HTTP-level failure, including upstream error responses.
    TransportFailure(String),
    /// The backend answered with a success status but the body violated the
    /// chat-completion contract.
    MalformedResponse(String),
    /// A transformation is already in flight for this session.
    Busy,
}

impl TransformError {
    /// Short remediation hint shown next to the message.
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "Run 'tcheck configure' to set an API key.",
            Self::TransportFailure(_) => "Check connectivity and the endpoint URL, then retry.",
            Self::MalformedResponse(_) => {
                "Check that the backend speaks the OpenAI chat-completion format."
            }
            Self::Busy => "Wait for the current request to finish.",
        }
    }
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCredentials => {
                write!(f, "API key is missing. Please check settings.")
            }
            Self::TransportFailure(message) | Self::MalformedResponse(message) => {
                write!(f, "{message}")
            }
            Self::Busy => write!(f, "A transformation is already in progress"),
        }
    }
}

impl std::error::Error for TransformError {}
