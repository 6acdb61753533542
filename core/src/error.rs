//! Error types for the help-request API harness.
//!
//! # Design
//! Every failure a test can hit maps to one variant, and every variant
//! carries enough context to diagnose the failure from the message alone:
//! an unconfigured mock names the exact lookup key, a status mismatch
//! carries both codes and the full body, a schema violation embeds the
//! underlying parse error and the raw body text.

use thiserror::Error;

/// Errors surfaced by transports, the validator, and the typed clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The mock transport had no response registered for the attempted
    /// method + endpoint. The key is the exact `"METHOD:/path"` looked up.
    #[error("no mock registered for request: {key}")]
    MockNotConfigured { key: String },

    /// The response status did not match the status the test expected.
    #[error("expected status {expected}, got {actual}; body: {body}")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        body: String,
    },

    /// The body was requested as JSON but holds no JSON value.
    #[error("response body is not JSON ({kind})")]
    BodyNotJson { kind: BodyKind },

    /// The body parsed as JSON but did not satisfy the expected schema.
    #[error("schema validation failed: {reason}; body: {body}")]
    SchemaViolation { reason: String, body: String },

    /// A request payload failed its own checks before any transport call.
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),

    /// An endpoint template was resolved without one of its placeholders.
    #[error("missing placeholder `{placeholder}` for endpoint template {template}")]
    MissingPlaceholder {
        placeholder: &'static str,
        template: &'static str,
    },

    /// The request payload could not be serialized to JSON.
    #[error("failed to serialize request payload: {0}")]
    Serialization(String),

    /// The live transport failed at the I/O level (never raised by mocks).
    #[error("transport error: {0}")]
    Transport(String),
}

/// What a response body actually holds, used in `BodyNotJson` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Text,
    Empty,
}

impl std::fmt::Display for BodyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodyKind::Json => write!(f, "json body"),
            BodyKind::Text => write!(f, "plain-text body"),
            BodyKind::Empty => write!(f, "empty body"),
        }
    }
}
