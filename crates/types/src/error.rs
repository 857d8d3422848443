// Path: crates/types/src/error.rs
//! Core error types for the blink action client.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors produced while validating a fetched descriptor against the
/// expected shape. The descriptor is untrusted; these errors name the
/// offending field path so the report is deterministic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was absent.
    #[error("Missing required field `{0}`")]
    MissingField(String),
    /// A field was present but carried the wrong JSON type.
    #[error("Field `{path}` must be a {expected}")]
    WrongType {
        /// Path of the offending field, e.g. `links.actions[2].href`.
        path: String,
        /// The JSON type the field is required to have.
        expected: &'static str,
    },
    /// A field that must carry text was present but empty.
    #[error("Field `{0}` must not be empty")]
    EmptyField(String),
    /// A shape mismatch not caught by the ordered field checks.
    #[error("Descriptor shape mismatch: {0}")]
    Malformed(String),
}

impl ErrorCode for ValidationError {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "VALIDATION_MISSING_FIELD",
            Self::WrongType { .. } => "VALIDATION_WRONG_TYPE",
            Self::EmptyField(_) => "VALIDATION_EMPTY_FIELD",
            Self::Malformed(_) => "VALIDATION_MALFORMED",
        }
    }
}

/// Errors produced while binding user input into an endpoint template.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A declared parameter's `{name}` placeholder does not occur in the
    /// endpoint template. This is a descriptor inconsistency, not a user
    /// input problem.
    #[error("Placeholder `{{{name}}}` does not occur in template `{template}`")]
    PlaceholderMissing {
        /// The declared parameter name.
        name: String,
        /// The endpoint template that was searched.
        template: String,
    },
    /// The bound endpoint could not be resolved into an absolute URL.
    #[error("Cannot resolve endpoint `{endpoint}` against `{base}`: {reason}")]
    InvalidEndpoint {
        /// The endpoint string after substitution.
        endpoint: String,
        /// The base URL it was resolved against.
        base: String,
        /// The underlying URL parse failure.
        reason: String,
    },
}

impl ErrorCode for TemplateError {
    fn code(&self) -> &'static str {
        match self {
            Self::PlaceholderMissing { .. } => "TEMPLATE_PLACEHOLDER_MISSING",
            Self::InvalidEndpoint { .. } => "TEMPLATE_INVALID_ENDPOINT",
        }
    }
}

/// The top-level error type for every client operation.
///
/// All four variants are recovered at the boundary of the operation that
/// produced them and rendered as a single user-displayable message; none
/// crash the process.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport failed or the response status was not in the success
    /// range.
    #[error("Network error: {0}")]
    Network(String),
    /// The response body was not valid JSON, or was JSON of the wrong shape
    /// for a non-descriptor payload.
    #[error("Decode error: {0}")]
    Decode(String),
    /// The response body was well-formed JSON but not descriptor-shaped.
    #[error("Invalid action descriptor: {0}")]
    Validation(#[from] ValidationError),
    /// The descriptor declared a parameter inconsistently with its template.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}

impl ErrorCode for ClientError {
    fn code(&self) -> &'static str {
        match self {
            Self::Network(_) => "ACTION_NETWORK_ERROR",
            Self::Decode(_) => "ACTION_DECODE_ERROR",
            Self::Validation(_) => "ACTION_VALIDATION_ERROR",
            Self::Template(_) => "ACTION_TEMPLATE_ERROR",
        }
    }
}
