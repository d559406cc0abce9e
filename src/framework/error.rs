//! # Framework Errors
//!
//! This module defines the common error types used throughout the resource framework.
//! By centralizing error definitions, we ensure every entity kind reports failures
//! the same way.
//!
//! None of these errors cross the public fetch operations: they are absorbed into
//! `None` / empty results and handed to the [`DiagnosticSink`](super::DiagnosticSink).

/// Why a decoded JSON value is not a valid entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Expected a JSON object")]
    NotAnObject,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Field {field} must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Field {field} must hold {expected} entries, got {found}")]
    WrongArity {
        field: &'static str,
        expected: &'static str,
        found: usize,
    },
    #[error("Unknown nationality: {0}")]
    UnknownNationality(String),
}

/// Failures of a single remote retrieval.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected status: {0}")]
    Status(u16),
    #[error("Response body is not valid JSON: {0}")]
    Decode(String),
    #[error("Expected a JSON array")]
    NotAList,
    #[error("Invalid payload: {0}")]
    Invalid(#[from] ValidationError),
    #[error("Batch aborted: {0}")]
    BatchAborted(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(e.to_string())
    }
}

/// Errors raised while building a [`CatalogSystem`](crate::lifecycle::CatalogSystem).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
