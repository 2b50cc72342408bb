use crate::field::FieldKind;
use thiserror::Error;

/// A raw value that failed its field's format check.
///
/// Carries the rejected input verbatim so callers can echo it back.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {kind} format: {value:?} (expected {expected})")]
pub struct ValidationError {
    pub kind: FieldKind,
    pub value: String,
    pub expected: &'static str,
}

#[derive(Error, Debug)]
pub enum AddrBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AddrBookError>;
