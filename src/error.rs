//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! `main` uses `anyhow` for convenient startup error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - [`EnrichmentError`](crate::enrichment::EnrichmentError) stays module-local
//!   and converts into [`Error::Enrichment`] at the service boundary
//! - The API layer maps [`Error::Validation`] to 400 and everything else to
//!   500; callers only ever see a status code and a free-text message

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input: bad JSON body, non-integer path id, invalid
    /// pagination parameter
    #[error("validation error: {0}")]
    Validation(String),

    /// No row for the requested id
    #[error("not found: {0}")]
    NotFound(String),

    /// Database query or transaction failure
    #[error("database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// External song info lookup failure
    #[error("enrichment error: {0}")]
    Enrichment(#[from] crate::enrichment::EnrichmentError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
