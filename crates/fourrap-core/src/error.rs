//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Duplicate entity: {0}")]
    Duplicate(String),
}

/// Draft generation errors. Never papered over with a default draft.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Draft generation is not configured")]
    NotConfigured,

    #[error("Generation request failed: {0}")]
    Transport(String),

    #[error("Generation API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Generation API returned no text")]
    EmptyResponse,

    #[error("Generation API returned malformed content: {0}")]
    MalformedResponse(String),
}
