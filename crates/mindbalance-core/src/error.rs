use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("record not found: {0}")]
    NotFound(Uuid),

    #[error("record id is empty")]
    MissingId,

    #[error("mood must be between 1 and 5, got {0}")]
    InvalidMood(u8),

    #[error("gratitude entry is empty")]
    EmptyContent,

    #[error("invalid date or timestamp: {0}")]
    InvalidTimestamp(#[from] jiff::Error),
}
