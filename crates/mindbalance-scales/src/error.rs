use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("unknown scale: {0}")]
    UnknownScale(String),

    #[error("incomplete answers: items {missing:?} are unanswered")]
    IncompleteAnswers { missing: Vec<usize> },

    #[error("invalid answer value {value} for item {index}")]
    InvalidAnswerValue { index: usize, value: u32 },

    #[error("expected {expected} answers, got {actual}")]
    AnswerCount { expected: usize, actual: usize },
}
