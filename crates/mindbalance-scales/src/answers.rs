//! Answer vector checks run before anything is scored.

use crate::definition::ScaleDefinition;
use crate::error::ScaleError;

/// One slot per question; `None` while the question is unanswered.
pub type AnswerVector = Vec<Option<u32>>;

/// Check an answer vector against a definition and return the raw values.
///
/// Fails on a length mismatch, on any unanswered slot (reporting every
/// missing position), or on a value the question does not offer.
pub fn check_answers(
    definition: &ScaleDefinition,
    answers: &[Option<u32>],
) -> Result<Vec<u32>, ScaleError> {
    if answers.len() != definition.item_count() {
        return Err(ScaleError::AnswerCount {
            expected: definition.item_count(),
            actual: answers.len(),
        });
    }

    if !is_complete(answers) {
        let missing = answers
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_none())
            .map(|(i, _)| i)
            .collect();
        return Err(ScaleError::IncompleteAnswers { missing });
    }

    answers
        .iter()
        .enumerate()
        .map(|(index, answer)| {
            let value = answer.unwrap_or_default();
            if definition.options.permits(index, value) {
                Ok(value)
            } else {
                Err(ScaleError::InvalidAnswerValue { index, value })
            }
        })
        .collect()
}

/// Whether every slot has been answered.
pub fn is_complete(answers: &[Option<u32>]) -> bool {
    answers.iter().all(Option::is_some)
}
