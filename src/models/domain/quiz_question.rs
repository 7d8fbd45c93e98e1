use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{AppError, AppResult};

/// Number of answer options every generated question must carry.
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question as returned by the question-generation
/// collaborator. `correct` holds the full text of the correct option, not a
/// label, so grading is verbatim string equality.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl QuizQuestion {
    /// Checks the structural invariant: exactly four distinct options, with
    /// `correct` one of them. Options are opaque strings; no trimming or
    /// case folding is applied.
    pub fn validate_shape(&self) -> AppResult<()> {
        if self.options.len() != OPTION_COUNT {
            return Err(AppError::InvalidResponseShape(format!(
                "question has {} options, expected {}",
                self.options.len(),
                OPTION_COUNT
            )));
        }

        let unique: HashSet<&str> = self.options.iter().map(String::as_str).collect();
        if unique.len() != OPTION_COUNT {
            return Err(AppError::InvalidResponseShape(
                "question options are not unique".to_string(),
            ));
        }

        if !self.options.contains(&self.correct) {
            return Err(AppError::InvalidResponseShape(
                "correct answer is not one of the options".to_string(),
            ));
        }

        Ok(())
    }
}
