use crate::{Error, Result};
use serde::{Deserialize, Serialize};

pub const EXPECTED_QUESTION_COUNT: usize = 5;
pub const EXPECTED_OPTION_COUNT: usize = 4;

/// Body of `POST /generate-quiz`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizRequest {
    pub text: String,
}

/// One multiple-choice question. `correct_answer` is the full text of the
/// correct option, not an index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, selected: &str) -> bool {
        // Exact match, case-sensitive, no trimming
        selected == self.correct_answer
    }
}

/// The wire shape returned by the server and expected from the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub quiz: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.quiz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiz.is_empty()
    }

    /// Checks that every `correct_answer` is actually one of its question's
    /// options. Deviating question/option counts are tolerated (the client
    /// owns the empty-quiz message) but logged.
    pub fn validate(&self) -> Result<()> {
        if self.quiz.len() != EXPECTED_QUESTION_COUNT {
            tracing::warn!(
                "Model returned {} questions instead of {}",
                self.quiz.len(),
                EXPECTED_QUESTION_COUNT
            );
        }

        for (index, question) in self.quiz.iter().enumerate() {
            if question.options.len() != EXPECTED_OPTION_COUNT {
                tracing::warn!(
                    "Question {} has {} options instead of {}",
                    index,
                    question.options.len(),
                    EXPECTED_OPTION_COUNT
                );
            }

            if !question.options.contains(&question.correct_answer) {
                return Err(Error::model_output(format!(
                    "Question {} has a correct_answer that matches none of its options",
                    index
                )));
            }
        }

        Ok(())
    }
}
