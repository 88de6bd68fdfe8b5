use crate::quiz::{Quiz, QuizQuestion, QuizRequest};
use tracing::{debug, info};

pub const EMPTY_INPUT_ERROR: &str = "Please enter text to generate a quiz.";
pub const EMPTY_QUIZ_ERROR: &str =
    "The AI model returned an empty or invalid quiz. Try again with a longer text.";

/// Lifecycle of one quiz attempt. Exactly one of these holds at any time;
/// `loading`/`error` are orthogonal overlays on `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// Answer arrived while no quiz was active; guarded, not an error.
    Ignored,
}

/// Client-side state for one quiz attempt. Lives for the duration of one
/// "tab"; `reset` is the only way out of `Finished`.
#[derive(Debug)]
pub struct QuizSession {
    questions: Option<Vec<QuizQuestion>>,
    current_index: usize,
    score: usize,
    state: SessionState,
    loading: bool,
    input_text: String,
    error: Option<String>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: None,
            current_index: 0,
            score: 0,
            state: SessionState::NotStarted,
            loading: false,
            input_text: String::new(),
            error: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_text = text.into();
    }

    pub fn total_questions(&self) -> usize {
        self.questions.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            SessionState::InProgress => self.questions.as_ref()?.get(self.current_index),
            _ => None,
        }
    }

    /// Validates the input and arms the loading flag. Returns the request to
    /// send, or `None` when no request should be issued: a submission is
    /// already in flight, or the input is empty/whitespace-only (which sets
    /// the local validation message instead).
    pub fn start_submission(&mut self) -> Option<QuizRequest> {
        if self.loading {
            debug!("Submission ignored: a request is already in flight");
            return None;
        }

        if self.input_text.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_ERROR.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        self.questions = None;
        self.current_index = 0;
        self.state = SessionState::NotStarted;

        Some(QuizRequest {
            text: self.input_text.clone(),
        })
    }

    /// Applies the outcome of the in-flight request. Clears `loading` on
    /// every path. Only a non-empty quiz starts the session; an empty quiz
    /// or a failure stores a message and stays in `NotStarted`, preserving
    /// the input text for a retry.
    pub fn complete_submission(&mut self, result: std::result::Result<Quiz, String>) {
        self.loading = false;

        match result {
            Ok(quiz) if !quiz.is_empty() => {
                info!("Quiz loaded with {} questions", quiz.len());
                self.questions = Some(quiz.quiz);
                self.current_index = 0;
                self.score = 0;
                self.state = SessionState::InProgress;
            }
            Ok(_) => {
                debug!("Quiz response was empty, staying in NotStarted");
                self.error = Some(EMPTY_QUIZ_ERROR.to_string());
            }
            Err(message) => {
                debug!("Submission failed: {}", message);
                self.error = Some(message);
            }
        }
    }

    /// Scores the selected option against the current question and advances.
    /// Answering the last question transitions to `Finished` instead of
    /// moving the index past the end.
    pub fn answer(&mut self, selected: &str) -> AnswerOutcome {
        if self.state != SessionState::InProgress {
            debug!("Answer ignored in state {:?}", self.state);
            return AnswerOutcome::Ignored;
        }

        let Some(questions) = self.questions.as_ref() else {
            return AnswerOutcome::Ignored;
        };
        let Some(question) = questions.get(self.current_index) else {
            return AnswerOutcome::Ignored;
        };

        let outcome = if question.is_correct(selected) {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        };

        let next_index = self.current_index + 1;
        if next_index < questions.len() {
            self.current_index = next_index;
        } else {
            info!("Quiz finished with score {}/{}", self.score, questions.len());
            self.state = SessionState::Finished;
        }

        outcome
    }

    /// Restores all defaults; the explicit replacement for reload-to-reset.
    pub fn reset(&mut self) {
        debug!("Resetting quiz session");
        *self = Self::new();
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
