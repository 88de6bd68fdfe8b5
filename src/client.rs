use crate::{
    Error, Result,
    quiz::{Quiz, QuizRequest},
    session::QuizSession,
};
use serde::Deserialize;
use tracing::debug;

pub const GENERIC_SERVER_ERROR: &str = "Failed to generate quiz due to a server error.";

/// Error body shape returned by the server on 4xx/5xx.
#[derive(Debug, Default, Deserialize)]
struct ApiError {
    #[serde(default)]
    error: Option<String>,
}

/// Thin HTTP client for the quiz API.
pub struct QuizApi {
    http: reqwest::Client,
    base_url: String,
}

impl QuizApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Issues exactly one `POST /generate-quiz`. On a non-success status the
    /// body's `error` field becomes the failure message, with a generic
    /// fallback when the body is unreadable.
    pub async fn generate_quiz(&self, request: &QuizRequest) -> Result<Quiz> {
        let url = format!("{}/generate-quiz", self.base_url);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ApiError = response.json().await.unwrap_or_default();
            let message = body
                .error
                .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
            debug!("Quiz request failed with {}: {}", status, message);
            return Err(Error::llm(message));
        }

        Ok(response.json::<Quiz>().await?)
    }
}

/// Drives one full submission: local validation, the single network call, and
/// applying the outcome. All faults end up as a session error message and
/// `loading` is cleared on every exit path.
pub async fn run_submission(api: &QuizApi, session: &mut QuizSession) {
    let Some(request) = session.start_submission() else {
        return;
    };

    // Surface the server's own message verbatim; everything else gets the
    // full error display.
    let result = api.generate_quiz(&request).await.map_err(|e| match e {
        Error::Llm(message) => message,
        other => other.to_string(),
    });

    session.complete_submission(result);
}
