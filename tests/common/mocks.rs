use async_trait::async_trait;
use quizit_rust::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing. Records every prompt it receives and replays
/// canned completions in order.
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Handle onto the recorded prompts, usable after the client has been
    /// boxed into the generator.
    pub fn prompts_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.prompts)
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

/// A well-formed five-question quiz in the exact wire shape the model is
/// instructed to produce.
pub fn five_question_quiz_json() -> String {
    let questions: Vec<String> = (1..=5)
        .map(|i| {
            format!(
                r#"{{"question":"Question {i}?","options":["A{i}","B{i}","C{i}","D{i}"],"correct_answer":"A{i}"}}"#
            )
        })
        .collect();
    format!(r#"{{"quiz":[{}]}}"#, questions.join(","))
}

pub fn fenced(raw: &str) -> String {
    format!("```json\n{}\n```", raw)
}
