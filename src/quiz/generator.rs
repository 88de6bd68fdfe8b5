use super::{Quiz, build_prompt};
use crate::{Result, llm::LlmClient};
use tracing::{debug, info};

/// Strips a wrapping markdown code fence from raw model output. Models are
/// told to answer with bare JSON but routinely fence it anyway.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);

    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Parses raw model output into a validated [`Quiz`].
pub fn parse_quiz(raw: &str) -> Result<Quiz> {
    let quiz: Quiz = serde_json::from_str(strip_code_fence(raw))?;
    quiz.validate()?;
    Ok(quiz)
}

/// Owns the model client and runs the prompt → completion → parse pipeline.
/// Constructed once at startup and shared across requests.
pub struct QuizGenerator {
    client: Box<dyn LlmClient>,
}

impl QuizGenerator {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, text: &str) -> Result<Quiz> {
        let prompt = build_prompt(text);
        debug!("Built quiz prompt ({} chars)", prompt.len());

        let raw = self.client.generate(&prompt).await?;
        let quiz = parse_quiz(&raw)?;

        info!("Generated quiz with {} questions", quiz.len());
        Ok(quiz)
    }
}
