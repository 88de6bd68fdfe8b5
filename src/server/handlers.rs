use super::types::{ErrorResponse, GenerateQuizRequest, StatusResponse};
use crate::quiz::{Quiz, QuizGenerator};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

pub const MISSING_TEXT_ERROR: &str = "Input text is required to generate the quiz.";
pub const UPSTREAM_ERROR: &str = "An error occurred while connecting to the AI model or parsing \
     the output. Ensure the text is sufficiently long and contains relevant content.";

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<QuizGenerator>,
}

/// Liveness probe; also documents the quiz endpoint.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "OK".to_string(),
        message: "QuizIt AI Server is running!".to_string(),
        api_endpoint: "POST /generate-quiz - Send text here to generate a quiz.".to_string(),
    })
}

pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<Json<Quiz>, (StatusCode, Json<ErrorResponse>)> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(MISSING_TEXT_ERROR)),
            ));
        }
    };

    info!("Received quiz generation request ({} chars)", text.len());

    match state.generator.generate(text).await {
        Ok(quiz) => {
            info!("Successfully generated quiz with {} questions", quiz.len());
            Ok(Json(quiz))
        }
        Err(e) => {
            error!("Failed to generate quiz: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(UPSTREAM_ERROR, e.to_string())),
            ))
        }
    }
}
