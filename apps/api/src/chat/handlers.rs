use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub response: String,
}

/// POST /question
///
/// Sends the caller's question through the question prompt and returns the
/// model's answer.
pub async fn handle_question(
    State(state): State<AppState>,
    request: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, AppError> {
    let Json(request) = request?;

    let question = request
        .question
        .filter(|q| !q.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Question is required.".to_string()))?;

    let response = state.pipeline.answer(&question).await?;

    Ok(Json(QuestionResponse { response }))
}
