use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;
use crate::summarize::upload::read_pdf_upload;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /summarize
///
/// Accepts a multipart `file` field holding a PDF, extracts its text and
/// returns an LLM summary.
pub async fn handle_summarize(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SummaryResponse>, AppError> {
    let upload = read_pdf_upload(multipart?).await?;

    let text = state.extractor.extract(upload.bytes).await?;

    let summary = state.pipeline.summarize(&text).await?;

    Ok(Json(SummaryResponse { summary }))
}
