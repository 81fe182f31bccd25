pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_question;
use crate::state::AppState;
use crate::summarize::handlers::handle_summarize;

pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/question", post(handle_question))
        .route("/summarize", post(handle_summarize))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}
