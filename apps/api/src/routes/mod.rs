pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route("/api/ai/scoring", post(handlers::handle_score))
        .route("/api/ai/scoring/batch", post(handlers::handle_score_batch))
        .route("/api/ai/scoring/rubric", get(handlers::handle_rubric))
        .with_state(state)
}
