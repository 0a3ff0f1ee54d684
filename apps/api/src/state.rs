use std::sync::Arc;

use crate::scoring::scorer::CandidateScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable scorer. Default: HeuristicScorer built from the scoring config.
    pub scorer: Arc<dyn CandidateScorer>,
}
