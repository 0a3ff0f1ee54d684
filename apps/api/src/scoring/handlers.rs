//! Axum route handlers for the scoring API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::scoring::models::{
    lenient, lenient_or_default, CandidateProfile, JobRequirement, ScoreResult,
};
use crate::scoring::scorer::{rank_candidates, RankedCandidate, Rubric};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    /// Missing, null or non-object payload sections score as empty.
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub cv_data: CandidateProfile,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub job_requirements: JobRequirement,
    /// Accepted for compatibility; has no effect on scoring.
    #[serde(default)]
    pub scoring_criteria: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub scores: ScoreResult,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCandidate {
    #[serde(default, deserialize_with = "lenient")]
    pub candidate_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub cv_data: CandidateProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchScoreRequest {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub job_requirements: JobRequirement,
    #[serde(default)]
    pub candidates: Vec<BatchCandidate>,
    #[serde(default)]
    pub scoring_criteria: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    pub success: bool,
    pub rankings: Vec<RankedCandidate>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RubricResponse {
    pub success: bool,
    pub rubric: Rubric,
}

fn note_ignored_criteria(criteria: &Option<Value>) {
    if let Some(criteria) = criteria {
        debug!(%criteria, "scoringCriteria supplied but not used");
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/scoring
///
/// Scores one candidate against one job.
pub async fn handle_score(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(request) = payload?;
    note_ignored_criteria(&request.scoring_criteria);

    let scores = state
        .scorer
        .score(&request.cv_data, &request.job_requirements);

    debug!(
        technical = scores.breakdown.technical.score,
        experience = scores.breakdown.experience.score,
        education = scores.breakdown.education.score,
        languages = scores.breakdown.languages.score,
        projects = scores.breakdown.projects.score,
        "sub-scores computed"
    );
    info!(
        overall = scores.overall.score,
        grade = scores.overall.grade.as_str(),
        recommendation = scores.overall.recommendation.as_str(),
        risks = scores.ai_insights.risk_factors.len(),
        "candidate scored"
    );

    Ok(Json(ScoreResponse {
        success: true,
        scores,
        timestamp: Utc::now(),
    }))
}

/// POST /api/ai/scoring/batch
///
/// Scores several candidates against the same job and returns them ranked.
pub async fn handle_score_batch(
    State(state): State<AppState>,
    payload: Result<Json<BatchScoreRequest>, JsonRejection>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let Json(request) = payload?;

    if request.candidates.is_empty() {
        return Err(AppError::Validation(
            "candidates must contain at least one entry".to_string(),
        ));
    }
    note_ignored_criteria(&request.scoring_criteria);

    let rankings = rank_candidates(
        state.scorer.as_ref(),
        &request.job_requirements,
        request
            .candidates
            .iter()
            .map(|c| (c.candidate_id.clone(), &c.cv_data)),
    );

    info!(
        candidates = rankings.len(),
        top_score = rankings.first().map(|r| r.scores.overall.score),
        "candidates ranked"
    );

    Ok(Json(BatchScoreResponse {
        success: true,
        rankings,
        timestamp: Utc::now(),
    }))
}

/// GET /api/ai/scoring/rubric
pub async fn handle_rubric(State(state): State<AppState>) -> Json<RubricResponse> {
    Json(RubricResponse {
        success: true,
        rubric: state.scorer.rubric(),
    })
}
