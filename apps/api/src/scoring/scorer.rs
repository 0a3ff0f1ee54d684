//! Candidate scorer: trait-based so handlers only ever see `dyn CandidateScorer`.
//!
//! Default (and only) backend: `HeuristicScorer`, a pure weighted rubric.
//! `AppState` holds an `Arc<dyn CandidateScorer>` built at startup from config.

use serde::Serialize;

use crate::scoring::calculators::{
    education_score, experience_score, language_score, project_score, technical_score,
};
use crate::scoring::grading::{
    aggregate, Grade, Recommendation, SubScores, Weights, GRADE_THRESHOLDS,
    RECOMMENDATION_THRESHOLDS,
};
use crate::scoring::insights::{build_insights, next_steps};
use crate::scoring::models::{
    CandidateProfile, JobRequirement, OverallScore, ScoreBreakdown, ScoreResult,
};

// ────────────────────────────────────────────────────────────────────────────
// Policy
// ────────────────────────────────────────────────────────────────────────────

/// Tunable constants of the rubric. `Default` is the published rubric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pub weights: Weights,
    /// Points taken off match quality per risk factor.
    pub risk_penalty: u32,
    /// Salary expectation above `budget * salary_tolerance` is a risk.
    pub salary_tolerance: f64,
    /// More job changes than this is a risk.
    pub job_hop_limit: u32,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            risk_penalty: 10,
            salary_tolerance: 1.2,
            job_hop_limit: 3,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
pub trait CandidateScorer: Send + Sync {
    fn score(&self, profile: &CandidateProfile, job: &JobRequirement) -> ScoreResult;

    /// The rubric the backend applies, for display to callers.
    fn rubric(&self) -> Rubric;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicScorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted five-dimension rubric. Deterministic, no I/O, never fails.
#[derive(Debug, Clone, Default)]
pub struct HeuristicScorer {
    policy: ScoringPolicy,
}

impl HeuristicScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        debug_assert!(
            (policy.weights.sum() - 1.0).abs() < 1e-9,
            "dimension weights must sum to 1.0"
        );
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }
}

impl CandidateScorer for HeuristicScorer {
    fn score(&self, profile: &CandidateProfile, job: &JobRequirement) -> ScoreResult {
        score_candidate(profile, job, &self.policy)
    }

    fn rubric(&self) -> Rubric {
        Rubric::from_policy(&self.policy)
    }
}

/// Full pipeline: sub-scores → aggregate → grade/recommendation → insights.
pub fn score_candidate(
    profile: &CandidateProfile,
    job: &JobRequirement,
    policy: &ScoringPolicy,
) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        technical: technical_score(profile, job),
        experience: experience_score(profile, job),
        education: education_score(profile, job),
        languages: language_score(profile, job),
        projects: project_score(profile, job),
    };

    let sub_scores = SubScores {
        technical: breakdown.technical.score,
        experience: breakdown.experience.score,
        education: breakdown.education.score,
        language: breakdown.languages.score,
        project: breakdown.projects.score,
    };

    let overall = aggregate(&sub_scores, &policy.weights);
    let ai_insights = build_insights(&sub_scores, overall, profile, job, policy);

    ScoreResult {
        overall: OverallScore {
            score: overall,
            grade: Grade::from_score(overall as f64),
            recommendation: Recommendation::from_overall(overall),
        },
        breakdown,
        ai_insights,
        next_steps: next_steps(overall),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Batch ranking
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCandidate {
    pub candidate_id: Option<String>,
    pub rank: usize,
    pub scores: ScoreResult,
}

/// Scores every candidate against one job and orders them best first.
///
/// Ties on overall score fall back to match quality, then to input order.
pub fn rank_candidates<'a, I>(
    scorer: &dyn CandidateScorer,
    job: &JobRequirement,
    candidates: I,
) -> Vec<RankedCandidate>
where
    I: IntoIterator<Item = (Option<String>, &'a CandidateProfile)>,
{
    let mut scored: Vec<(Option<String>, ScoreResult)> = candidates
        .into_iter()
        .map(|(id, profile)| (id, scorer.score(profile, job)))
        .collect();

    // sort_by is stable, so equal keys keep submission order
    scored.sort_by(|(_, a), (_, b)| {
        b.overall
            .score
            .cmp(&a.overall.score)
            .then(b.ai_insights.match_quality.cmp(&a.ai_insights.match_quality))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (candidate_id, scores))| RankedCandidate {
            candidate_id,
            rank: i + 1,
            scores,
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Rubric disclosure
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBand {
    pub min_score: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBand {
    pub min_score: u32,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rubric {
    pub weights: Weights,
    pub grade_bands: Vec<GradeBand>,
    pub recommendation_bands: Vec<RecommendationBand>,
    pub risk_penalty: u32,
    pub salary_tolerance: f64,
    pub job_hop_limit: u32,
}

impl Rubric {
    pub fn from_policy(policy: &ScoringPolicy) -> Self {
        Self {
            weights: policy.weights,
            grade_bands: GRADE_THRESHOLDS
                .iter()
                .map(|&(min_score, grade)| GradeBand { min_score, grade })
                .collect(),
            recommendation_bands: RECOMMENDATION_THRESHOLDS
                .iter()
                .map(|&(min_score, recommendation)| RecommendationBand {
                    min_score,
                    recommendation,
                })
                .collect(),
            risk_penalty: policy.risk_penalty,
            salary_tolerance: policy.salary_tolerance,
            job_hop_limit: policy.job_hop_limit,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
