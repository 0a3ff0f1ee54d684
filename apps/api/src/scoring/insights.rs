//! Qualitative insights derived from the sub-scores and the raw profile.
//!
//! Every check is independent; the lists keep the order the checks run in.

use crate::scoring::grading::SubScores;
use crate::scoring::models::{AiInsights, CandidateProfile, JobRequirement};
use crate::scoring::scorer::ScoringPolicy;

const STRENGTH_THRESHOLD: f64 = 80.0;
const WEAKNESS_THRESHOLD: f64 = 60.0;
const TRAINING_THRESHOLD: f64 = 70.0;

pub fn strengths(scores: &SubScores, profile: &CandidateProfile) -> Vec<String> {
    let mut out = Vec::new();
    if scores.technical >= STRENGTH_THRESHOLD {
        out.push("Strong technical skills".to_string());
    }
    if scores.experience >= STRENGTH_THRESHOLD {
        out.push("Relevant work experience".to_string());
    }
    if profile.certifications.as_ref().is_some_and(|c| !c.is_empty()) {
        out.push("Professional certifications".to_string());
    }
    out
}

pub fn weaknesses(scores: &SubScores) -> Vec<String> {
    let mut out = Vec::new();
    if scores.technical < WEAKNESS_THRESHOLD {
        out.push("Limited technical skills match".to_string());
    }
    if scores.experience < WEAKNESS_THRESHOLD {
        out.push("Insufficient relevant experience".to_string());
    }
    out
}

pub fn risk_factors(
    profile: &CandidateProfile,
    job: &JobRequirement,
    policy: &ScoringPolicy,
) -> Vec<String> {
    let mut out = Vec::new();

    if profile.gaps.as_ref().is_some_and(|g| !g.is_empty()) {
        out.push("Employment gaps detected".to_string());
    }

    if profile.job_hops.is_some_and(|hops| hops > policy.job_hop_limit) {
        out.push("High job turnover rate".to_string());
    }

    if let (Some(expected), Some(budget)) = (profile.salary_expectation, job.budget) {
        if expected > budget * policy.salary_tolerance {
            out.push("Salary expectations may be too high".to_string());
        }
    }

    out
}

/// Overall score minus a flat penalty per risk factor, clamped to [0, 100].
pub fn match_quality(overall: u32, risk_count: usize, risk_penalty: u32) -> u32 {
    let penalty = (risk_count as u64).saturating_mul(risk_penalty as u64);
    (overall as u64).saturating_sub(penalty).min(100) as u32
}

pub fn recommendations(scores: &SubScores, overall: u32) -> Vec<String> {
    let mut out = Vec::new();
    if scores.technical < TRAINING_THRESHOLD {
        out.push("Consider additional technical training or upskilling".to_string());
    }
    if scores.experience < WEAKNESS_THRESHOLD {
        out.push("Look for candidates with more relevant experience".to_string());
    }
    if overall >= 80 {
        out.push("Prioritize this candidate for interview".to_string());
    }
    if overall < 50 {
        out.push("Consider other candidates or a different role".to_string());
    }
    out
}

/// Action plan for the recruiter; exactly one band applies.
pub fn next_steps(overall: u32) -> Vec<String> {
    let steps: [&str; 3] = if overall >= 80 {
        [
            "Schedule interview",
            "Prepare technical assessment",
            "Check references",
        ]
    } else if overall >= 60 {
        [
            "Consider for interview",
            "Review additional qualifications",
            "Check availability",
        ]
    } else {
        [
            "Review other candidates",
            "Consider different role",
            "Provide feedback",
        ]
    };
    steps.iter().map(|s| s.to_string()).collect()
}

pub fn build_insights(
    scores: &SubScores,
    overall: u32,
    profile: &CandidateProfile,
    job: &JobRequirement,
    policy: &ScoringPolicy,
) -> AiInsights {
    let risk_factors = risk_factors(profile, job, policy);
    let match_quality = match_quality(overall, risk_factors.len(), policy.risk_penalty);

    AiInsights {
        strengths: strengths(scores, profile),
        weaknesses: weaknesses(scores),
        recommendations: recommendations(scores, overall),
        risk_factors,
        match_quality,
    }
}
