use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::scoring::grading::{Grade, Recommendation};

// ────────────────────────────────────────────────────────────────────────────
// Lenient field readers
// ────────────────────────────────────────────────────────────────────────────

/// Reads a field as `T`, or `None` when it is null or has the wrong shape
/// (`"7"` for a number, `-1` for a count). A bad field only blanks itself.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like `lenient`, falling back to `T::default()`.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// Candidate data as submitted by the caller (CV parser, UI form, etc.).
/// Every field is optional; missing data degrades to neutral sub-scores.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default, deserialize_with = "lenient")]
    pub skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub experience: Option<CandidateExperience>,
    #[serde(default, deserialize_with = "lenient")]
    pub education: Option<CandidateEducation>,
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub projects: Option<Vec<Project>>,
    #[serde(default, deserialize_with = "lenient")]
    pub certifications: Option<Vec<String>>,
    /// Employment gap records. Only the count is used.
    #[serde(default, deserialize_with = "lenient")]
    pub gaps: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub job_hops: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub salary_expectation: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateExperience {
    #[serde(default, deserialize_with = "lenient")]
    pub years: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub relevance: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEducation {
    #[serde(default, deserialize_with = "lenient")]
    pub degree: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Project {
    #[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
    pub project_type: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub description: String,
}

/// What the open position asks for.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirement {
    #[serde(default, deserialize_with = "lenient")]
    pub required_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub experience: Option<RequiredExperience>,
    #[serde(default, deserialize_with = "lenient")]
    pub education: Option<RequiredEducation>,
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub project_types: Option<Vec<String>>,
    /// Upper salary bound for the role.
    #[serde(default, deserialize_with = "lenient")]
    pub budget: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequiredExperience {
    #[serde(default, deserialize_with = "lenient")]
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequiredEducation {
    #[serde(default, deserialize_with = "lenient")]
    pub degree: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub overall: OverallScore,
    pub breakdown: ScoreBreakdown,
    pub ai_insights: AiInsights,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallScore {
    pub score: u32, // 0 – 100
    pub grade: Grade,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub technical: DimensionScore<TechnicalDetails>,
    pub experience: DimensionScore<ExperienceDetails>,
    pub education: DimensionScore<EducationDetails>,
    pub languages: DimensionScore<LanguageDetails>,
    pub projects: DimensionScore<ProjectDetails>,
}

/// One scored dimension. `details` is presentation-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore<D> {
    pub score: f64,
    pub grade: Grade,
    pub details: D,
}

impl<D> DimensionScore<D> {
    pub fn new(score: f64, details: D) -> Self {
        Self {
            score,
            grade: Grade::from_score(score),
            details,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechnicalDetails {
    pub matches: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExperienceDetails {
    pub years: Option<f64>,
    pub required: Option<f64>,
    pub relevance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EducationDetails {
    pub degree: Option<String>,
    pub required: Option<String>,
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LanguageDetails {
    pub matches: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectDetails {
    pub relevant: usize,
    pub total: usize,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub match_quality: u32,
}
