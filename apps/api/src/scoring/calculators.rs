//! Sub-score calculators. Each one is total: missing input yields a neutral
//! default, never an error.
//!
//! Skill and language matching is substring based ("Node" covers "Node.js",
//! but "Java" also covers "JavaScript"). Keep it that way unless the rubric
//! itself changes.

use crate::scoring::education::DegreeLevel;
use crate::scoring::models::{
    CandidateProfile, DimensionScore, EducationDetails, ExperienceDetails, JobRequirement,
    LanguageDetails, Project, ProjectDetails, TechnicalDetails,
};

/// Score used when a dimension cannot be compared for lack of data.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Meeting the experience bar is worth at least this much.
const EXPERIENCE_FLOOR: f64 = 70.0;
const EXPERIENCE_BONUS_PER_YEAR: f64 = 5.0;

/// Ceiling for an education level below the requirement.
const EDUCATION_SHORTFALL_CAP: f64 = 80.0;

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Treats an empty list the same as a missing one.
fn non_empty(list: Option<&[String]>) -> Option<&[String]> {
    list.filter(|l| !l.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Technical
// ────────────────────────────────────────────────────────────────────────────

/// Splits required skills into (matched, missing) using a bidirectional,
/// case-insensitive substring test against the candidate's skills.
fn partition_skills(candidate: &[String], required: &[String]) -> (Vec<String>, Vec<String>) {
    let candidate_lower: Vec<String> = candidate.iter().map(|s| s.to_lowercase()).collect();

    required.iter().cloned().partition(|req| {
        let req_lower = req.to_lowercase();
        candidate_lower
            .iter()
            .any(|skill| req_lower.contains(skill.as_str()) || skill.contains(&req_lower))
    })
}

/// Percentage of required skills covered by the candidate, rounded to the
/// nearest integer. 0 when either list is missing or nothing is required.
pub fn skill_match_ratio(candidate: Option<&[String]>, required: Option<&[String]>) -> f64 {
    match (candidate, non_empty(required)) {
        (Some(candidate), Some(required)) => {
            let (matched, _) = partition_skills(candidate, required);
            clamp_score((matched.len() as f64 / required.len() as f64 * 100.0).round())
        }
        _ => 0.0,
    }
}

pub fn technical_score(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> DimensionScore<TechnicalDetails> {
    let candidate = profile.skills.as_deref();
    let required = job.required_skills.as_deref();

    let details = match required {
        Some(required) => {
            let (matches, missing) = partition_skills(candidate.unwrap_or_default(), required);
            TechnicalDetails { matches, missing }
        }
        None => TechnicalDetails::default(),
    };

    DimensionScore::new(skill_match_ratio(candidate, required), details)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// 70 for meeting the bar plus 5 per extra year (capped at 100); below the
/// bar the score scales linearly from 0 up to 70.
pub fn experience_ratio(years: Option<f64>, required: Option<f64>) -> f64 {
    let (years, required) = match (years, required) {
        (Some(y), Some(r)) => (y, r),
        _ => return NEUTRAL_SCORE,
    };

    let score = if years >= required {
        (EXPERIENCE_FLOOR + (years - required) * EXPERIENCE_BONUS_PER_YEAR).min(100.0)
    } else {
        (years / required * EXPERIENCE_FLOOR).max(0.0)
    };
    clamp_score(score)
}

pub fn experience_score(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> DimensionScore<ExperienceDetails> {
    let years = profile.experience.as_ref().and_then(|e| e.years);
    let required = job.experience.as_ref().and_then(|e| e.years);

    DimensionScore::new(
        experience_ratio(years, required),
        ExperienceDetails {
            years,
            required,
            relevance: profile.experience.as_ref().and_then(|e| e.relevance.clone()),
        },
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn education_ratio(degree: Option<&str>, required: Option<&str>) -> f64 {
    let (candidate, required) = match (degree, required) {
        (Some(d), Some(r)) => (DegreeLevel::parse(d), DegreeLevel::parse(r)),
        _ => return NEUTRAL_SCORE,
    };

    if candidate >= required {
        100.0
    } else {
        clamp_score(candidate.rank() as f64 / required.rank() as f64 * EDUCATION_SHORTFALL_CAP)
    }
}

pub fn education_score(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> DimensionScore<EducationDetails> {
    let degree = profile.education.as_ref().and_then(|e| e.degree.clone());
    let required = job.education.as_ref().and_then(|e| e.degree.clone());

    DimensionScore::new(
        education_ratio(degree.as_deref(), required.as_deref()),
        EducationDetails {
            degree,
            required,
            institution: profile.education.as_ref().and_then(|e| e.institution.clone()),
        },
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Languages
// ────────────────────────────────────────────────────────────────────────────

/// Required languages the candidate covers. One-directional: the candidate's
/// entry must contain the required one ("English (C1)" covers "English").
fn matched_languages(candidate: &[String], required: &[String]) -> Vec<String> {
    let candidate_lower: Vec<String> = candidate.iter().map(|l| l.to_lowercase()).collect();
    required
        .iter()
        .filter(|req| {
            let req_lower = req.to_lowercase();
            candidate_lower.iter().any(|lang| lang.contains(&req_lower))
        })
        .cloned()
        .collect()
}

pub fn language_score(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> DimensionScore<LanguageDetails> {
    let required = non_empty(job.languages.as_deref());

    match (profile.languages.as_deref(), required) {
        (Some(candidate), Some(required)) => {
            let matches = matched_languages(candidate, required);
            let score = clamp_score(matches.len() as f64 / required.len() as f64 * 100.0);
            DimensionScore::new(
                score,
                LanguageDetails {
                    matches,
                    total: required.len(),
                },
            )
        }
        _ => DimensionScore::new(
            NEUTRAL_SCORE,
            LanguageDetails {
                matches: vec![],
                total: required.map_or(0, <[String]>::len),
            },
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

fn is_relevant(project: &Project, required_lower: &[String]) -> bool {
    let project_type = project.project_type.to_lowercase();
    let description = project.description.to_lowercase();
    required_lower
        .iter()
        .any(|t| project_type.contains(t.as_str()) || description.contains(t.as_str()))
}

pub fn project_score(
    profile: &CandidateProfile,
    job: &JobRequirement,
) -> DimensionScore<ProjectDetails> {
    let required = non_empty(job.project_types.as_deref());

    let (projects, required) = match (profile.projects.as_deref(), required) {
        (Some(p), Some(r)) => (p, r),
        _ => {
            return DimensionScore::new(
                NEUTRAL_SCORE,
                ProjectDetails {
                    relevant: 0,
                    total: profile.projects.as_ref().map_or(0, Vec::len),
                    types: vec![],
                },
            )
        }
    };

    let required_lower: Vec<String> = required.iter().map(|t| t.to_lowercase()).collect();
    let types: Vec<String> = projects
        .iter()
        .filter(|p| is_relevant(p, &required_lower))
        .map(|p| p.project_type.clone())
        .collect();

    let relevant = types.len();
    let score = clamp_score(relevant as f64 / projects.len().max(1) as f64 * 100.0);

    DimensionScore::new(
        score,
        ProjectDetails {
            relevant,
            total: projects.len(),
            types,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::models::{
        CandidateEducation, CandidateExperience, RequiredEducation, RequiredExperience,
    };

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn project(kind: &str, description: &str) -> Project {
        Project {
            project_type: kind.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_skill_ratio_counts_only_covered_requirements() {
        let candidate = strings(&["React", "Node.js"]);
        let required = strings(&["React", "TypeScript"]);
        assert_eq!(skill_match_ratio(Some(&candidate), Some(&required)), 50.0);
    }

    #[test]
    fn test_skill_ratio_matches_substrings_both_ways() {
        // "node" sits inside "node.js"; "postgresql" contains "postgres"
        let candidate = strings(&["Node", "PostgreSQL"]);
        let required = strings(&["Node.js", "Postgres", "Go"]);
        assert_eq!(skill_match_ratio(Some(&candidate), Some(&required)), 67.0);
    }

    #[test]
    fn test_skill_ratio_keeps_java_javascript_false_positive() {
        let candidate = strings(&["Java"]);
        let required = strings(&["JavaScript"]);
        assert_eq!(skill_match_ratio(Some(&candidate), Some(&required)), 100.0);
    }

    #[test]
    fn test_skill_ratio_empty_candidate_skill_matches_everything() {
        let candidate = strings(&[""]);
        let required = strings(&["React", "Go"]);
        assert_eq!(skill_match_ratio(Some(&candidate), Some(&required)), 100.0);
    }

    #[test]
    fn test_skill_ratio_missing_lists_score_zero() {
        let required = strings(&["React"]);
        assert_eq!(skill_match_ratio(None, Some(&required)), 0.0);
        assert_eq!(skill_match_ratio(Some(&required), None), 0.0);
        assert_eq!(skill_match_ratio(Some(&required), Some(&[])), 0.0);
    }

    #[test]
    fn test_technical_details_split_matches_and_missing() {
        let profile = CandidateProfile {
            skills: Some(strings(&["react"])),
            ..Default::default()
        };
        let job = JobRequirement {
            required_skills: Some(strings(&["React", "TypeScript"])),
            ..Default::default()
        };
        let dim = technical_score(&profile, &job);
        assert_eq!(dim.details.matches, strings(&["React"]));
        assert_eq!(dim.details.missing, strings(&["TypeScript"]));
    }

    #[test]
    fn test_technical_without_candidate_skills_lists_everything_missing() {
        let job = JobRequirement {
            required_skills: Some(strings(&["React"])),
            ..Default::default()
        };
        let dim = technical_score(&CandidateProfile::default(), &job);
        assert_eq!(dim.score, 0.0);
        assert_eq!(dim.details.missing, strings(&["React"]));
    }

    #[test]
    fn test_experience_above_bar_adds_five_per_year() {
        assert_eq!(experience_ratio(Some(7.0), Some(5.0)), 80.0);
        assert_eq!(experience_ratio(Some(5.0), Some(5.0)), 70.0);
        assert_eq!(experience_ratio(Some(20.0), Some(5.0)), 100.0);
    }

    #[test]
    fn test_experience_below_bar_scales_linearly() {
        assert_eq!(experience_ratio(Some(2.5), Some(5.0)), 35.0);
        assert_eq!(experience_ratio(Some(0.0), Some(5.0)), 0.0);
    }

    #[test]
    fn test_experience_negative_inputs_clamp_to_range() {
        assert_eq!(experience_ratio(Some(-5.0), Some(5.0)), 0.0);
        // -1 / 0 is -inf before clamping
        assert_eq!(experience_ratio(Some(-1.0), Some(0.0)), 0.0);
        assert_eq!(experience_ratio(Some(-10.0), Some(-5.0)), 100.0);
        assert_eq!(experience_ratio(Some(1e308), Some(-1e308)), 100.0);
        assert_eq!(experience_ratio(Some(0.0), Some(0.0)), EXPERIENCE_FLOOR);
    }

    #[test]
    fn test_experience_missing_is_neutral() {
        assert_eq!(experience_ratio(None, Some(5.0)), NEUTRAL_SCORE);
        assert_eq!(experience_ratio(Some(3.0), None), NEUTRAL_SCORE);
    }

    #[test]
    fn test_experience_is_monotonic_in_years() {
        let mut previous = 0.0;
        for tenths in 0..=200 {
            let score = experience_ratio(Some(tenths as f64 / 10.0), Some(6.0));
            assert!(score >= previous, "score dropped at {tenths}: {score} < {previous}");
            previous = score;
        }
    }

    #[test]
    fn test_experience_details_echo_inputs() {
        let profile = CandidateProfile {
            experience: Some(CandidateExperience {
                years: Some(3.0),
                relevance: Some("fintech".into()),
            }),
            ..Default::default()
        };
        let job = JobRequirement {
            experience: Some(RequiredExperience { years: Some(4.0) }),
            ..Default::default()
        };
        let dim = experience_score(&profile, &job);
        assert_eq!(dim.details.years, Some(3.0));
        assert_eq!(dim.details.required, Some(4.0));
        assert_eq!(dim.details.relevance.as_deref(), Some("fintech"));
    }

    #[test]
    fn test_education_shortfall_is_proportional() {
        assert_eq!(education_ratio(Some("bachelor"), Some("master")), 60.0);
        assert_eq!(education_ratio(Some("Master"), Some("bachelor")), 100.0);
        assert_eq!(education_ratio(Some("phd"), Some("PhD")), 100.0);
    }

    #[test]
    fn test_education_unknown_degrees() {
        assert_eq!(education_ratio(Some("bootcamp"), Some("bachelor")), 0.0);
        // Unknown requirement ranks 0, so any candidate clears it.
        assert_eq!(education_ratio(Some("high school"), Some("diploma")), 100.0);
        assert_eq!(education_ratio(None, Some("master")), NEUTRAL_SCORE);
    }

    #[test]
    fn test_education_details_keep_raw_strings() {
        let profile = CandidateProfile {
            education: Some(CandidateEducation {
                degree: Some("Bachelor".into()),
                institution: Some("MIT".into()),
            }),
            ..Default::default()
        };
        let job = JobRequirement {
            education: Some(RequiredEducation {
                degree: Some("Master".into()),
            }),
            ..Default::default()
        };
        let dim = education_score(&profile, &job);
        assert_eq!(dim.score, 60.0);
        assert_eq!(dim.details.degree.as_deref(), Some("Bachelor"));
        assert_eq!(dim.details.institution.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_language_match_is_one_directional() {
        let profile = CandidateProfile {
            languages: Some(strings(&["English (fluent)", "Ger"])),
            ..Default::default()
        };
        let job = JobRequirement {
            languages: Some(strings(&["english", "German"])),
            ..Default::default()
        };
        let dim = language_score(&profile, &job);
        assert_eq!(dim.score, 50.0);
        assert_eq!(dim.details.matches, strings(&["english"]));
        assert_eq!(dim.details.total, 2);
    }

    #[test]
    fn test_language_empty_requirement_is_covered_by_any_language() {
        let profile = CandidateProfile {
            languages: Some(strings(&["Portuguese"])),
            ..Default::default()
        };
        let job = JobRequirement {
            languages: Some(strings(&[""])),
            ..Default::default()
        };
        let dim = language_score(&profile, &job);
        assert_eq!(dim.score, 100.0);
        assert_eq!(dim.details.matches, strings(&[""]));
    }

    #[test]
    fn test_language_missing_is_neutral() {
        let job = JobRequirement {
            languages: Some(strings(&["French"])),
            ..Default::default()
        };
        let dim = language_score(&CandidateProfile::default(), &job);
        assert_eq!(dim.score, NEUTRAL_SCORE);
        assert_eq!(dim.details.total, 1);
    }

    #[test]
    fn test_project_relevance_checks_type_and_description() {
        let profile = CandidateProfile {
            projects: Some(vec![
                project("Web", "storefront"),
                project("tooling", "internal mobile release pipeline"),
                project("research", "compilers"),
            ]),
            ..Default::default()
        };
        let job = JobRequirement {
            project_types: Some(strings(&["web", "Mobile"])),
            ..Default::default()
        };
        let dim = project_score(&profile, &job);
        assert!((dim.score - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(dim.details.relevant, 2);
        assert_eq!(dim.details.total, 3);
        assert_eq!(dim.details.types, strings(&["Web", "tooling"]));
    }

    #[test]
    fn test_project_empty_list_scores_zero() {
        let profile = CandidateProfile {
            projects: Some(vec![]),
            ..Default::default()
        };
        let job = JobRequirement {
            project_types: Some(strings(&["web"])),
            ..Default::default()
        };
        assert_eq!(project_score(&profile, &job).score, 0.0);
    }

    #[test]
    fn test_project_missing_requirements_is_neutral() {
        let profile = CandidateProfile {
            projects: Some(vec![project("web", "")]),
            ..Default::default()
        };
        let dim = project_score(&profile, &JobRequirement::default());
        assert_eq!(dim.score, NEUTRAL_SCORE);
        assert_eq!(dim.details.total, 1);
    }
}
