use serde::Serialize;

/// Dimension weights for the overall score. The defaults are the published
/// rubric and must keep summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Weights {
    pub technical: f64,
    pub experience: f64,
    pub education: f64,
    pub language: f64,
    pub project: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            technical: 0.30,
            experience: 0.25,
            education: 0.15,
            language: 0.10,
            project: 0.20,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.technical + self.experience + self.education + self.language + self.project
    }
}

/// The five sub-scores feeding the aggregate, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub technical: f64,
    pub experience: f64,
    pub education: f64,
    pub language: f64,
    pub project: f64,
}

/// Weighted sum of the sub-scores, rounded and clamped to [0, 100].
pub fn aggregate(scores: &SubScores, weights: &Weights) -> u32 {
    let weighted = scores.technical * weights.technical
        + scores.experience * weights.experience
        + scores.education * weights.education
        + scores.language * weights.language
        + scores.project * weights.project;
    weighted.round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Grades
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
}

/// Lower bounds, highest first. Anything under the last bound is a D.
pub const GRADE_THRESHOLDS: [(f64, Grade); 6] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::BPlus),
    (60.0, Grade::B),
    (50.0, Grade::CPlus),
    (40.0, Grade::C),
];

impl Grade {
    pub fn from_score(score: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Hiring recommendation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Hire")]
    StrongHire,
    Hire,
    Consider,
    Maybe,
    #[serde(rename = "No Hire")]
    NoHire,
}

pub const RECOMMENDATION_THRESHOLDS: [(u32, Recommendation); 4] = [
    (85, Recommendation::StrongHire),
    (70, Recommendation::Hire),
    (60, Recommendation::Consider),
    (50, Recommendation::Maybe),
];

impl Recommendation {
    pub fn from_overall(score: u32) -> Self {
        RECOMMENDATION_THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, rec)| *rec)
            .unwrap_or(Recommendation::NoHire)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::Consider => "Consider",
            Recommendation::Maybe => "Maybe",
            Recommendation::NoHire => "No Hire",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(score: f64) -> SubScores {
        SubScores {
            technical: score,
            experience: score,
            education: score,
            language: score,
            project: score,
        }
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((Weights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_all_hundred_is_hundred() {
        assert_eq!(aggregate(&uniform(100.0), &Weights::default()), 100);
        assert_eq!(aggregate(&uniform(0.0), &Weights::default()), 0);
    }

    #[test]
    fn test_aggregate_applies_weights() {
        let scores = SubScores {
            technical: 50.0,
            experience: 80.0,
            education: 60.0,
            language: 100.0,
            project: 0.0,
        };
        // 15 + 20 + 9 + 10 + 0 = 54
        assert_eq!(aggregate(&scores, &Weights::default()), 54);
    }

    #[test]
    fn test_aggregate_rounds_half_up() {
        let scores = SubScores {
            technical: 0.0,
            experience: 0.0,
            education: 0.0,
            language: 5.0,
            project: 0.0,
        };
        // 0.5 -> 1
        assert_eq!(aggregate(&scores, &Weights::default()), 1);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(90.0), Grade::APlus);
        assert_eq!(Grade::from_score(89.0), Grade::A);
        assert_eq!(Grade::from_score(80.0), Grade::A);
        assert_eq!(Grade::from_score(79.9), Grade::BPlus);
        assert_eq!(Grade::from_score(70.0), Grade::BPlus);
        assert_eq!(Grade::from_score(60.0), Grade::B);
        assert_eq!(Grade::from_score(50.0), Grade::CPlus);
        assert_eq!(Grade::from_score(40.0), Grade::C);
        assert_eq!(Grade::from_score(39.0), Grade::D);
        assert_eq!(Grade::from_score(0.0), Grade::D);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
        assert_eq!(Grade::BPlus.as_str(), "B+");
    }

    #[test]
    fn test_recommendation_boundaries() {
        assert_eq!(Recommendation::from_overall(85), Recommendation::StrongHire);
        assert_eq!(Recommendation::from_overall(84), Recommendation::Hire);
        assert_eq!(Recommendation::from_overall(70), Recommendation::Hire);
        assert_eq!(Recommendation::from_overall(60), Recommendation::Consider);
        assert_eq!(Recommendation::from_overall(50), Recommendation::Maybe);
        assert_eq!(Recommendation::from_overall(49), Recommendation::NoHire);
    }

    #[test]
    fn test_recommendation_labels() {
        assert_eq!(
            serde_json::to_string(&Recommendation::StrongHire).unwrap(),
            "\"Strong Hire\""
        );
        assert_eq!(Recommendation::NoHire.as_str(), "No Hire");
    }
}
