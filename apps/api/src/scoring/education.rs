/// Degree hierarchy used by the education sub-score.
///
/// Ordering follows the discriminants, so `Unknown` ranks below every
/// recognised degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DegreeLevel {
    Unknown = 0,
    HighSchool = 1,
    Associate = 2,
    Bachelor = 3,
    Master = 4,
    Phd = 5,
}

impl DegreeLevel {
    /// Case-insensitive lookup. Anything unrecognised maps to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "high school" => DegreeLevel::HighSchool,
            "associate" => DegreeLevel::Associate,
            "bachelor" => DegreeLevel::Bachelor,
            "master" => DegreeLevel::Master,
            "phd" => DegreeLevel::Phd,
            _ => DegreeLevel::Unknown,
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}
