// Candidate fit scoring: five weighted sub-scores, a letter grade, a hire
// recommendation and qualitative insights. Pure computation; the handlers are
// the only part that touches HTTP.

pub mod calculators;
pub mod education;
pub mod grading;
pub mod handlers;
pub mod insights;
pub mod models;
pub mod scorer;
