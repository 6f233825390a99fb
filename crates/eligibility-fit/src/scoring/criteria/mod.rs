mod bonus;
mod context;
mod qualifications;
mod salary;

pub use bonus::{ShortageBonus, StrategicBonus};
pub use context::{ContextCriterion, ContextParams, ContextSignal};
pub use qualifications::{
    skill_coverage, BlendedQualifications, FlatQualifications, SkillCoverage,
    NEUTRAL_SKILL_COVERAGE,
};
pub use salary::{SalaryFit, SalaryParams};

use std::fmt;

use serde::{Deserialize, Serialize};

use super::benchmarks::BenchmarkTables;
use super::domain::{CandidateProfile, JobContext};

/// Closed set of scoring dimensions known to the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionKind {
    Salary,
    Qualifications,
    Diversity,
    Support,
    SkillsBonus,
    StrategicBonus,
}

impl CriterionKind {
    pub const fn label(self) -> &'static str {
        match self {
            CriterionKind::Salary => "salary",
            CriterionKind::Qualifications => "qualifications",
            CriterionKind::Diversity => "diversity",
            CriterionKind::Support => "support",
            CriterionKind::SkillsBonus => "skills_bonus",
            CriterionKind::StrategicBonus => "strategic_bonus",
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shared, read-only inputs handed to every criterion.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub profile: &'a CandidateProfile,
    pub job: Option<&'a JobContext>,
    pub benchmarks: &'a BenchmarkTables,
}

/// Points awarded by one criterion together with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionScore {
    pub points: u32,
    pub rationale: String,
}

impl CriterionScore {
    pub fn new(points: u32, rationale: impl Into<String>) -> Self {
        Self {
            points,
            rationale: rationale.into(),
        }
    }
}

/// One entry of a scoring scheme. Implementations must be pure.
pub trait Criterion: Send + Sync + fmt::Debug {
    fn kind(&self) -> CriterionKind;
    fn max_points(&self) -> u32;
    fn evaluate(&self, ctx: &ScoringContext<'_>) -> CriterionScore;
}

/// `max * fraction`, rounded and kept inside `[0, max]`.
pub(crate) fn fraction_of(max: u32, fraction: f64) -> u32 {
    let points = (f64::from(max) * fraction).round();
    if points.is_nan() || points <= 0.0 {
        0
    } else if points >= f64::from(max) {
        max
    } else {
        points as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_of_rounds_and_clamps() {
        assert_eq!(fraction_of(20, 0.5), 10);
        assert_eq!(fraction_of(20, 0.4), 8);
        assert_eq!(fraction_of(30, 0.25), 8);
        assert_eq!(fraction_of(20, 1.4), 20);
        assert_eq!(fraction_of(20, -0.1), 0);
        assert_eq!(fraction_of(20, f64::NAN), 0);
    }

    #[test]
    fn criterion_labels_are_snake_case() {
        assert_eq!(CriterionKind::SkillsBonus.to_string(), "skills_bonus");
        assert_eq!(
            serde_json::to_value(CriterionKind::StrategicBonus).expect("serializes"),
            serde_json::json!("strategic_bonus")
        );
    }
}
