use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::criteria::{
    BlendedQualifications, ContextCriterion, Criterion, CriterionKind, FlatQualifications,
    SalaryFit, ShortageBonus, StrategicBonus,
};
use super::policy::{PolicyError, ScoringPolicy};

/// Built-in scheme presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    /// Six criteria, 110 points, pass 40 / borderline 20.
    PointsSystem,
    /// Four criteria, 100 points, pass 70 / borderline 50.
    WeightedBlend,
}

impl SchemeKind {
    pub const ALL: [SchemeKind; 2] = [SchemeKind::PointsSystem, SchemeKind::WeightedBlend];

    pub const fn name(self) -> &'static str {
        match self {
            SchemeKind::PointsSystem => "points_110",
            SchemeKind::WeightedBlend => "weighted_100",
        }
    }

    pub fn build(self) -> ScoringScheme {
        match self {
            SchemeKind::PointsSystem => ScoringScheme::points_system(),
            SchemeKind::WeightedBlend => ScoringScheme::weighted_blend(),
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemeKind {
    type Err = SchemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "points" | "points_110" | "points_system" => Ok(SchemeKind::PointsSystem),
            "weighted" | "weighted_100" | "weighted_blend" | "blend" => {
                Ok(SchemeKind::WeightedBlend)
            }
            _ => Err(SchemeError::UnknownScheme(value.to_string())),
        }
    }
}

/// Ordered criterion registry plus the verdict policy applied to its total.
#[derive(Debug)]
pub struct ScoringScheme {
    name: String,
    criteria: Vec<Box<dyn Criterion>>,
    policy: ScoringPolicy,
}

impl ScoringScheme {
    pub fn new(
        name: impl Into<String>,
        criteria: Vec<Box<dyn Criterion>>,
        policy: ScoringPolicy,
    ) -> Result<Self, SchemeError> {
        if criteria.is_empty() {
            return Err(SchemeError::Empty);
        }

        let mut seen = BTreeSet::new();
        for criterion in &criteria {
            if !seen.insert(criterion.kind()) {
                return Err(SchemeError::DuplicateCriterion(criterion.kind()));
            }
        }

        let criteria_max = max_sum(&criteria);
        if criteria_max != policy.total_max_points() {
            return Err(SchemeError::MaxPointsMismatch {
                policy: policy.total_max_points(),
                criteria: criteria_max,
            });
        }

        Ok(Self {
            name: name.into(),
            criteria,
            policy,
        })
    }

    pub fn points_system() -> Self {
        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(SalaryFit::new(20)),
            Box::new(FlatQualifications::new(20)),
            Box::new(ContextCriterion::diversity(20)),
            Box::new(ContextCriterion::support(20)),
            Box::new(ShortageBonus::new(20)),
            Box::new(StrategicBonus::new(10)),
        ];
        Self::preset(SchemeKind::PointsSystem, criteria, 40, 20)
    }

    pub fn weighted_blend() -> Self {
        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(SalaryFit::new(30)),
            Box::new(BlendedQualifications::new(40)),
            Box::new(ContextCriterion::support(20)),
            Box::new(ContextCriterion::diversity(10)),
        ];
        Self::preset(SchemeKind::WeightedBlend, criteria, 70, 50)
    }

    fn preset(
        kind: SchemeKind,
        criteria: Vec<Box<dyn Criterion>>,
        pass_threshold: u32,
        borderline_threshold: u32,
    ) -> Self {
        let total = max_sum(&criteria);
        Self {
            name: kind.name().to_string(),
            criteria,
            policy: ScoringPolicy::preset(pass_threshold, borderline_threshold, total),
        }
    }

    /// Replaces the thresholds while keeping the registry.
    pub fn with_thresholds(
        self,
        pass_threshold: Option<u32>,
        borderline_threshold: Option<u32>,
    ) -> Result<Self, SchemeError> {
        let policy = ScoringPolicy::new(
            pass_threshold.unwrap_or(self.policy.pass_threshold()),
            borderline_threshold.unwrap_or(self.policy.borderline_threshold()),
            self.policy.total_max_points(),
        )?;
        Ok(Self { policy, ..self })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn criteria(&self) -> &[Box<dyn Criterion>] {
        &self.criteria
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn max_points(&self) -> u32 {
        self.policy.total_max_points()
    }
}

fn max_sum(criteria: &[Box<dyn Criterion>]) -> u32 {
    criteria.iter().map(|criterion| criterion.max_points()).sum()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemeError {
    #[error("scoring scheme has no criteria")]
    Empty,
    #[error("criterion {0} registered more than once")]
    DuplicateCriterion(CriterionKind),
    #[error("policy expects {policy} total points but criteria add up to {criteria}")]
    MaxPointsMismatch { policy: u32, criteria: u32 },
    #[error("unknown scoring scheme '{0}' (expected points or weighted)")]
    UnknownScheme(String),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
