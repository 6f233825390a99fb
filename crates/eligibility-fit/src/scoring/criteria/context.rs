use super::{fraction_of, Criterion, CriterionKind, CriterionScore, ScoringContext};
use crate::scoring::domain::{EmployerProfile, OrganizationSize};

/// Employer-side signal a context criterion reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSignal {
    /// Workforce diversity of the employer.
    Diversity,
    /// Employer commitment to local employment, driven by size and headquarters.
    Support,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContextParams {
    pub baseline_fraction: f64,
    pub local_hq_bonus: f64,
    pub min_fraction: f64,
    pub max_fraction: f64,
}

impl Default for ContextParams {
    fn default() -> Self {
        Self {
            baseline_fraction: 0.4,
            local_hq_bonus: 0.1,
            min_fraction: 0.2,
            max_fraction: 1.0,
        }
    }
}

/// Employer-context criterion; falls back to a conservative baseline without metadata.
#[derive(Debug, Clone)]
pub struct ContextCriterion {
    signal: ContextSignal,
    max_points: u32,
    params: ContextParams,
}

impl ContextCriterion {
    pub fn diversity(max_points: u32) -> Self {
        Self::with_params(ContextSignal::Diversity, max_points, ContextParams::default())
    }

    pub fn support(max_points: u32) -> Self {
        Self::with_params(ContextSignal::Support, max_points, ContextParams::default())
    }

    /// Inverted or non-finite clamp bounds fall back to the defaults.
    pub fn with_params(signal: ContextSignal, max_points: u32, params: ContextParams) -> Self {
        let params = if params.min_fraction.is_finite()
            && params.max_fraction.is_finite()
            && params.min_fraction <= params.max_fraction
        {
            params
        } else {
            ContextParams::default()
        };

        Self {
            signal,
            max_points,
            params,
        }
    }

    pub fn signal(&self) -> ContextSignal {
        self.signal
    }

    fn has_data(&self, employer: &EmployerProfile) -> bool {
        match self.signal {
            ContextSignal::Diversity => {
                employer.diversity_score.is_some() || employer.size != OrganizationSize::Unknown
            }
            ContextSignal::Support => {
                employer.local_headquarters || employer.size != OrganizationSize::Unknown
            }
        }
    }

    fn base_rate(&self, employer: &EmployerProfile) -> (f64, String) {
        match self.signal {
            ContextSignal::Diversity => match employer.diversity_score {
                Some(score) => {
                    let score = if score.is_nan() {
                        0.0
                    } else {
                        score.clamp(0.0, 1.0)
                    };
                    (score, format!("employer diversity score {score:.2}"))
                }
                None => (
                    employer.size.base_rate(),
                    format!("{} employer size rate", employer.size.label()),
                ),
            },
            ContextSignal::Support => {
                let mut rate = employer.size.base_rate();
                let mut detail = format!("{} employer size rate", employer.size.label());
                if employer.local_headquarters {
                    rate += self.params.local_hq_bonus;
                    detail.push_str(" with local headquarters bonus");
                }
                (rate, detail)
            }
        }
    }

    fn subject(&self) -> &'static str {
        match self.signal {
            ContextSignal::Diversity => "diversity",
            ContextSignal::Support => "local employment support",
        }
    }
}

impl Criterion for ContextCriterion {
    fn kind(&self) -> CriterionKind {
        match self.signal {
            ContextSignal::Diversity => CriterionKind::Diversity,
            ContextSignal::Support => CriterionKind::Support,
        }
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> CriterionScore {
        let employer = ctx
            .job
            .and_then(|job| job.employer.as_ref())
            .filter(|employer| self.has_data(employer));

        let Some(employer) = employer else {
            return CriterionScore::new(
                fraction_of(self.max_points, self.params.baseline_fraction),
                format!(
                    "employer {} data unavailable; conservative baseline {:.0}% applied",
                    self.subject(),
                    self.params.baseline_fraction * 100.0
                ),
            );
        };

        let (base, detail) = self.base_rate(employer);
        let tier = ctx.profile.plan_tier;
        let rate = (base * tier.multiplier())
            .clamp(self.params.min_fraction, self.params.max_fraction);

        CriterionScore::new(
            fraction_of(self.max_points, rate),
            format!(
                "{} from {detail}, plan multiplier {:.2}, effective {:.0}%",
                self.subject(),
                tier.multiplier(),
                rate * 100.0
            ),
        )
    }
}
