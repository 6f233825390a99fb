use super::{fraction_of, Criterion, CriterionKind, CriterionScore, ScoringContext};
use crate::scoring::domain::JobContext;

pub(crate) const MISSING_SALARY_NOTE: &str =
    "missing expected salary; treated as within benchmark.";

/// Tunables for the salary criterion. Fractions are shares of the criterion maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct SalaryParams {
    pub neutral_fraction: f64,
    pub under_band_tolerance: f64,
    pub under_band_fraction: f64,
    pub over_band_tolerance: f64,
    pub over_band_fraction: f64,
    pub sector_partial_margin: f64,
    pub sector_partial_fraction: f64,
    pub experienced_years: f64,
}

impl Default for SalaryParams {
    fn default() -> Self {
        Self {
            neutral_fraction: 0.5,
            under_band_tolerance: 0.2,
            under_band_fraction: 0.5,
            over_band_tolerance: 0.2,
            over_band_fraction: 0.25,
            sector_partial_margin: 0.1,
            sector_partial_fraction: 0.5,
            experienced_years: 8.0,
        }
    }
}

/// Compares expected pay with the job band, or the sector benchmark when no band is posted.
#[derive(Debug, Clone)]
pub struct SalaryFit {
    max_points: u32,
    params: SalaryParams,
}

impl SalaryFit {
    pub fn new(max_points: u32) -> Self {
        Self::with_params(max_points, SalaryParams::default())
    }

    pub fn with_params(max_points: u32, params: SalaryParams) -> Self {
        Self { max_points, params }
    }

    fn against_band(&self, expected: f64, lo: f64, hi: f64) -> CriterionScore {
        let params = &self.params;

        if expected >= lo && expected <= hi {
            return CriterionScore::new(
                self.max_points,
                format!("expected salary {expected:.0} within job band {lo:.0}-{hi:.0}"),
            );
        }

        if expected < lo {
            let ratio = expected / lo;
            let gap = (1.0 - ratio) * 100.0;
            if ratio >= 1.0 - params.under_band_tolerance {
                return CriterionScore::new(
                    fraction_of(self.max_points, params.under_band_fraction),
                    format!(
                        "expected salary {expected:.0} is {gap:.0}% below job band minimum {lo:.0}; partial credit"
                    ),
                );
            }
            return CriterionScore::new(
                0,
                format!(
                    "expected salary {expected:.0} is {gap:.0}% below job band minimum {lo:.0}, beyond {:.0}% tolerance",
                    params.under_band_tolerance * 100.0
                ),
            );
        }

        let ratio = expected / hi;
        let gap = (ratio - 1.0) * 100.0;
        if ratio <= 1.0 + params.over_band_tolerance {
            CriterionScore::new(
                fraction_of(self.max_points, params.over_band_fraction),
                format!(
                    "expected salary {expected:.0} is {gap:.0}% above job band maximum {hi:.0}; reduced credit"
                ),
            )
        } else {
            CriterionScore::new(
                0,
                format!(
                    "expected salary {expected:.0} is {gap:.0}% above job band maximum {hi:.0}, beyond {:.0}% tolerance",
                    params.over_band_tolerance * 100.0
                ),
            )
        }
    }

    fn against_sector(&self, ctx: &ScoringContext<'_>, expected: f64) -> CriterionScore {
        let params = &self.params;
        let industry = ctx.job.and_then(|job| job.industry.as_deref());
        let sector = ctx.benchmarks.resolve_sector(industry);
        let experienced = ctx
            .profile
            .years_experience
            .map(|years| years >= params.experienced_years)
            .unwrap_or(false);
        let stage = if experienced {
            "experienced"
        } else {
            "early-career"
        };
        let benchmark = sector.band.for_stage(experienced);
        let label = if sector.fallback {
            "default sector".to_string()
        } else {
            format!("{} sector", sector.sector)
        };

        if expected >= benchmark {
            CriterionScore::new(
                self.max_points,
                format!("expected salary {expected:.0} meets {label} {stage} benchmark {benchmark:.0}"),
            )
        } else if expected >= benchmark * (1.0 - params.sector_partial_margin) {
            CriterionScore::new(
                fraction_of(self.max_points, params.sector_partial_fraction),
                format!(
                    "expected salary {expected:.0} within {:.0}% below {label} {stage} benchmark {benchmark:.0}; partial credit",
                    params.sector_partial_margin * 100.0
                ),
            )
        } else {
            CriterionScore::new(
                0,
                format!("expected salary {expected:.0} below {label} {stage} benchmark {benchmark:.0}"),
            )
        }
    }
}

impl Criterion for SalaryFit {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Salary
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> CriterionScore {
        let Some(expected) = ctx.profile.expected_salary_sgd else {
            return CriterionScore::new(
                fraction_of(self.max_points, self.params.neutral_fraction),
                MISSING_SALARY_NOTE,
            );
        };

        match ctx.job.and_then(JobContext::salary_band) {
            Some((lo, hi)) => self.against_band(expected, lo, hi),
            None => self.against_sector(ctx, expected),
        }
    }
}
