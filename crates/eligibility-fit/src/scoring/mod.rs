//! Deterministic fit scoring of a candidate profile against an optional job.
//!
//! A [`ScoringScheme`] is an ordered registry of criteria plus a verdict policy. The engine
//! runs every criterion in registry order, sums the bounded points and classifies the raw
//! total. Scoring is pure: no I/O, no clock, no randomness.

pub mod benchmarks;
pub mod criteria;
pub mod domain;
mod normalizer;
pub mod policy;
pub mod report;
pub mod scheme;

#[cfg(test)]
mod tests;

pub use benchmarks::{BenchmarkError, BenchmarkTables, SalaryBand, SectorBenchmark};
pub use criteria::{Criterion, CriterionKind, CriterionScore, ScoringContext};
pub use domain::{
    CandidateProfile, EducationLevel, EmployerProfile, FitInput, InputError, JobContext,
    OrganizationSize, PlanTier,
};
pub use policy::{PolicyError, ScoringPolicy, Verdict};
pub use report::{ScoreBreakdown, ScoreReport, ScoreReportBuilder};
pub use scheme::{SchemeError, SchemeKind, ScoringScheme};

use std::sync::Arc;

use tracing::debug;

/// Stateless evaluator applying one scheme to scoring inputs.
#[derive(Debug, Clone)]
pub struct FitEngine {
    scheme: Arc<ScoringScheme>,
    benchmarks: Arc<BenchmarkTables>,
}

impl FitEngine {
    pub fn new(scheme: ScoringScheme, benchmarks: Arc<BenchmarkTables>) -> Self {
        Self {
            scheme: Arc::new(scheme),
            benchmarks,
        }
    }

    /// Preset scheme over a copy of the built-in tables.
    pub fn builtin(kind: SchemeKind) -> Self {
        Self::new(kind.build(), Arc::new(BenchmarkTables::builtin().clone()))
    }

    pub fn scheme(&self) -> &ScoringScheme {
        &self.scheme
    }

    pub fn benchmarks(&self) -> &BenchmarkTables {
        &self.benchmarks
    }

    pub fn score(&self, input: &FitInput) -> Result<ScoreReport, InputError> {
        score_with(&self.scheme, &self.benchmarks, input)
    }
}

/// Scores with the points preset and the built-in benchmark tables.
pub fn score_fit(input: &FitInput) -> Result<ScoreReport, InputError> {
    let scheme = ScoringScheme::points_system();
    score_with(&scheme, BenchmarkTables::builtin(), input)
}

/// Side-by-side reports, one per engine, in the order given.
pub fn compare_schemes(
    engines: &[FitEngine],
    input: &FitInput,
) -> Result<Vec<ScoreReport>, InputError> {
    engines.iter().map(|engine| engine.score(input)).collect()
}

fn score_with(
    scheme: &ScoringScheme,
    benchmarks: &BenchmarkTables,
    input: &FitInput,
) -> Result<ScoreReport, InputError> {
    input.validate()?;

    let ctx = ScoringContext {
        profile: &input.profile,
        job: input.job.as_ref(),
        benchmarks,
    };

    let mut builder = ScoreReportBuilder::new(scheme.name());
    for criterion in scheme.criteria() {
        let mut score = criterion.evaluate(&ctx);
        score.points = score.points.min(criterion.max_points());
        builder.record(criterion.kind(), score);
    }

    let report = builder.finish(scheme.policy());
    debug!(
        scheme = %report.scheme,
        total_raw = report.total_raw,
        total = report.total,
        verdict = ?report.verdict,
        "fit score computed"
    );

    Ok(report)
}
