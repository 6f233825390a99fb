use crate::scoring::benchmarks::BenchmarkTables;
use crate::scoring::criteria::{Criterion, CriterionScore, ScoringContext};
use crate::scoring::domain::{
    CandidateProfile, EducationLevel, EmployerProfile, FitInput, JobContext, OrganizationSize,
};

pub(super) fn ml_candidate() -> CandidateProfile {
    CandidateProfile {
        education_level: Some(EducationLevel::Masters),
        education_institution: Some("National University of Singapore".to_string()),
        years_experience: Some(5.0),
        expected_salary_sgd: Some(7500.0),
        skills: vec!["python".to_string(), "tensorflow".to_string()],
        ..CandidateProfile::default()
    }
}

pub(super) fn ml_job() -> JobContext {
    JobContext {
        title: Some("Senior Machine Learning Engineer".to_string()),
        industry: Some("technology".to_string()),
        requirements: vec![
            "python".to_string(),
            "tensorflow".to_string(),
            "machine learning".to_string(),
        ],
        ..JobContext::default()
    }
}

pub(super) fn diploma_candidate() -> CandidateProfile {
    CandidateProfile {
        education_level: Some(EducationLevel::Diploma),
        skills: vec!["excel".to_string()],
        expected_salary_sgd: Some(15000.0),
        years_experience: Some(1.0),
        ..CandidateProfile::default()
    }
}

pub(super) fn banded_job(min: Option<f64>, max: Option<f64>) -> JobContext {
    JobContext {
        salary_min_sgd: min,
        salary_max_sgd: max,
        requirements: vec!["python".to_string(), "machine learning".to_string()],
        ..JobContext::default()
    }
}

pub(super) fn employer(
    size: OrganizationSize,
    local_headquarters: bool,
    diversity_score: Option<f64>,
) -> EmployerProfile {
    EmployerProfile {
        size,
        local_headquarters,
        diversity_score,
    }
}

pub(super) fn with_salary(expected: Option<f64>) -> CandidateProfile {
    CandidateProfile {
        expected_salary_sgd: expected,
        ..CandidateProfile::default()
    }
}

pub(super) fn evaluate(
    criterion: &dyn Criterion,
    profile: &CandidateProfile,
    job: Option<&JobContext>,
) -> CriterionScore {
    let ctx = ScoringContext {
        profile,
        job,
        benchmarks: BenchmarkTables::builtin(),
    };
    criterion.evaluate(&ctx)
}

pub(super) fn input(profile: CandidateProfile, job: Option<JobContext>) -> FitInput {
    FitInput::new(profile, job)
}
