use std::path::PathBuf;

use clap::Args;
use eligibility_fit::config::ScoringConfig;
use eligibility_fit::error::AppError;
use eligibility_fit::scoring::{CandidateProfile, EducationLevel, JobContext};
use eligibility_fit::{compare_schemes, FitEngine, FitInput, ScoreReport};
use serde::Serialize;

use crate::infra::{load_benchmarks, side_by_side_engines};
use crate::render::{print_json, render_report};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Benchmark CSV export; overrides FIT_BENCHMARKS_CSV
    #[arg(long)]
    pub(crate) benchmarks: Option<PathBuf>,
    /// Print every report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) struct DemoScenario {
    pub(crate) title: &'static str,
    pub(crate) input: FitInput,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScenarioOutcome {
    pub(crate) scenario: &'static str,
    pub(crate) reports: Vec<ScoreReport>,
}

pub(crate) fn run_demo(args: DemoArgs, config: &ScoringConfig) -> Result<(), AppError> {
    let tables = load_benchmarks(args.benchmarks.as_deref(), config)?;
    let engines = side_by_side_engines(config, tables)?;
    let outcomes = score_scenarios(&engines)?;

    if args.json {
        return print_json(&outcomes);
    }

    for (index, outcome) in outcomes.iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("Scenario {}: {}", index + 1, outcome.scenario);
        for report in &outcome.reports {
            for line in render_report(report).lines() {
                println!("  {line}");
            }
        }
    }

    Ok(())
}

pub(crate) fn score_scenarios(engines: &[FitEngine]) -> Result<Vec<ScenarioOutcome>, AppError> {
    demo_scenarios()
        .into_iter()
        .map(|scenario| -> Result<ScenarioOutcome, AppError> {
            Ok(ScenarioOutcome {
                scenario: scenario.title,
                reports: compare_schemes(engines, &scenario.input)?,
            })
        })
        .collect()
}

pub(crate) fn demo_scenarios() -> Vec<DemoScenario> {
    let ml_job = JobContext {
        title: Some("Senior Machine Learning Engineer".to_string()),
        company: Some("Lumen Analytics".to_string()),
        industry: Some("Technology".to_string()),
        requirements: vec![
            "python".to_string(),
            "tensorflow".to_string(),
            "machine learning".to_string(),
        ],
        ..JobContext::default()
    };

    let strong = CandidateProfile {
        education_level: Some(EducationLevel::Masters),
        education_institution: Some("National University of Singapore".to_string()),
        years_experience: Some(5.0),
        expected_salary_sgd: Some(7500.0),
        skills: vec!["python".to_string(), "tensorflow".to_string()],
        ..CandidateProfile::default()
    };

    let overpriced = CandidateProfile {
        education_level: Some(EducationLevel::Diploma),
        years_experience: Some(1.0),
        expected_salary_sgd: Some(15000.0),
        skills: vec!["excel".to_string()],
        ..CandidateProfile::default()
    };
    let banded_job = JobContext {
        title: Some("Operations Executive".to_string()),
        salary_min_sgd: Some(5000.0),
        salary_max_sgd: Some(7000.0),
        requirements: vec!["python".to_string(), "machine learning".to_string()],
        ..JobContext::default()
    };

    let undisclosed_salary = CandidateProfile {
        expected_salary_sgd: None,
        ..strong.clone()
    };

    vec![
        DemoScenario {
            title: "NUS masters graduate applying for a shortage ML role",
            input: FitInput::new(strong, Some(ml_job.clone())),
        },
        DemoScenario {
            title: "diploma holder asking well above the posted band",
            input: FitInput::new(overpriced, Some(banded_job)),
        },
        DemoScenario {
            title: "strong candidate who did not state a salary",
            input: FitInput::new(undisclosed_salary, Some(ml_job)),
        },
    ]
}
