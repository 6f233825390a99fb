use std::sync::Arc;

use eligibility_fit::scoring::{
    BenchmarkError, BenchmarkTables, CandidateProfile, EducationLevel, JobContext, SalaryBand,
};
use eligibility_fit::{FitEngine, FitInput, SchemeKind, Verdict};

fn logistics_analyst() -> FitInput {
    FitInput::new(
        CandidateProfile {
            education_level: Some(EducationLevel::Bachelors),
            education_institution: Some("Singapore Management University".to_string()),
            years_experience: Some(3.0),
            expected_salary_sgd: Some(4300.0),
            skills: vec!["sql".to_string(), "forecasting".to_string()],
            ..CandidateProfile::default()
        },
        Some(JobContext {
            title: Some("Supply Chain Analyst".to_string()),
            industry: Some("Logistics".to_string()),
            requirements: vec!["sql".to_string(), "forecasting".to_string()],
            ..JobContext::default()
        }),
    )
}

#[test]
fn bundled_export_imports_every_table() {
    let data = include_bytes!("../data/benchmarks_2025.csv");
    let tables = BenchmarkTables::from_reader(&data[..]).expect("bundled export imports");

    assert_eq!(tables.sectors().len(), 7);
    assert_eq!(tables.default_band(), SalaryBand::new(5000.0, 9000.0));
    assert_eq!(tables.institutions().len(), 8);
    assert_eq!(tables.certifications().len(), 4);
    assert!(tables
        .shortage_occupations()
        .contains("supply chain analyst"));

    let logistics = tables.resolve_sector(Some("Logistics & Warehousing"));
    assert!(!logistics.fallback);
    assert_eq!(logistics.band.early_career, 4200.0);
}

#[test]
fn imported_tables_change_the_score() {
    let data = include_bytes!("../data/benchmarks_2025.csv");
    let imported = BenchmarkTables::from_reader(&data[..]).expect("bundled export imports");
    let custom = FitEngine::new(SchemeKind::PointsSystem.build(), Arc::new(imported));
    let builtin = FitEngine::builtin(SchemeKind::PointsSystem);

    let with_import = custom.score(&logistics_analyst()).expect("scores");
    let with_builtin = builtin.score(&logistics_analyst()).expect("scores");

    // logistics benchmark 4200 versus default 5000
    assert_eq!(with_import.breakdown.salary, Some(20));
    assert_eq!(with_builtin.breakdown.salary, Some(0));
    assert_eq!(with_import.breakdown.skills_bonus, Some(20));
    assert_eq!(with_builtin.breakdown.skills_bonus, Some(0));
    assert_eq!(with_import.total_raw, 76);
    assert_eq!(with_import.verdict, Verdict::Likely);
    assert_eq!(with_builtin.total_raw, 36);
    assert_eq!(with_builtin.verdict, Verdict::Borderline);
}

#[test]
fn import_reports_offending_line() {
    let csv = "Table,Value,Early Career,Experienced\n\
Sector,Retail,3200,5400\n\
Sector,Hospitality,,4800\n";

    match BenchmarkTables::from_reader(csv.as_bytes()) {
        Err(BenchmarkError::InvalidRow { line, reason }) => {
            assert_eq!(line, 3);
            assert!(reason.contains("Early Career"));
        }
        other => panic!("expected invalid row error, got {other:?}"),
    }
}

#[test]
fn import_rejects_unknown_table() {
    let csv = "Table,Value,Early Career,Experienced\nBonus,Anything,,\n";
    let error = BenchmarkTables::from_reader(csv.as_bytes()).expect_err("unknown table");
    assert!(error.to_string().contains("unknown table 'bonus'"));
}

#[test]
fn missing_file_is_an_io_error() {
    let error = BenchmarkTables::from_path("does/not/exist.csv").expect_err("missing file");
    assert!(matches!(error, BenchmarkError::Io(_)));
}
