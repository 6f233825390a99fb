use eligibility_fit::scoring::{CriterionKind, InputError, ScoreReport};
use eligibility_fit::{compare_schemes, score_fit, FitEngine, FitInput, SchemeKind, Verdict};
use serde_json::json;

fn parse(document: serde_json::Value) -> FitInput {
    serde_json::from_value(document).expect("input document parses")
}

fn ml_engineer_application() -> FitInput {
    parse(json!({
        "profile": {
            "educationLevel": "Masters",
            "educationInstitution": "National University of Singapore",
            "yearsExperience": 5,
            "expectedSalarySGD": 7500,
            "skills": ["Python", "TensorFlow"]
        },
        "job": {
            "title": "Senior Machine Learning Engineer",
            "industry": "Technology",
            "requirements": ["python", "tensorflow", "machine learning"]
        }
    }))
}

fn overreaching_application() -> FitInput {
    parse(json!({
        "profile": {
            "educationLevel": "Diploma",
            "yearsExperience": 1,
            "expectedSalarySGD": 15000,
            "skills": ["excel"]
        },
        "job": {
            "salaryMinSGD": 5000,
            "salaryMaxSGD": 7000,
            "requirements": ["python", "machine learning"]
        }
    }))
}

#[test]
fn strong_application_is_likely_with_full_breakdown() {
    let report = score_fit(&ml_engineer_application()).expect("scores");

    assert_eq!(report.verdict, Verdict::Likely);
    assert_eq!(report.total_raw, 76);
    assert_eq!(report.total, 69);
    assert_eq!(report.notes.len(), 6);
    assert!(report.notes[0].contains("meets technology sector early-career benchmark 5600"));
    assert!(report.notes[4].contains("machine learning engineer"));
}

#[test]
fn overreaching_application_is_unlikely() {
    let report = score_fit(&overreaching_application()).expect("scores");

    assert_eq!(report.verdict, Verdict::Unlikely);
    assert_eq!(report.breakdown.get(CriterionKind::Salary), Some(0));
    assert_eq!(report.breakdown.get(CriterionKind::Qualifications), Some(0));
    assert!(report.notes[0].contains("above job band maximum 7000"));
}

#[test]
fn missing_salary_keeps_neutral_credit() {
    let input = parse(json!({
        "profile": { "educationLevel": "Bachelors" },
        "job": { "salaryMinSGD": 5000, "salaryMaxSGD": 7000 }
    }));
    let report = score_fit(&input).expect("scores");
    let salary = report.breakdown.salary.expect("salary scored");
    assert!(salary > 0 && salary < 20);
    assert_eq!(
        report.notes[0],
        "missing expected salary; treated as within benchmark."
    );
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let report = score_fit(&ml_engineer_application()).expect("scores");
    let value = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(value["scheme"], "points_110");
    assert_eq!(value["totalRaw"], 76);
    assert_eq!(value["maxPoints"], 110);
    assert_eq!(value["verdict"], "Likely");
    assert_eq!(value["breakdown"]["skillsBonus"], 20);
    assert_eq!(value["breakdown"]["strategicBonus"], 0);

    let parsed: ScoreReport = serde_json::from_value(value).expect("report parses back");
    assert_eq!(parsed, report);
}

#[test]
fn schemes_can_disagree_on_the_same_input() {
    let input = parse(json!({
        "profile": {
            "educationLevel": "Bachelors",
            "yearsExperience": 2,
            "expectedSalarySGD": 6000,
            "skills": ["nursing"]
        },
        "job": {
            "title": "Registered Nurse",
            "industry": "Healthcare",
            "requirements": ["nursing", "patient care"]
        }
    }));
    let engines: Vec<FitEngine> = SchemeKind::ALL
        .into_iter()
        .map(FitEngine::builtin)
        .collect();
    let reports = compare_schemes(&engines, &input).expect("scores");

    // points: 20 + 10 + 8 + 8 + 20 + 0
    assert_eq!(reports[0].scheme, "points_110");
    assert_eq!(reports[0].total_raw, 66);
    assert_eq!(reports[0].verdict, Verdict::Likely);

    // weighted: 30 + round(40 * 0.8) + 8 + 4
    assert_eq!(reports[1].scheme, "weighted_100");
    assert_eq!(reports[1].total_raw, 74);
    assert_eq!(reports[1].verdict, Verdict::Likely);
}

#[test]
fn structurally_invalid_input_is_rejected() {
    let input = parse(json!({ "profile": { "yearsExperience": -3 } }));
    assert_eq!(score_fit(&input), Err(InputError::NegativeExperience(-3.0)));
}
