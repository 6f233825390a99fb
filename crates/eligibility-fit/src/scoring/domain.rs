use serde::{Deserialize, Serialize};

/// Highest completed education, ordered so comparisons read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    Diploma,
    Bachelors,
    Masters,
    #[serde(alias = "PHD", alias = "Phd")]
    PhD,
}

impl EducationLevel {
    pub const fn rank(self) -> u8 {
        match self {
            EducationLevel::Diploma => 1,
            EducationLevel::Bachelors => 2,
            EducationLevel::Masters => 3,
            EducationLevel::PhD => 4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::Diploma => "diploma",
            EducationLevel::Bachelors => "bachelors",
            EducationLevel::Masters => "masters",
            EducationLevel::PhD => "phd",
        }
    }
}

/// Subscription tier of the candidate account.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    #[default]
    Freemium,
    Standard,
    Pro,
    Ultimate,
}

impl PlanTier {
    pub const fn multiplier(self) -> f64 {
        match self {
            PlanTier::Freemium => 1.0,
            PlanTier::Standard => 1.05,
            PlanTier::Pro => 1.1,
            PlanTier::Ultimate => 1.2,
        }
    }
}

/// Candidate attributes consumed by the criteria. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub education_level: Option<EducationLevel>,
    pub education_institution: Option<String>,
    pub certifications: Vec<String>,
    pub years_experience: Option<f64>,
    pub skills: Vec<String>,
    #[serde(rename = "expectedSalarySGD")]
    pub expected_salary_sgd: Option<f64>,
    pub plan_tier: PlanTier,
}

/// Employer size bucket, ranked `Mnc > Government > Startup > Sme > Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationSize {
    #[serde(alias = "MNC")]
    Mnc,
    #[serde(alias = "gov")]
    Government,
    Startup,
    #[serde(alias = "SME")]
    Sme,
    #[default]
    Unknown,
}

impl OrganizationSize {
    pub const fn base_rate(self) -> f64 {
        match self {
            OrganizationSize::Mnc => 1.0,
            OrganizationSize::Government => 0.85,
            OrganizationSize::Startup => 0.7,
            OrganizationSize::Sme => 0.55,
            OrganizationSize::Unknown => 0.4,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            OrganizationSize::Mnc => "mnc",
            OrganizationSize::Government => "government",
            OrganizationSize::Startup => "startup",
            OrganizationSize::Sme => "sme",
            OrganizationSize::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployerProfile {
    pub size: OrganizationSize,
    pub local_headquarters: bool,
    pub diversity_score: Option<f64>,
}

/// Job opening the candidate is scored against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobContext {
    pub title: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    #[serde(rename = "salaryMinSGD")]
    pub salary_min_sgd: Option<f64>,
    #[serde(rename = "salaryMaxSGD")]
    pub salary_max_sgd: Option<f64>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub employer: Option<EmployerProfile>,
}

impl JobContext {
    /// Effective `(lo, hi)` band; a missing bound takes the other bound's value.
    /// Bounds that are not positive finite amounts count as missing.
    pub fn salary_band(&self) -> Option<(f64, f64)> {
        let usable =
            |bound: Option<f64>| bound.filter(|amount| amount.is_finite() && *amount > 0.0);
        let (lo, hi) = match (usable(self.salary_min_sgd), usable(self.salary_max_sgd)) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, min),
            (None, Some(max)) => (max, max),
            (None, None) => return None,
        };
        if lo <= hi {
            Some((lo, hi))
        } else {
            Some((hi, lo))
        }
    }
}

/// Request shape for a single scoring call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitInput {
    pub profile: CandidateProfile,
    pub job: Option<JobContext>,
}

impl FitInput {
    pub fn new(profile: CandidateProfile, job: Option<JobContext>) -> Self {
        Self { profile, job }
    }

    /// Checks the type contract that optional fields cannot express.
    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(years) = self.profile.years_experience {
            if !years.is_finite() {
                return Err(InputError::NonFiniteExperience);
            }
            if years < 0.0 {
                return Err(InputError::NegativeExperience(years));
            }
        }

        if let Some(salary) = self.profile.expected_salary_sgd {
            if !salary.is_finite() || salary <= 0.0 {
                return Err(InputError::NonPositiveSalary(salary));
            }
        }

        Ok(())
    }
}

/// Precondition failures for structurally invalid input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("years of experience cannot be negative (found {0})")]
    NegativeExperience(f64),
    #[error("years of experience must be a finite number")]
    NonFiniteExperience,
    #[error("expected salary must be a positive finite amount (found {0})")]
    NonPositiveSalary(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn education_levels_are_ordinal() {
        assert!(EducationLevel::Diploma < EducationLevel::Bachelors);
        assert!(EducationLevel::Masters < EducationLevel::PhD);
    }

    #[test]
    fn salary_band_fills_missing_bound() {
        let job = JobContext {
            salary_max_sgd: Some(7000.0),
            ..JobContext::default()
        };
        assert_eq!(job.salary_band(), Some((7000.0, 7000.0)));

        let inverted = JobContext {
            salary_min_sgd: Some(9000.0),
            salary_max_sgd: Some(6000.0),
            ..JobContext::default()
        };
        assert_eq!(inverted.salary_band(), Some((6000.0, 9000.0)));
        assert_eq!(JobContext::default().salary_band(), None);
    }

    #[test]
    fn salary_band_ignores_undisclosed_bounds() {
        let band = |min: Option<f64>, max: Option<f64>| {
            JobContext {
                salary_min_sgd: min,
                salary_max_sgd: max,
                ..JobContext::default()
            }
            .salary_band()
        };
        assert_eq!(band(Some(0.0), Some(0.0)), None);
        assert_eq!(band(Some(5000.0), Some(0.0)), Some((5000.0, 5000.0)));
        assert_eq!(band(Some(-10.0), Some(-5.0)), None);
        assert_eq!(band(Some(f64::NAN), Some(7000.0)), Some((7000.0, 7000.0)));
    }

    #[test]
    fn deserializes_camel_case_input() {
        let input: FitInput = serde_json::from_value(serde_json::json!({
            "profile": {
                "educationLevel": "Masters",
                "expectedSalarySGD": 7500,
                "yearsExperience": 5,
                "planTier": "pro"
            },
            "job": {
                "salaryMinSGD": 5000,
                "employer": { "size": "mnc", "localHeadquarters": true }
            }
        }))
        .expect("input parses");

        assert_eq!(input.profile.education_level, Some(EducationLevel::Masters));
        assert_eq!(input.profile.expected_salary_sgd, Some(7500.0));
        assert_eq!(input.profile.plan_tier, PlanTier::Pro);
        let job = input.job.expect("job present");
        assert_eq!(job.salary_min_sgd, Some(5000.0));
        assert_eq!(
            job.employer.map(|employer| employer.size),
            Some(OrganizationSize::Mnc)
        );
    }

    #[test]
    fn empty_document_is_a_valid_input() {
        let input: FitInput = serde_json::from_str("{\"profile\": {}}").expect("parses");
        assert_eq!(input, FitInput::default());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_years() {
        let input = FitInput::new(
            CandidateProfile {
                years_experience: Some(-1.0),
                ..CandidateProfile::default()
            },
            None,
        );
        assert_eq!(input.validate(), Err(InputError::NegativeExperience(-1.0)));
    }

    #[test]
    fn validate_rejects_zero_salary() {
        let input = FitInput::new(
            CandidateProfile {
                expected_salary_sgd: Some(0.0),
                ..CandidateProfile::default()
            },
            None,
        );
        assert!(matches!(
            input.validate(),
            Err(InputError::NonPositiveSalary(_))
        ));
    }
}
