use super::{fraction_of, Criterion, CriterionKind, CriterionScore, ScoringContext};
use crate::scoring::domain::{CandidateProfile, EducationLevel, JobContext};
use crate::scoring::normalizer::{normalize_text, normalized_set};

/// Coverage assumed when the job lists no requirements.
pub const NEUTRAL_SKILL_COVERAGE: f64 = 0.5;

const DEGREE_FRACTION: f64 = 0.5;
const EDUCATION_WEIGHT: f64 = 0.4;
const SKILLS_WEIGHT: f64 = 0.4;
const EXPERIENCE_WEIGHT: f64 = 0.2;
const LEVEL_SHORTFALL_PENALTY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillCoverage {
    pub matched: usize,
    pub required: usize,
    pub ratio: f64,
}

impl SkillCoverage {
    pub fn is_neutral(&self) -> bool {
        self.required == 0
    }

    fn describe(&self) -> String {
        if self.is_neutral() {
            format!(
                "no listed requirements, neutral skill coverage {:.0}%",
                self.ratio * 100.0
            )
        } else {
            format!(
                "skill coverage {}/{} ({:.0}%)",
                self.matched,
                self.required,
                self.ratio * 100.0
            )
        }
    }
}

/// `|skills ∩ requirements| / |requirements|` after normalization.
pub fn skill_coverage(profile: &CandidateProfile, job: Option<&JobContext>) -> SkillCoverage {
    let requirements = job
        .map(|job| normalized_set(&job.requirements))
        .unwrap_or_default();

    if requirements.is_empty() {
        return SkillCoverage {
            matched: 0,
            required: 0,
            ratio: NEUTRAL_SKILL_COVERAGE,
        };
    }

    let skills = normalized_set(&profile.skills);
    let matched = requirements.intersection(&skills).count();
    SkillCoverage {
        matched,
        required: requirements.len(),
        ratio: matched as f64 / requirements.len() as f64,
    }
}

/// Recognized institution or certification earns full points, a degree earns half.
#[derive(Debug, Clone)]
pub struct FlatQualifications {
    max_points: u32,
}

impl FlatQualifications {
    pub fn new(max_points: u32) -> Self {
        Self { max_points }
    }
}

impl Criterion for FlatQualifications {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Qualifications
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> CriterionScore {
        let profile = ctx.profile;
        let coverage = skill_coverage(profile, ctx.job).describe();

        if let Some(institution) = profile
            .education_institution
            .as_deref()
            .and_then(|name| ctx.benchmarks.recognized_institution(name))
        {
            return CriterionScore::new(
                self.max_points,
                format!("recognized institution '{institution}'; {coverage}"),
            );
        }

        if let Some(certification) = ctx
            .benchmarks
            .recognized_certification(&profile.certifications)
        {
            return CriterionScore::new(
                self.max_points,
                format!("recognized certification '{certification}'; {coverage}"),
            );
        }

        match profile.education_level {
            Some(level) if level >= EducationLevel::Bachelors => CriterionScore::new(
                fraction_of(self.max_points, DEGREE_FRACTION),
                format!("{} degree without recognized institution; {coverage}", level.label()),
            ),
            Some(level) => CriterionScore::new(
                0,
                format!("{} below degree level; {coverage}", level.label()),
            ),
            None => CriterionScore::new(0, format!("education level unknown; {coverage}")),
        }
    }
}

/// Weighted blend of education fit, skill coverage and experience.
#[derive(Debug, Clone)]
pub struct BlendedQualifications {
    max_points: u32,
}

impl BlendedQualifications {
    pub fn new(max_points: u32) -> Self {
        Self { max_points }
    }
}

impl Criterion for BlendedQualifications {
    fn kind(&self) -> CriterionKind {
        CriterionKind::Qualifications
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> CriterionScore {
        let profile = ctx.profile;
        let job_text = job_text(ctx.job);
        let title = ctx
            .job
            .and_then(|job| job.title.as_deref())
            .map(normalize_text)
            .unwrap_or_default();

        let required_level = required_level(&job_text);
        let education = education_fit(profile.education_level, required_level);

        let coverage = skill_coverage(profile, ctx.job);

        let required_years = required_years(&title);
        let experience = if required_years <= 0.0 {
            1.0
        } else {
            profile
                .years_experience
                .map(|years| (years / required_years).min(1.0))
                .unwrap_or(0.0)
        };

        let blend = EDUCATION_WEIGHT * education
            + SKILLS_WEIGHT * coverage.ratio
            + EXPERIENCE_WEIGHT * experience;

        CriterionScore::new(
            fraction_of(self.max_points, blend),
            format!(
                "education {:.0}% against required {}; {}; experience {:.0}% of {required_years:.0} years",
                education * 100.0,
                required_level.label(),
                coverage.describe(),
                experience * 100.0
            ),
        )
    }
}

fn job_text(job: Option<&JobContext>) -> String {
    let Some(job) = job else {
        return String::new();
    };
    let mut text = String::new();
    for part in [job.title.as_deref(), job.description.as_deref()]
        .into_iter()
        .flatten()
    {
        text.push_str(&normalize_text(part));
        text.push(' ');
    }
    text
}

fn required_level(job_text: &str) -> EducationLevel {
    const LEVEL_KEYWORDS: &[(&str, EducationLevel)] = &[
        ("phd", EducationLevel::PhD),
        ("doctorate", EducationLevel::PhD),
        ("master", EducationLevel::Masters),
        ("bachelor", EducationLevel::Bachelors),
        ("degree", EducationLevel::Bachelors),
        ("diploma", EducationLevel::Diploma),
    ];

    LEVEL_KEYWORDS
        .iter()
        .find(|(keyword, _)| job_text.contains(keyword))
        .map(|(_, level)| *level)
        .unwrap_or(EducationLevel::Bachelors)
}

fn required_years(title: &str) -> f64 {
    const SENIORITY_YEARS: &[(&str, f64)] = &[
        ("principal", 8.0),
        ("staff", 8.0),
        ("director", 8.0),
        ("head", 8.0),
        ("senior", 5.0),
        ("lead", 5.0),
        ("junior", 0.0),
        ("intern", 0.0),
        ("graduate", 0.0),
        ("entry", 0.0),
    ];

    SENIORITY_YEARS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(_, years)| *years)
        .unwrap_or(2.0)
}

fn education_fit(level: Option<EducationLevel>, required: EducationLevel) -> f64 {
    // unknown level sits one rank below a diploma
    let rank = level.map(EducationLevel::rank).unwrap_or(0);
    let required = required.rank();
    if rank >= required {
        1.0
    } else {
        let shortfall = f64::from(required - rank);
        (1.0 - LEVEL_SHORTFALL_PENALTY * shortfall).max(0.0)
    }
}
