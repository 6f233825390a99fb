use super::{Criterion, CriterionKind, CriterionScore, ScoringContext};

/// Full bonus when the title or a requirement names a shortage occupation.
#[derive(Debug, Clone)]
pub struct ShortageBonus {
    max_points: u32,
}

impl ShortageBonus {
    pub fn new(max_points: u32) -> Self {
        Self { max_points }
    }
}

impl Criterion for ShortageBonus {
    fn kind(&self) -> CriterionKind {
        CriterionKind::SkillsBonus
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, ctx: &ScoringContext<'_>) -> CriterionScore {
        let Some(job) = ctx.job else {
            return CriterionScore::new(0, "no job context; shortage occupation bonus not applied");
        };

        let texts = job
            .title
            .as_deref()
            .into_iter()
            .chain(job.requirements.iter().map(String::as_str));

        match ctx.benchmarks.shortage_match(texts) {
            Some(phrase) => CriterionScore::new(
                self.max_points,
                format!("role matches shortage occupation '{phrase}'"),
            ),
            None => CriterionScore::new(0, "role not on the shortage occupation list"),
        }
    }
}

/// Placeholder for program-participation inputs; awards nothing until such data exists.
#[derive(Debug, Clone)]
pub struct StrategicBonus {
    max_points: u32,
}

impl StrategicBonus {
    pub fn new(max_points: u32) -> Self {
        Self { max_points }
    }
}

impl Criterion for StrategicBonus {
    fn kind(&self) -> CriterionKind {
        CriterionKind::StrategicBonus
    }

    fn max_points(&self) -> u32 {
        self.max_points
    }

    fn evaluate(&self, _ctx: &ScoringContext<'_>) -> CriterionScore {
        CriterionScore::new(
            0,
            "no strategic program participation data; bonus not applied",
        )
    }
}
