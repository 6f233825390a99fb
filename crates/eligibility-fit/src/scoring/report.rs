use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::criteria::{CriterionKind, CriterionScore};
use super::policy::{ScoringPolicy, Verdict};

/// Points per criterion; `None` for criteria outside the active scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifications: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diversity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills_bonus: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_bonus: Option<u32>,
}

impl ScoreBreakdown {
    pub fn get(&self, kind: CriterionKind) -> Option<u32> {
        match kind {
            CriterionKind::Salary => self.salary,
            CriterionKind::Qualifications => self.qualifications,
            CriterionKind::Diversity => self.diversity,
            CriterionKind::Support => self.support,
            CriterionKind::SkillsBonus => self.skills_bonus,
            CriterionKind::StrategicBonus => self.strategic_bonus,
        }
    }

    fn slot_mut(&mut self, kind: CriterionKind) -> &mut Option<u32> {
        match kind {
            CriterionKind::Salary => &mut self.salary,
            CriterionKind::Qualifications => &mut self.qualifications,
            CriterionKind::Diversity => &mut self.diversity,
            CriterionKind::Support => &mut self.support,
            CriterionKind::SkillsBonus => &mut self.skills_bonus,
            CriterionKind::StrategicBonus => &mut self.strategic_bonus,
        }
    }

    /// Present criteria in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (CriterionKind, u32)> + '_ {
        [
            CriterionKind::Salary,
            CriterionKind::Qualifications,
            CriterionKind::Diversity,
            CriterionKind::Support,
            CriterionKind::SkillsBonus,
            CriterionKind::StrategicBonus,
        ]
        .into_iter()
        .filter_map(|kind| self.get(kind).map(|points| (kind, points)))
    }

    pub fn sum(&self) -> u32 {
        self.entries().map(|(_, points)| points).sum()
    }
}

/// Result of one scoring call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub scheme: String,
    pub total: u8,
    pub total_raw: u32,
    pub max_points: u32,
    pub breakdown: ScoreBreakdown,
    pub verdict: Verdict,
    pub notes: Vec<String>,
}

/// Collects criterion results in evaluation order.
#[derive(Debug)]
pub struct ScoreReportBuilder {
    scheme: String,
    breakdown: ScoreBreakdown,
    notes: Vec<String>,
    note_index: BTreeMap<CriterionKind, usize>,
    total_raw: u32,
}

impl ScoreReportBuilder {
    pub fn new(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            breakdown: ScoreBreakdown::default(),
            notes: Vec::new(),
            note_index: BTreeMap::new(),
            total_raw: 0,
        }
    }

    pub fn record(&mut self, kind: CriterionKind, score: CriterionScore) -> &mut Self {
        let slot = self.breakdown.slot_mut(kind);
        // a repeated kind replaces its earlier points and note in place
        if let Some(previous) = slot.replace(score.points) {
            self.total_raw -= previous;
        }
        self.total_raw += score.points;

        match self.note_index.get(&kind) {
            Some(&index) => self.notes[index] = score.rationale,
            None => {
                self.note_index.insert(kind, self.notes.len());
                self.notes.push(score.rationale);
            }
        }
        self
    }

    pub fn finish(self, policy: &ScoringPolicy) -> ScoreReport {
        ScoreReport {
            scheme: self.scheme,
            total: policy.normalize(self.total_raw),
            total_raw: self.total_raw,
            max_points: policy.total_max_points(),
            breakdown: self.breakdown,
            verdict: policy.classify(self.total_raw),
            notes: self.notes,
        }
    }
}
