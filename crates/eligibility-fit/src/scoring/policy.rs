use serde::{Deserialize, Serialize};

/// Three-way fit classification, ordered `Unlikely < Borderline < Likely`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Unlikely,
    Borderline,
    Likely,
}

impl Verdict {
    pub fn summary(&self) -> &'static str {
        match self {
            Verdict::Likely => "likely to meet the bar",
            Verdict::Borderline => "borderline; review recommended",
            Verdict::Unlikely => "unlikely to meet the bar",
        }
    }
}

/// Thresholds applied to the raw point total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pass_threshold: u32,
    borderline_threshold: u32,
    total_max_points: u32,
}

impl ScoringPolicy {
    pub fn new(
        pass_threshold: u32,
        borderline_threshold: u32,
        total_max_points: u32,
    ) -> Result<Self, PolicyError> {
        if pass_threshold <= borderline_threshold {
            return Err(PolicyError::ThresholdOrder {
                pass: pass_threshold,
                borderline: borderline_threshold,
            });
        }

        if pass_threshold > total_max_points {
            return Err(PolicyError::PassExceedsMaximum {
                pass: pass_threshold,
                max: total_max_points,
            });
        }

        Ok(Self {
            pass_threshold,
            borderline_threshold,
            total_max_points,
        })
    }

    /// Skips validation; only for presets whose constants are covered by tests.
    pub(crate) const fn preset(
        pass_threshold: u32,
        borderline_threshold: u32,
        total_max_points: u32,
    ) -> Self {
        Self {
            pass_threshold,
            borderline_threshold,
            total_max_points,
        }
    }

    pub fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }

    pub fn borderline_threshold(&self) -> u32 {
        self.borderline_threshold
    }

    pub fn total_max_points(&self) -> u32 {
        self.total_max_points
    }

    /// Lower bounds are inclusive.
    pub fn classify(&self, total_raw: u32) -> Verdict {
        if total_raw >= self.pass_threshold {
            Verdict::Likely
        } else if total_raw >= self.borderline_threshold {
            Verdict::Borderline
        } else {
            Verdict::Unlikely
        }
    }

    /// `round(total_raw / total_max_points * 100)`.
    pub fn normalize(&self, total_raw: u32) -> u8 {
        if self.total_max_points == 0 {
            return 0;
        }
        let percent =
            (f64::from(total_raw) / f64::from(self.total_max_points) * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("pass threshold {pass} must be greater than borderline threshold {borderline}")]
    ThresholdOrder { pass: u32, borderline: u32 },
    #[error("pass threshold {pass} exceeds the maximum attainable {max} points")]
    PassExceedsMaximum { pass: u32, max: u32 },
}
