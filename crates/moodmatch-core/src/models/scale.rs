use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The two symptom scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Scale {
    /// PHQ-9, depression-type. Scale A.
    Phq9,
    /// GAD-7, anxiety-type. Scale B.
    Gad7,
}

/// Per-scale sums. `phq9` is in `0..=27`, `gad7` in `0..=21`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleTotals {
    pub phq9: u32,
    pub gad7: u32,
}

impl ScaleTotals {
    /// Combined total, `0..=48`.
    pub fn combined(&self) -> u32 {
        self.phq9 + self.gad7
    }
}

/// Severity band of a single scale, ordered from least to most severe.
///
/// GAD-7 never produces [`SeverityBand::ModeratelySevere`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl SeverityBand {
    pub fn label(self) -> &'static str {
        match self {
            SeverityBand::Minimal => "Minimal",
            SeverityBand::Mild => "Mild",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::ModeratelySevere => "Moderately severe",
            SeverityBand::Severe => "Severe",
        }
    }
}

/// Routing band over the combined total. Not an official scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OverallBand {
    MinimalMild,
    MildModerate,
    Moderate,
    ModerateSevere,
}

impl OverallBand {
    pub fn label(self) -> &'static str {
        match self {
            OverallBand::MinimalMild => "Minimal–mild",
            OverallBand::MildModerate => "Mild–moderate",
            OverallBand::Moderate => "Moderate",
            OverallBand::ModerateSevere => "Moderate–severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBands {
    pub phq9: SeverityBand,
    pub gad7: SeverityBand,
    pub overall: OverallBand,
}

/// Which scale's total exceeds the other by more than the fixed margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Dominance {
    /// GAD-7 (Scale B) dominant.
    Anxiety,
    /// PHQ-9 (Scale A) dominant.
    Depression,
    Mixed,
}

impl Dominance {
    pub fn title(self) -> &'static str {
        match self {
            Dominance::Anxiety => "Anxiety-dominant pattern (GAD-7 higher)",
            Dominance::Depression => "Depression-dominant pattern (PHQ-9 higher)",
            Dominance::Mixed => "Mixed anxiety + depression pattern",
        }
    }
}
