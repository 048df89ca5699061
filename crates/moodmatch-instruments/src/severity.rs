//! Severity bands and dominance pattern. Pure functions of the totals.

use moodmatch_core::models::scale::{
    Dominance, OverallBand, Scale, ScaleTotals, SeverityBand, SeverityBands,
};

/// A scale must lead the other by more than this to dominate.
pub const DOMINANCE_MARGIN: u32 = 2;

pub fn severity_band(total: u32, scale: Scale) -> SeverityBand {
    match (scale, total) {
        (_, 0..=4) => SeverityBand::Minimal,
        (_, 5..=9) => SeverityBand::Mild,
        (_, 10..=14) => SeverityBand::Moderate,
        (Scale::Phq9, 15..=19) => SeverityBand::ModeratelySevere,
        _ => SeverityBand::Severe,
    }
}

/// Band over `phq9 + gad7` (0–48).
pub fn overall_band(combined: u32) -> OverallBand {
    match combined {
        0..=9 => OverallBand::MinimalMild,
        10..=19 => OverallBand::MildModerate,
        20..=32 => OverallBand::Moderate,
        _ => OverallBand::ModerateSevere,
    }
}

pub fn dominance(totals: ScaleTotals) -> Dominance {
    if totals.gad7 > totals.phq9 + DOMINANCE_MARGIN {
        Dominance::Anxiety
    } else if totals.phq9 > totals.gad7 + DOMINANCE_MARGIN {
        Dominance::Depression
    } else {
        Dominance::Mixed
    }
}

pub fn classify(totals: ScaleTotals) -> SeverityBands {
    SeverityBands {
        phq9: severity_band(totals.phq9, Scale::Phq9),
        gad7: severity_band(totals.gad7, Scale::Gad7),
        overall: overall_band(totals.combined()),
    }
}
