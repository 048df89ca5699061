//! Per-evaluation factor weights.
//!
//! The two primary-symptom weights scale with the matching total; every
//! other weight is a fixed multiplier picked by a triage answer. The
//! constants are part of the scoring contract.

use moodmatch_core::models::scale::{Dominance, ScaleTotals};
use moodmatch_instruments::Instrument;
use moodmatch_instruments::instruments::{gad7::Gad7, phq9::Phq9};
use moodmatch_instruments::triage::{SexualSideEffects, SleepPattern, TriageProfile, WeightGoal};

use crate::catalog::FactorTable;

pub type WeightVector = FactorTable;

const DOMINANT: f64 = 2.2;
const MIXED: f64 = 1.6;
const NON_DOMINANT: f64 = 1.2;

fn pattern_multiplier(pattern: Dominance, favoured: Dominance) -> f64 {
    if pattern == favoured {
        DOMINANT
    } else if pattern == Dominance::Mixed {
        MIXED
    } else {
        NON_DOMINANT
    }
}

fn flag(set: bool, when_set: f64) -> f64 {
    if set { when_set } else { 1.0 }
}

pub fn compute(totals: ScaleTotals, pattern: Dominance, profile: &TriageProfile) -> WeightVector {
    let gad7_max = f64::from(Gad7.max_total());
    let phq9_max = f64::from(Phq9.max_total());

    FactorTable {
        anxiety: pattern_multiplier(pattern, Dominance::Anxiety)
            * (1.0 + f64::from(totals.gad7) / gad7_max),
        depression: pattern_multiplier(pattern, Dominance::Depression)
            * (1.0 + f64::from(totals.phq9) / phq9_max),
        panic: flag(profile.panic, 1.8),
        sleep_help: match profile.sleep {
            Some(SleepPattern::Onset | SleepPattern::Maintenance) => 1.8,
            Some(SleepPattern::TooMuch) => 1.2,
            _ => 1.0,
        },
        energy: flag(profile.low_energy, 1.7),
        focus: flag(profile.poor_focus, 1.5),
        pain: flag(profile.chronic_pain, 1.8),
        migraine: flag(profile.migraine, 1.6),
        smoking: flag(profile.smoking, 1.8),
        weight: match profile.weight_goal {
            Some(WeightGoal::AvoidGain) => 2.0,
            Some(WeightGoal::Neutral) => 1.3,
            _ => 0.9,
        },
        sexual: match profile.sexual_side_effects {
            Some(SexualSideEffects::Avoid) => 2.0,
            Some(SexualSideEffects::SomeConcern) => 1.3,
            _ => 0.9,
        },
        jitteriness_risk: flag(profile.jittery, 2.0),
    }
}
