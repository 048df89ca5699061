//! Conditions over the triage profile and pattern, and the candidate-specific
//! score adjustments built on them.

use serde::Serialize;

use moodmatch_core::models::candidate::CandidateId;
use moodmatch_core::models::scale::Dominance;
use moodmatch_instruments::triage::{TriageProfile, WeightGoal};

/// What the rules see of one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub profile: &'a TriageProfile,
    pub pattern: Dominance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    Always,
    /// Anxiety-dominant or mixed pattern.
    AnxietyInPattern,
    Panic,
    ChronicPain,
    /// Avoiding, or somewhat concerned about, sexual side effects.
    SexualSideEffectConcern,
    Smoking,
    /// Trouble falling or staying asleep.
    Insomnia,
    /// Anxiety-dominant or panic, together with stimulant jitteriness.
    ActivationRisk,
    AvoidWeightGain,
}

impl Signal {
    pub fn holds(self, ctx: &RuleContext<'_>) -> bool {
        let p = ctx.profile;
        match self {
            Signal::Always => true,
            Signal::AnxietyInPattern => {
                matches!(ctx.pattern, Dominance::Anxiety | Dominance::Mixed)
            }
            Signal::Panic => p.panic,
            Signal::ChronicPain => p.chronic_pain,
            Signal::SexualSideEffectConcern => {
                p.sexual_side_effects.is_some_and(|s| s.is_concern())
            }
            Signal::Smoking => p.smoking,
            Signal::Insomnia => p.has_insomnia(),
            Signal::ActivationRisk => (ctx.pattern == Dominance::Anxiety || p.panic) && p.jittery,
            Signal::AvoidWeightGain => p.weight_goal == Some(WeightGoal::AvoidGain),
        }
    }
}

/// A score change and extra caution for one candidate when `when` holds.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Adjustment {
    pub candidate: CandidateId,
    pub when: Signal,
    pub delta: f64,
    pub caution: &'static str,
}

/// Evaluated in order against every candidate.
pub const ADJUSTMENTS: [Adjustment; 3] = [
    Adjustment {
        candidate: CandidateId::Bupropion,
        when: Signal::ActivationRisk,
        delta: -8.0,
        caution: "May be too activating if anxiety/panic + jitteriness are prominent.",
    },
    Adjustment {
        candidate: CandidateId::Bupropion,
        when: Signal::Insomnia,
        delta: -4.0,
        caution: "Can worsen insomnia for some (especially if taken later in the day).",
    },
    Adjustment {
        candidate: CandidateId::Mirtazapine,
        when: Signal::AvoidWeightGain,
        delta: -10.0,
        caution: "Often increases appetite/weight.",
    },
];

/// Adjustments that fire for `candidate` in this context, in order.
pub fn matching_adjustments<'r>(
    rules: &'r [Adjustment],
    candidate: CandidateId,
    ctx: &RuleContext<'_>,
) -> impl Iterator<Item = &'r Adjustment> {
    rules
        .iter()
        .filter(move |rule| rule.candidate == candidate && rule.when.holds(ctx))
}
