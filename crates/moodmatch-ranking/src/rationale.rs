use moodmatch_core::models::candidate::Tag;

use crate::catalog::Candidate;
use crate::rules::{RuleContext, Signal};

pub const FALLBACK: &str = "matches some of your priorities";

pub struct RationaleRule {
    pub tag: Tag,
    pub when: Signal,
    pub text: &'static str,
}

pub const RATIONALE_RULES: [RationaleRule; 8] = [
    RationaleRule {
        tag: Tag::FirstLine,
        when: Signal::Always,
        text: "common first-line option",
    },
    RationaleRule {
        tag: Tag::Anxiety,
        when: Signal::AnxietyInPattern,
        text: "targets anxiety",
    },
    RationaleRule {
        tag: Tag::Panic,
        when: Signal::Panic,
        text: "used for panic symptoms",
    },
    RationaleRule {
        tag: Tag::Pain,
        when: Signal::ChronicPain,
        text: "can overlap with chronic pain relief",
    },
    RationaleRule {
        tag: Tag::SexualFriendly,
        when: Signal::SexualSideEffectConcern,
        text: "often discussed when avoiding sexual side effects",
    },
    RationaleRule {
        tag: Tag::Smoking,
        when: Signal::Smoking,
        text: "has smoking-cessation use",
    },
    RationaleRule {
        tag: Tag::Sleep,
        when: Signal::Insomnia,
        text: "sleep-supporting profile",
    },
    RationaleRule {
        tag: Tag::Situational,
        when: Signal::Panic,
        text: "can help physical symptoms in specific situations",
    },
];

/// Justifications for `candidate`, in rule order and without repeats.
/// Never empty. Has no effect on the score.
pub fn build_rationale(candidate: &Candidate, ctx: &RuleContext<'_>) -> Vec<String> {
    let mut reasons: Vec<String> = Vec::new();
    for rule in &RATIONALE_RULES {
        if candidate.has_tag(rule.tag)
            && rule.when.holds(ctx)
            && !reasons.iter().any(|r| r == rule.text)
        {
            reasons.push(rule.text.to_string());
        }
    }
    if reasons.is_empty() {
        reasons.push(FALLBACK.to_string());
    }
    reasons
}
