use moodmatch_core::models::recommendation::ScoredCandidate;

use crate::catalog::Candidate;
use crate::rationale::build_rationale;
use crate::rules::{ADJUSTMENTS, RuleContext, matching_adjustments};
use crate::weights::WeightVector;

/// A scored candidate together with the catalog entry it came from.
#[derive(Debug, Clone)]
pub struct Ranked<'a> {
    pub candidate: &'a Candidate,
    pub scored: ScoredCandidate,
}

/// Round half up to one decimal place (`-0.25` rounds to `-0.2`).
pub fn round_to_tenth(score: f64) -> f64 {
    (score * 10.0 + 0.5).floor() / 10.0
}

/// Weighted match score before adjustments: base plus the weighted effects,
/// accumulated in factor order.
pub fn weighted_score(candidate: &Candidate, weights: &WeightVector) -> f64 {
    candidate
        .effects
        .iter()
        .fold(candidate.base_score, |score, (factor, effect)| {
            score + weights.get(factor) * effect
        })
}

pub fn score_candidate(
    candidate: &Candidate,
    weights: &WeightVector,
    ctx: &RuleContext<'_>,
) -> ScoredCandidate {
    let mut score = weighted_score(candidate, weights);
    let mut cautions: Vec<String> = candidate.cautions.iter().map(|c| c.to_string()).collect();

    for rule in matching_adjustments(&ADJUSTMENTS, candidate.id, ctx) {
        score += rule.delta;
        cautions.push(rule.caution.to_string());
    }

    let scored = ScoredCandidate {
        candidate_id: candidate.id,
        display_name: candidate.display_name.to_string(),
        score: round_to_tenth(score),
        rationale: build_rationale(candidate, ctx),
        cautions,
    };
    tracing::debug!(candidate = %candidate.id, score = scored.score, "scored candidate");
    scored
}

/// Score every candidate once and sort best first. The sort is stable, so
/// equal scores keep catalog order.
pub fn rank<'a>(
    candidates: &'a [Candidate],
    weights: &WeightVector,
    ctx: &RuleContext<'_>,
) -> Vec<Ranked<'a>> {
    let mut ranked: Vec<Ranked<'a>> = candidates
        .iter()
        .map(|candidate| Ranked {
            candidate,
            scored: score_candidate(candidate, weights, ctx),
        })
        .collect();
    ranked.sort_by(|a, b| b.scored.score.total_cmp(&a.scored.score));
    ranked
}
