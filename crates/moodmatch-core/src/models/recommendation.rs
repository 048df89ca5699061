use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::candidate::CandidateId;
use super::scale::{Dominance, ScaleTotals, SeverityBands};

/// A catalog candidate after scoring, with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredCandidate {
    pub candidate_id: CandidateId,
    pub display_name: String,
    /// Match score rounded to one decimal place.
    pub score: f64,
    /// Short justifications, deduplicated, in rule order.
    pub rationale: Vec<String>,
    /// Catalog cautions followed by any rule-triggered cautions.
    pub cautions: Vec<String>,
}

/// Everything the rendering side needs from one evaluation.
///
/// All list fields are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationResult {
    pub totals: ScaleTotals,
    pub bands: SeverityBands,
    pub pattern: Dominance,
    pub safety_flags: Vec<String>,
    pub must_discuss_first: Vec<String>,
    pub general_cautions: Vec<String>,
    pub next_steps: Vec<String>,
    /// At most four primary options, best first.
    pub primary_tier: Vec<ScoredCandidate>,
    /// At most three add-on or situational options, best first.
    pub adjunct_tier: Vec<ScoredCandidate>,
}

impl RecommendationResult {
    pub fn has_urgent_safety_flag(&self) -> bool {
        !self.safety_flags.is_empty()
    }
}
