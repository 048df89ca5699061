use moodmatch_core::models::recommendation::ScoredCandidate;

use crate::rank::Ranked;

pub const PRIMARY_LIMIT: usize = 4;
pub const ADJUNCT_LIMIT: usize = 3;

/// Ranked candidates split by tag, each side still best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tiers {
    pub primary: Vec<ScoredCandidate>,
    pub adjunct: Vec<ScoredCandidate>,
}

impl Tiers {
    /// Keep the top [`PRIMARY_LIMIT`] primary and [`ADJUNCT_LIMIT`] adjunct
    /// candidates.
    pub fn truncate(mut self) -> Self {
        self.primary.truncate(PRIMARY_LIMIT);
        self.adjunct.truncate(ADJUNCT_LIMIT);
        self
    }
}

/// Split by the adjunct/situational tags. Every input lands in exactly one
/// tier; nothing is dropped here.
pub fn partition(ranked: Vec<Ranked<'_>>) -> Tiers {
    let (adjunct, primary): (Vec<_>, Vec<_>) = ranked
        .into_iter()
        .partition(|r| r.candidate.is_adjunct());
    Tiers {
        primary: primary.into_iter().map(|r| r.scored).collect(),
        adjunct: adjunct.into_iter().map(|r| r.scored).collect(),
    }
}
