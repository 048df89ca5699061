use thiserror::Error;

use moodmatch_core::models::candidate::{CandidateId, Factor};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("duplicate candidate id: {0}")]
    DuplicateId(CandidateId),

    #[error("candidate {0} has an empty display name")]
    EmptyName(CandidateId),

    #[error("candidate {id} has a non-finite base score")]
    NonFiniteBase { id: CandidateId },

    #[error("candidate {id} has a non-finite {factor:?} effect")]
    NonFiniteEffect { id: CandidateId, factor: Factor },

    #[error("catalog has no {0} candidates")]
    MissingTier(&'static str),
}
