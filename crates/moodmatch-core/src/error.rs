use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("session is incomplete; unanswered: {}", missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error("session has already been submitted")]
    AlreadySubmitted,
}
