use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::answers::{SymptomAnswers, TriageAnswers};
use crate::error::CoreError;

/// Where a questionnaire session is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Phase {
    #[default]
    Answering,
    Submitted,
}

/// One user's pass through the questionnaire.
///
/// Owned by the caller. The engine only ever reads a session; it never
/// holds on to one between evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub symptoms: SymptomAnswers,
    pub triage: TriageAnswers,
    #[serde(default)]
    pub phase: Phase,
}

impl Session {
    /// A session with every declared question present and unanswered.
    pub fn blank<'a>(
        symptom_ids: impl IntoIterator<Item = &'a str>,
        triage_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            symptoms: SymptomAnswers::blank(symptom_ids),
            triage: TriageAnswers::blank(triage_ids),
            phase: Phase::Answering,
        }
    }

    /// Ids of declared questions still lacking an answer, symptoms first.
    pub fn missing_answers(&self) -> Vec<String> {
        self.symptoms
            .unanswered()
            .chain(self.triage.unanswered())
            .map(str::to_string)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.symptoms.unanswered().next().is_none() && self.triage.unanswered().next().is_none()
    }

    /// Move to [`Phase::Submitted`]. Fails if any declared question is
    /// unanswered or the session was already submitted.
    pub fn submit(&mut self) -> Result<(), CoreError> {
        if self.phase == Phase::Submitted {
            return Err(CoreError::AlreadySubmitted);
        }
        let missing = self.missing_answers();
        if !missing.is_empty() {
            return Err(CoreError::Incomplete { missing });
        }
        self.phase = Phase::Submitted;
        Ok(())
    }

    /// Start over: same declared questions, no answers, back to answering.
    pub fn reset(&self) -> Self {
        Self::blank(
            self.symptoms.iter().map(|(id, _)| id),
            self.triage.iter().map(|(id, _)| id),
        )
    }
}
