//! moodmatch-instruments
//!
//! Questionnaire definitions and the scoring that sits directly on top of
//! them: scale totals, severity bands, dominance pattern, safety checks and
//! the typed view over triage answers. Pure data and pure functions.

pub mod error;
pub mod instruments;
pub mod safety;
pub mod scoring;
pub mod severity;
pub mod triage;

use moodmatch_core::models::answers::SymptomAnswers;
use moodmatch_core::models::scale::{Scale, SeverityBand};
use moodmatch_core::models::session::Session;
use scoring::{Item, MAX_RESPONSE, ResponseRange, ValidationError};

/// Trait implemented by each symptom scale.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn scale(&self) -> Scale;

    /// The items of this scale, in presentation order.
    fn items(&self) -> &[Item];

    /// Map a total onto this scale's severity band.
    fn severity(&self, total: u32) -> SeverityBand;

    fn has_item(&self, id: &str) -> bool {
        self.items().iter().any(|item| item.id == id)
    }

    fn max_total(&self) -> u32 {
        self.items().len() as u32 * u32::from(MAX_RESPONSE)
    }

    /// Sum this scale's recorded responses. Unanswered items count as 0 and
    /// out-of-range responses are clamped to the maximum so the total stays
    /// within `0..=max_total()`.
    fn total(&self, answers: &SymptomAnswers) -> u32 {
        self.items()
            .iter()
            .filter_map(|item| answers.get(&item.id).map(|v| (item, v)))
            .map(|(item, value)| {
                if value > MAX_RESPONSE {
                    tracing::warn!(
                        instrument = self.id(),
                        item = %item.id,
                        value,
                        "response out of range; clamped"
                    );
                }
                u32::from(value.min(MAX_RESPONSE))
            })
            .sum()
    }

    /// Validate recorded responses against this instrument's range.
    fn validate_answers(&self, answers: &SymptomAnswers) -> Vec<ValidationError> {
        let range = ResponseRange::LIKERT;
        self.items()
            .iter()
            .filter_map(|item| answers.get(&item.id).map(|v| (item, v)))
            .filter(|(_, value)| !range.contains(*value))
            .map(|(item, value)| ValidationError {
                question_id: item.id.clone(),
                value: value.to_string(),
                message: format!(
                    "{}: item {} response {} is outside range [{}, {}]",
                    self.name(),
                    item.id,
                    value,
                    range.min,
                    range.max,
                ),
            })
            .collect()
    }
}

/// Return all registered instruments, Scale A first.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// A fresh session covering every declared symptom item and triage question.
pub fn new_session() -> Session {
    let instruments = all_instruments();
    let symptom_ids: Vec<&str> = instruments
        .iter()
        .flat_map(|i| i.items())
        .map(|item| item.id.as_str())
        .collect();
    Session::blank(
        symptom_ids,
        triage::triage_questions().iter().map(|q| q.id.as_str()),
    )
}

/// Like [`get_instrument`], but an unknown ID is an error.
pub fn require_instrument(id: &str) -> Result<Box<dyn Instrument>, error::InstrumentError> {
    get_instrument(id).ok_or_else(|| error::InstrumentError::UnknownInstrument(id.to_string()))
}
