use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use moodmatch_core::models::answers::SymptomAnswers;
use moodmatch_core::models::scale::{Scale, ScaleTotals};

use crate::Instrument;
use crate::instruments::{gad7::Gad7, phq9::Phq9};

/// Highest Likert response ("Nearly every day").
pub const MAX_RESPONSE: u8 = 3;

/// Defines the valid range for a single item response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseRange {
    pub min: u8,
    pub max: u8,
}

impl ResponseRange {
    pub const LIKERT: ResponseRange = ResponseRange {
        min: 0,
        max: MAX_RESPONSE,
    };

    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One selectable response to a scale item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResponseOption {
    pub label: &'static str,
    pub value: u8,
}

/// Frequency over the past two weeks, shared by both scales.
pub const LIKERT_OPTIONS: [ResponseOption; 4] = [
    ResponseOption {
        label: "Not at all",
        value: 0,
    },
    ResponseOption {
        label: "Several days",
        value: 1,
    },
    ResponseOption {
        label: "More than half the days",
        value: 2,
    },
    ResponseOption {
        label: "Nearly every day",
        value: 3,
    },
];

/// A single scale item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub scale: Scale,
    pub text: String,
}

/// A problem with one recorded answer.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub question_id: String,
    pub value: String,
    pub message: String,
}

/// Sum both scales. Unanswered items contribute 0.
pub fn aggregate(answers: &SymptomAnswers) -> ScaleTotals {
    ScaleTotals {
        phq9: Phq9.total(answers),
        gad7: Gad7.total(answers),
    }
}

/// Validate symptom answers against both scales. Ids that belong to
/// neither scale are reported too.
pub fn validate_symptoms(answers: &SymptomAnswers) -> Vec<ValidationError> {
    let mut errors = Phq9.validate_answers(answers);
    errors.extend(Gad7.validate_answers(answers));

    for (id, value) in answers.iter() {
        if !Phq9.has_item(id) && !Gad7.has_item(id) {
            errors.push(ValidationError {
                question_id: id.to_string(),
                value: value.map(|v| v.to_string()).unwrap_or_default(),
                message: format!("unknown symptom item '{id}'"),
            });
        }
    }
    errors
}
