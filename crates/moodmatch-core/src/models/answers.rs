use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Responses to the symptom-scale items, keyed by item id.
///
/// A key that is present with `None` is a declared but unanswered item.
/// Values are Likert responses in `0..=3`; the scoring side tolerates
/// anything else (see `moodmatch_instruments::scoring`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomAnswers(BTreeMap<String, Option<u8>>);

impl SymptomAnswers {
    /// Every id present, none answered.
    pub fn blank<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self(ids.into_iter().map(|id| (id.to_string(), None)).collect())
    }

    pub fn set(&mut self, id: impl Into<String>, value: u8) {
        self.0.insert(id.into(), Some(value));
    }

    pub fn clear(&mut self, id: &str) {
        if let Some(slot) = self.0.get_mut(id) {
            *slot = None;
        }
    }

    /// The recorded response, or `None` if the item is absent or unanswered.
    pub fn get(&self, id: &str) -> Option<u8> {
        self.0.get(id).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<u8>)> {
        self.0.iter().map(|(id, v)| (id.as_str(), *v))
    }

    /// Declared ids that have no response yet.
    pub fn unanswered(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(id, _)| id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for SymptomAnswers {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), Some(v))).collect())
    }
}

/// A single triage answer: yes/no questions carry a flag, choice questions
/// carry the choice's wire value (e.g. `"onset"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum TriageValue {
    Flag(bool),
    Choice(String),
}

impl From<bool> for TriageValue {
    fn from(value: bool) -> Self {
        TriageValue::Flag(value)
    }
}

impl From<&str> for TriageValue {
    fn from(value: &str) -> Self {
        TriageValue::Choice(value.to_string())
    }
}

/// Answers to the triage questions, keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageAnswers(BTreeMap<String, Option<TriageValue>>);

impl TriageAnswers {
    pub fn blank<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self(ids.into_iter().map(|id| (id.to_string(), None)).collect())
    }

    pub fn set(&mut self, id: impl Into<String>, value: impl Into<TriageValue>) {
        self.0.insert(id.into(), Some(value.into()));
    }

    pub fn clear(&mut self, id: &str) {
        if let Some(slot) = self.0.get_mut(id) {
            *slot = None;
        }
    }

    pub fn get(&self, id: &str) -> Option<&TriageValue> {
        self.0.get(id).and_then(Option::as_ref)
    }

    /// `true` only for an explicit yes. Unanswered, no, and non-flag values
    /// are all "no signal".
    pub fn is_yes(&self, id: &str) -> bool {
        matches!(self.get(id), Some(TriageValue::Flag(true)))
    }

    /// The chosen value of a choice question, if one was recorded.
    pub fn choice(&self, id: &str) -> Option<&str> {
        match self.get(id) {
            Some(TriageValue::Choice(value)) => Some(value),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&TriageValue>)> {
        self.0.iter().map(|(id, v)| (id.as_str(), v.as_ref()))
    }

    pub fn unanswered(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, v)| v.is_none())
            .map(|(id, _)| id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }
}

impl<K: Into<String>, V: Into<TriageValue>> FromIterator<(K, V)> for TriageAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}
