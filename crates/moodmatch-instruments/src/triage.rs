//! Triage questions (history and preferences) and the typed profile the
//! ranking side reads instead of the raw answer map.

use serde::de::{DeserializeOwned, IntoDeserializer, value};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use moodmatch_core::models::answers::{TriageAnswers, TriageValue};

use crate::error::InstrumentError;
use crate::scoring::ValidationError;

/// Question ids, as they appear in answer maps.
pub mod ids {
    pub const MANIA: &str = "mania";
    pub const PANIC: &str = "panic";
    pub const SLEEP: &str = "sleep";
    pub const WEIGHT_GOAL: &str = "weight_goal";
    pub const SEXUAL_SIDE_EFFECTS: &str = "sexual_side_effects";
    pub const LOW_ENERGY: &str = "low_energy";
    pub const POOR_FOCUS: &str = "poor_focus";
    pub const JITTERY: &str = "jittery";
    pub const CHRONIC_PAIN: &str = "chronic_pain";
    pub const MIGRAINE: &str = "migraine";
    pub const SMOKING: &str = "smoking";
    pub const TREATMENT_HISTORY: &str = "treatment_history";
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum QuestionKind {
    YesNo,
    Choice { choices: Vec<Choice> },
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageQuestion {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
}

impl TriageQuestion {
    /// Whether `value` is an allowed answer to this question.
    pub fn accepts(&self, value: &TriageValue) -> bool {
        match (&self.kind, value) {
            (QuestionKind::YesNo, TriageValue::Flag(_)) => true,
            (QuestionKind::Choice { choices }, TriageValue::Choice(v)) => {
                choices.iter().any(|c| &c.value == v)
            }
            _ => false,
        }
    }
}

fn yes_no(id: &str, text: &str) -> TriageQuestion {
    TriageQuestion {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::YesNo,
    }
}

fn choice(id: &str, text: &str, choices: &[(&str, &str)]) -> TriageQuestion {
    TriageQuestion {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Choice {
            choices: choices
                .iter()
                .map(|(value, label)| Choice {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        },
    }
}

/// All triage questions, in presentation order.
///
/// There is no separate self-harm question; PHQ-9 item 9 covers it.
pub fn triage_questions() -> &'static [TriageQuestion] {
    static QUESTIONS: std::sync::LazyLock<Vec<TriageQuestion>> = std::sync::LazyLock::new(|| {
        vec![
            yes_no(
                ids::MANIA,
                "Have you ever had several days of unusually high energy or much less sleep AND were more talkative, impulsive, or had racing thoughts?",
            ),
            yes_no(
                ids::PANIC,
                "Do you have panic attacks (sudden surges of intense fear with palpitations, shortness of breath, or feeling out of control)?",
            ),
            choice(
                ids::SLEEP,
                "Which best fits your sleep right now?",
                &[
                    ("onset", "Trouble falling asleep"),
                    ("maintenance", "Waking up a lot / early morning awakenings"),
                    ("too_much", "Sleeping too much"),
                    ("none", "Sleep not a major problem"),
                ],
            ),
            choice(
                ids::WEIGHT_GOAL,
                "Weight priority (choose one):",
                &[
                    ("avoid_gain", "Avoid weight gain is very important"),
                    ("neutral", "Weight neutral is preferred"),
                    ("no", "Weight change is not a major concern"),
                ],
            ),
            choice(
                ids::SEXUAL_SIDE_EFFECTS,
                "Sexual side effects priority (choose one):",
                &[
                    ("avoid", "Avoid sexual side effects is very important"),
                    ("some", "Some concern"),
                    ("no", "Not a major concern"),
                ],
            ),
            yes_no(
                ids::LOW_ENERGY,
                "Is low energy/fatigue one of your top 2 problems?",
            ),
            yes_no(
                ids::POOR_FOCUS,
                "Is poor focus/concentration one of your top 2 problems?",
            ),
            yes_no(
                ids::JITTERY,
                "Do you get jittery/anxious easily with caffeine or stimulants?",
            ),
            yes_no(
                ids::CHRONIC_PAIN,
                "Do you have significant chronic pain (neuropathic pain, fibromyalgia, chronic back/neck pain) you'd like treated too?",
            ),
            yes_no(
                ids::MIGRAINE,
                "Do you have frequent migraines/headaches you'd like to reduce?",
            ),
            yes_no(
                ids::SMOKING,
                "Do you use nicotine (smoking/vaping) and want help quitting?",
            ),
            choice(
                ids::TREATMENT_HISTORY,
                "Have you tried antidepressants before?",
                &[
                    ("naive", "No / first time"),
                    ("worked", "Yes—worked in the past"),
                    ("failed", "Yes—didn't work or side effects stopped it"),
                ],
            ),
        ]
    });
    &QUESTIONS
}

/// Look up a triage question by id.
pub fn question(id: &str) -> Result<&'static TriageQuestion, InstrumentError> {
    triage_questions()
        .iter()
        .find(|q| q.id == id)
        .ok_or_else(|| InstrumentError::UnknownQuestion(id.to_string()))
}

/// Check every recorded triage answer against its question's choice set.
pub fn validate_triage(answers: &TriageAnswers) -> Vec<ValidationError> {
    answers
        .iter()
        .filter_map(|(id, value)| value.map(|v| (id, v)))
        .filter_map(|(id, value)| {
            let shown = match value {
                TriageValue::Flag(flag) => flag.to_string(),
                TriageValue::Choice(choice) => choice.clone(),
            };
            match question(id) {
                Err(_) => Some(ValidationError {
                    question_id: id.to_string(),
                    value: shown,
                    message: format!("unknown triage question '{id}'"),
                }),
                Ok(q) if !q.accepts(value) => Some(ValidationError {
                    question_id: id.to_string(),
                    message: format!("'{shown}' is not a valid answer to '{id}'"),
                    value: shown,
                }),
                Ok(_) => None,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SleepPattern {
    Onset,
    Maintenance,
    TooMuch,
    #[serde(rename = "none")]
    NoProblem,
}

impl SleepPattern {
    /// Trouble falling or staying asleep.
    pub fn is_insomnia(self) -> bool {
        matches!(self, Self::Onset | Self::Maintenance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightGoal {
    AvoidGain,
    Neutral,
    #[serde(rename = "no")]
    NoConcern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SexualSideEffects {
    Avoid,
    #[serde(rename = "some")]
    SomeConcern,
    #[serde(rename = "no")]
    NoConcern,
}

impl SexualSideEffects {
    pub fn is_concern(self) -> bool {
        matches!(self, Self::Avoid | Self::SomeConcern)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentHistory {
    Naive,
    Worked,
    Failed,
}

/// Typed view over [`TriageAnswers`].
///
/// Unanswered questions, a "no", and values outside a question's choice set
/// all read as "no signal": `false` for flags, `None` for choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TriageProfile {
    pub mania: bool,
    pub panic: bool,
    pub sleep: Option<SleepPattern>,
    pub weight_goal: Option<WeightGoal>,
    pub sexual_side_effects: Option<SexualSideEffects>,
    pub low_energy: bool,
    pub poor_focus: bool,
    pub jittery: bool,
    pub chronic_pain: bool,
    pub migraine: bool,
    pub smoking: bool,
    pub treatment_history: Option<TreatmentHistory>,
}

impl TriageProfile {
    pub fn from_answers(answers: &TriageAnswers) -> Self {
        Self {
            mania: answers.is_yes(ids::MANIA),
            panic: answers.is_yes(ids::PANIC),
            sleep: parse_choice(answers, ids::SLEEP),
            weight_goal: parse_choice(answers, ids::WEIGHT_GOAL),
            sexual_side_effects: parse_choice(answers, ids::SEXUAL_SIDE_EFFECTS),
            low_energy: answers.is_yes(ids::LOW_ENERGY),
            poor_focus: answers.is_yes(ids::POOR_FOCUS),
            jittery: answers.is_yes(ids::JITTERY),
            chronic_pain: answers.is_yes(ids::CHRONIC_PAIN),
            migraine: answers.is_yes(ids::MIGRAINE),
            smoking: answers.is_yes(ids::SMOKING),
            treatment_history: parse_choice(answers, ids::TREATMENT_HISTORY),
        }
    }

    pub fn has_insomnia(&self) -> bool {
        self.sleep.is_some_and(SleepPattern::is_insomnia)
    }
}

/// Read a choice answer through the enum's own serde wire names.
fn parse_choice<T: DeserializeOwned>(answers: &TriageAnswers, id: &str) -> Option<T> {
    let raw = answers.choice(id)?;
    let parsed: Result<T, value::Error> = T::deserialize(raw.into_deserializer());
    match parsed {
        Ok(choice) => Some(choice),
        Err(e) => {
            tracing::debug!(
                question = id,
                value = raw,
                error = %e,
                "unrecognized triage choice ignored"
            );
            None
        }
    }
}
