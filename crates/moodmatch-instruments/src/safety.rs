//! Safety checks. These never touch candidate scores; their messages are
//! surfaced verbatim in the result.

use moodmatch_core::models::answers::SymptomAnswers;

use crate::instruments::phq9::SELF_HARM_ITEM;
use crate::triage::TriageProfile;

pub const URGENT_SELF_HARM: &str = "Safety: PHQ-9 item 9 indicates self-harm thoughts — seek urgent help now (U.S.: call/text 988, or emergency services).";

pub const MOOD_CYCLING_EVALUATION: &str = "Possible bipolar-spectrum features: clinician evaluation is critical before antidepressants; antidepressant-only can worsen cycling for some people.";

pub const MOOD_STABILIZER_DISCUSSION: &str = "Discuss mood stabilizer / atypical antipsychotic evaluation if bipolar disorder is suspected.";

pub const MOOD_CYCLING_CAUTION: &str = "Because bipolar-spectrum symptoms are possible, medication choice must be clinician-led; antidepressant monotherapy may be risky.";

/// Any non-zero response to the self-harm item raises the flag, not just
/// high frequencies.
pub fn self_harm_flag(answers: &SymptomAnswers) -> bool {
    answers.get(SELF_HARM_ITEM).is_some_and(|v| v >= 1)
}

/// Urgent safety messages, empty when nothing is flagged.
pub fn safety_flags(answers: &SymptomAnswers) -> Vec<String> {
    let mut flags = Vec::new();
    if self_harm_flag(answers) {
        flags.push(URGENT_SELF_HARM.to_string());
    }
    flags
}

/// Advisory raised by a history of elevated mood/energy episodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodCyclingAdvisory {
    pub must_discuss_first: Vec<String>,
    pub caution: Option<String>,
}

pub fn mood_cycling_advisory(profile: &TriageProfile) -> MoodCyclingAdvisory {
    if !profile.mania {
        return MoodCyclingAdvisory::default();
    }
    MoodCyclingAdvisory {
        must_discuss_first: vec![
            MOOD_CYCLING_EVALUATION.to_string(),
            MOOD_STABILIZER_DISCUSSION.to_string(),
        ],
        caution: Some(MOOD_CYCLING_CAUTION.to_string()),
    }
}
