use std::path::Path;

use serde::Deserialize;

use moodmatch_core::models::answers::{SymptomAnswers, TriageAnswers};
use moodmatch_core::models::session::Session;
use moodmatch_instruments::new_session;
use moodmatch_instruments::scoring::validate_symptoms;
use moodmatch_instruments::triage::validate_triage;

/// On-disk answer sheet. Either section may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnswerSheet {
    symptoms: SymptomAnswers,
    triage: TriageAnswers,
}

/// Parse an answer sheet (`{ "symptoms": {...}, "triage": {...} }`) onto a
/// fresh session, so every declared question is present even when the
/// sheet leaves it out.
pub fn parse_sheet(json: &str) -> eyre::Result<Session> {
    let sheet: AnswerSheet = serde_json::from_str(json)?;
    let mut session = new_session();

    for (id, value) in sheet.symptoms.iter() {
        if let Some(value) = value {
            session.symptoms.set(id, value);
        }
    }
    for (id, value) in sheet.triage.iter() {
        if let Some(value) = value {
            session.triage.set(id, value.clone());
        }
    }

    for problem in validate_symptoms(&session.symptoms)
        .into_iter()
        .chain(validate_triage(&session.triage))
    {
        tracing::warn!(question = %problem.question_id, "{problem}");
    }
    Ok(session)
}

pub fn load_sheet(path: &Path) -> eyre::Result<Session> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    parse_sheet(&contents)
}

/// The completeness check the engine leaves to its caller. Moves the
/// session to submitted, or lists what is still unanswered.
pub fn submit(session: &mut Session) -> eyre::Result<()> {
    session
        .submit()
        .map_err(|e| eyre::eyre!("cannot evaluate: {e}"))
}
