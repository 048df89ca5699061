#![allow(dead_code)]

use moodmatch_core::models::session::Session;

/// Every symptom item answered with `symptom`, every triage question with
/// "no" or its lowest-concern choice.
pub fn baseline_session(symptom: u8) -> Session {
    let mut session = moodmatch_instruments::new_session();
    let ids: Vec<String> = session.symptoms.iter().map(|(id, _)| id.to_string()).collect();
    for id in ids {
        session.symptoms.set(id, symptom);
    }
    for id in [
        "mania",
        "panic",
        "low_energy",
        "poor_focus",
        "jittery",
        "chronic_pain",
        "migraine",
        "smoking",
    ] {
        session.triage.set(id, false);
    }
    session.triage.set("sleep", "none");
    session.triage.set("weight_goal", "no");
    session.triage.set("sexual_side_effects", "no");
    session.triage.set("treatment_history", "naive");
    session
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
