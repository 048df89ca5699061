use moodmatch_core::error::CoreError;
use moodmatch_core::models::answers::{SymptomAnswers, TriageAnswers, TriageValue};
use moodmatch_core::models::session::{Phase, Session};

fn small_session() -> Session {
    Session::blank(["phq1", "phq2"], ["mania", "sleep"])
}

#[test]
fn blank_session_lists_every_question_as_missing() {
    let session = small_session();
    assert_eq!(session.phase, Phase::Answering);
    assert!(!session.is_complete());
    assert_eq!(
        session.missing_answers(),
        vec!["phq1", "phq2", "mania", "sleep"]
    );
}

#[test]
fn submit_refuses_incomplete_session() {
    let mut session = small_session();
    session.symptoms.set("phq1", 2);
    session.triage.set("mania", false);

    match session.submit() {
        Err(CoreError::Incomplete { missing }) => assert_eq!(missing, vec!["phq2", "sleep"]),
        other => panic!("expected incomplete error, got {other:?}"),
    }
    assert_eq!(session.phase, Phase::Answering);
}

#[test]
fn submit_then_reset() {
    let mut session = small_session();
    session.symptoms.set("phq1", 0);
    session.symptoms.set("phq2", 3);
    session.triage.set("mania", true);
    session.triage.set("sleep", "onset");

    session.submit().expect("complete session submits");
    assert_eq!(session.phase, Phase::Submitted);
    assert!(matches!(session.submit(), Err(CoreError::AlreadySubmitted)));

    let fresh = session.reset();
    assert_eq!(fresh, small_session());
}

#[test]
fn zero_is_an_answer_not_a_gap() {
    let mut session = small_session();
    session.symptoms.set("phq1", 0);
    assert_eq!(session.symptoms.get("phq1"), Some(0));
    assert!(!session.missing_answers().contains(&"phq1".to_string()));
}

#[test]
fn triage_accessors_only_signal_on_explicit_values() {
    let mut triage = TriageAnswers::blank(["panic", "sleep", "smoking"]);
    triage.set("panic", "yes");
    triage.set("sleep", "onset");

    // A string "yes" is not a flag.
    assert!(!triage.is_yes("panic"));
    assert!(!triage.is_yes("smoking"));
    assert!(!triage.is_yes("not_declared"));
    assert_eq!(triage.choice("sleep"), Some("onset"));
    assert_eq!(triage.choice("smoking"), None);
}

#[test]
fn answers_deserialize_from_plain_json() {
    let json = r#"{
        "symptoms": { "phq1": 1, "phq2": null },
        "triage": { "mania": false, "sleep": "maintenance" }
    }"#;
    let session: Session = serde_json::from_str(json).expect("valid session json");

    assert_eq!(session.phase, Phase::Answering);
    assert_eq!(session.symptoms.get("phq1"), Some(1));
    assert_eq!(session.symptoms.get("phq2"), None);
    assert!(session.symptoms.contains("phq2"));
    assert_eq!(session.triage.get("mania"), Some(&TriageValue::Flag(false)));
    assert_eq!(session.triage.choice("sleep"), Some("maintenance"));
}

#[test]
fn answer_maps_serialize_as_plain_objects() {
    let mut symptoms: SymptomAnswers = [("phq1", 2)].into_iter().collect();
    symptoms.clear("phq1");
    symptoms.set("gad1", 0);
    let json = serde_json::to_string(&symptoms).expect("serializes");
    assert_eq!(json, r#"{"gad1":0,"phq1":null}"#);

    let triage: TriageAnswers = [("panic", TriageValue::Flag(true))].into_iter().collect();
    let json = serde_json::to_string(&triage).expect("serializes");
    assert_eq!(json, r#"{"panic":true}"#);
    let back: TriageAnswers = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, triage);
}
