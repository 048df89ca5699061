use moodmatch_cli::report::{render_json, render_text};
use moodmatch_cli::sheet::{parse_sheet, submit};
use moodmatch_core::models::session::Phase;
use moodmatch_ranking::evaluate_session;
use moodmatch_ranking::guidance::DISCLAIMER;

const COMPLETE_SHEET: &str = r#"{
    "symptoms": {
        "phq1": 2, "phq2": 2, "phq3": 1, "phq4": 2, "phq5": 1,
        "phq6": 1, "phq7": 1, "phq8": 0, "phq9": 1,
        "gad1": 1, "gad2": 1, "gad3": 1, "gad4": 1, "gad5": 0, "gad6": 1, "gad7": 0
    },
    "triage": {
        "mania": false, "panic": false, "sleep": "onset", "weight_goal": "neutral",
        "sexual_side_effects": "avoid", "low_energy": true, "poor_focus": false,
        "jittery": false, "chronic_pain": false, "migraine": false, "smoking": false,
        "treatment_history": "naive"
    }
}"#;

#[test]
fn partial_sheet_gets_every_declared_question() {
    let mut session = parse_sheet(r#"{ "symptoms": { "phq1": 2 }, "triage": {} }"#).expect("parses");
    assert_eq!(session.symptoms.get("phq1"), Some(2));
    assert!(session.symptoms.contains("gad7"));
    assert!(session.triage.contains("mania"));
    assert_eq!(session.missing_answers().len(), 9 + 7 + 12 - 1);

    let err = submit(&mut session).expect_err("incomplete");
    assert!(err.to_string().contains("phq2"));
    assert_eq!(session.phase, Phase::Answering);
}

#[test]
fn sheet_sections_are_optional() {
    let session = parse_sheet(r#"{ "symptoms": { "phq9": 0 } }"#).expect("parses");
    assert_eq!(session.symptoms.get("phq9"), Some(0));
    assert!(session.triage.contains("treatment_history"));
    assert_eq!(session.triage.unanswered().count(), 12);

    let session = parse_sheet(r#"{ "triage": { "panic": true } }"#).expect("parses");
    assert!(session.triage.is_yes("panic"));
    assert_eq!(session.symptoms.unanswered().count(), 16);

    let session = parse_sheet("{}").expect("parses");
    assert_eq!(session.missing_answers().len(), 9 + 7 + 12);
}

#[test]
fn complete_sheet_submits_and_renders() {
    let mut session = parse_sheet(COMPLETE_SHEET).expect("parses");
    submit(&mut session).expect("complete");
    assert_eq!(session.phase, Phase::Submitted);

    let result = evaluate_session(&session).expect("evaluates");
    assert_eq!(result.totals.phq9, 11);
    assert_eq!(result.totals.gad7, 5);

    let text = render_text(&result, true).expect("renders");
    assert!(text.starts_with("Depression-dominant pattern (PHQ-9 higher)"));
    assert!(text.contains("PHQ-9: 11 (Moderate)"));
    assert!(text.contains("GAD-7: 5 (Mild)"));
    assert!(text.contains("Urgent safety note:"));
    assert!(!text.contains("Discuss first (important):"));
    assert!(text.contains(&result.primary_tier[0].display_name));
    assert!(text.contains(DISCLAIMER));

    let quiet = render_text(&result, false).expect("renders");
    assert!(!quiet.contains(DISCLAIMER));
}

#[test]
fn json_output_is_the_result_structure() {
    let session = parse_sheet(COMPLETE_SHEET).expect("parses");
    let result = evaluate_session(&session).expect("evaluates");
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&result).expect("renders")).expect("valid json");

    assert_eq!(json["pattern"], "depression");
    assert_eq!(json["bands"]["overall"], "mild_moderate");
    assert!(json["primary_tier"].as_array().is_some_and(|t| t.len() == 4));
    assert!(json["adjunct_tier"].as_array().is_some_and(|t| t.len() == 3));
    assert!(json["must_discuss_first"].as_array().is_some_and(Vec::is_empty));
}
