mod common;

use common::baseline_session;
use moodmatch_core::models::candidate::CandidateId;
use moodmatch_core::models::scale::{Dominance, OverallBand, ScaleTotals, SeverityBand};
use moodmatch_instruments::safety::{MOOD_CYCLING_CAUTION, MOOD_CYCLING_EVALUATION, URGENT_SELF_HARM};
use moodmatch_instruments::triage::TriageProfile;
use moodmatch_ranking::catalog::{catalog, checked_catalog};
use moodmatch_ranking::guidance::{
    COMBINED_THERAPY, JITTERY_CAUTION, MILD_FIRST_STEPS, PANIC_CAUTION, PRIOR_FAILURES,
    PRIOR_SUCCESS,
};
use moodmatch_ranking::partition::{ADJUNCT_LIMIT, PRIMARY_LIMIT, partition};
use moodmatch_ranking::rank::rank;
use moodmatch_ranking::rules::RuleContext;
use moodmatch_ranking::weights::compute;
use moodmatch_ranking::{evaluate, evaluate_session};

fn ids(tier: &[moodmatch_core::models::recommendation::ScoredCandidate]) -> Vec<CandidateId> {
    tier.iter().map(|c| c.candidate_id).collect()
}

#[test]
fn all_zero_all_no_scenario() {
    let result = evaluate_session(&baseline_session(0)).expect("evaluates");

    assert_eq!(result.totals, ScaleTotals { phq9: 0, gad7: 0 });
    assert_eq!(result.bands.phq9, SeverityBand::Minimal);
    assert_eq!(result.bands.gad7, SeverityBand::Minimal);
    assert_eq!(result.bands.overall, OverallBand::MinimalMild);
    assert_eq!(result.pattern, Dominance::Mixed);
    assert!(result.safety_flags.is_empty());
    assert!(result.must_discuss_first.is_empty());
    assert!(result.general_cautions.is_empty());
    assert_eq!(result.next_steps, vec![MILD_FIRST_STEPS]);

    assert_eq!(
        ids(&result.primary_tier),
        vec![
            CandidateId::Bupropion,
            CandidateId::SnriDuloxetine,
            CandidateId::SnriVenlafaxine,
            CandidateId::SsriSertralineEscitalopram,
        ]
    );
    assert_eq!(
        ids(&result.adjunct_tier),
        vec![
            CandidateId::BuspironeAdjunct,
            CandidateId::PropranololPrn,
            CandidateId::TrazodoneAdjunct,
        ]
    );
    assert_eq!(
        result.primary_tier[3].rationale,
        vec!["common first-line option", "targets anxiety"]
    );
}

#[test]
fn self_harm_response_always_surfaces_urgent_message() {
    for other in 0..=3u8 {
        let mut session = baseline_session(other);
        session.symptoms.set("phq9", 2);
        session.triage.set("mania", true);
        let result = evaluate_session(&session).expect("evaluates");
        assert!(result.has_urgent_safety_flag());
        assert_eq!(result.safety_flags, vec![URGENT_SELF_HARM]);
    }
}

#[test]
fn self_harm_flag_is_absent_for_zero_or_unanswered() {
    let mut session = baseline_session(3);
    session.symptoms.set("phq9", 0);
    let result = evaluate_session(&session).expect("evaluates");
    assert!(result.safety_flags.is_empty());

    session.symptoms.clear("phq9");
    let result = evaluate_session(&session).expect("evaluates");
    assert!(result.safety_flags.is_empty());
}

#[test]
fn elevated_mood_history_requires_discussion_first() {
    for symptom in [0, 2] {
        let mut session = baseline_session(symptom);
        session.triage.set("mania", true);
        let result = evaluate_session(&session).expect("evaluates");
        assert_eq!(result.must_discuss_first.len(), 2);
        assert_eq!(result.must_discuss_first[0], MOOD_CYCLING_EVALUATION);
        assert_eq!(result.general_cautions, vec![MOOD_CYCLING_CAUTION]);
    }
}

#[test]
fn mood_history_does_not_change_scores() {
    let plain = evaluate_session(&baseline_session(1)).expect("evaluates");
    let mut session = baseline_session(1);
    session.triage.set("mania", true);
    let flagged = evaluate_session(&session).expect("evaluates");
    assert_eq!(plain.primary_tier, flagged.primary_tier);
    assert_eq!(plain.adjunct_tier, flagged.adjunct_tier);
}

#[test]
fn general_cautions_keep_their_order() {
    let mut session = baseline_session(1);
    session.triage.set("mania", true);
    session.triage.set("panic", true);
    session.triage.set("jittery", true);
    let result = evaluate_session(&session).expect("evaluates");
    assert_eq!(
        result.general_cautions,
        vec![MOOD_CYCLING_CAUTION, PANIC_CAUTION, JITTERY_CAUTION]
    );
}

#[test]
fn next_steps_follow_severity_and_history() {
    let mut session = baseline_session(2);
    session.triage.set("treatment_history", "failed");
    let result = evaluate_session(&session).expect("evaluates");
    assert_eq!(result.bands.overall, OverallBand::Moderate);
    assert_eq!(result.next_steps, vec![COMBINED_THERAPY, PRIOR_FAILURES]);

    session.triage.set("treatment_history", "worked");
    let result = evaluate_session(&session).expect("evaluates");
    assert_eq!(result.next_steps, vec![COMBINED_THERAPY, PRIOR_SUCCESS]);
}

#[test]
fn avoiding_weight_gain_drops_mirtazapine() {
    let mut session = baseline_session(1);
    session.triage.set("sleep", "onset");
    let before = evaluate_session(&session).expect("evaluates");
    assert!(ids(&before.primary_tier).contains(&CandidateId::Mirtazapine));

    session.triage.set("weight_goal", "avoid_gain");
    let after = evaluate_session(&session).expect("evaluates");
    assert!(!ids(&after.primary_tier).contains(&CandidateId::Mirtazapine));
}

#[test]
fn tiers_partition_the_full_ranking() {
    let session = baseline_session(2);
    let profile = TriageProfile::from_answers(&session.triage);
    let totals = ScaleTotals { phq9: 18, gad7: 14 };
    let weights = compute(totals, Dominance::Mixed, &profile);
    let ctx = RuleContext {
        profile: &profile,
        pattern: Dominance::Mixed,
    };

    let tiers = partition(rank(catalog(), &weights, &ctx));
    assert_eq!(tiers.primary.len() + tiers.adjunct.len(), catalog().len());
    for candidate in catalog() {
        let in_primary = tiers.primary.iter().any(|c| c.candidate_id == candidate.id);
        let in_adjunct = tiers.adjunct.iter().any(|c| c.candidate_id == candidate.id);
        assert!(in_primary ^ in_adjunct, "{} in exactly one tier", candidate.id);
        assert_eq!(in_adjunct, candidate.is_adjunct());
    }
    for tier in [&tiers.primary, &tiers.adjunct] {
        assert!(tier.windows(2).all(|w| w[0].score >= w[1].score));
    }

    let full = tiers.clone();
    let truncated = tiers.truncate();
    assert_eq!(truncated.primary.len(), PRIMARY_LIMIT.min(full.primary.len()));
    assert_eq!(truncated.adjunct.len(), ADJUNCT_LIMIT.min(full.adjunct.len()));
    assert_eq!(truncated.primary[..], full.primary[..truncated.primary.len()]);
    assert_eq!(truncated.adjunct[..], full.adjunct[..truncated.adjunct.len()]);
}

#[test]
fn evaluation_is_deterministic() {
    let mut session = baseline_session(2);
    session.symptoms.set("gad3", 0);
    session.triage.set("panic", true);
    session.triage.set("sexual_side_effects", "some");

    let first = evaluate_session(&session).expect("evaluates");
    let second = evaluate_session(&session).expect("evaluates");
    let first = serde_json::to_string(&first).expect("serializes");
    let second = serde_json::to_string(&second).expect("serializes");
    assert_eq!(first, second);
}

#[test]
fn empty_answer_maps_are_tolerated() {
    let result = evaluate(&Default::default(), &Default::default()).expect("evaluates");
    assert_eq!(result.totals, ScaleTotals::default());
    assert_eq!(result.pattern, Dominance::Mixed);
    assert!(result.safety_flags.is_empty());
    assert_eq!(result.primary_tier.len(), PRIMARY_LIMIT);
    assert_eq!(result.adjunct_tier.len(), ADJUNCT_LIMIT);
}

#[test]
fn tiers_are_drawn_from_the_validated_catalog() {
    let validated = checked_catalog().expect("built-in catalog is valid");
    let result = evaluate_session(&baseline_session(1)).expect("evaluates");

    for scored in result.primary_tier.iter().chain(&result.adjunct_tier) {
        let entry = validated
            .iter()
            .find(|c| c.id == scored.candidate_id)
            .expect("scored candidate comes from the catalog");
        assert_eq!(entry.display_name, scored.display_name);
    }
}
