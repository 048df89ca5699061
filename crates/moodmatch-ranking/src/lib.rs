//! moodmatch-ranking
//!
//! Turns questionnaire answers into a ranked, explained list of catalog
//! candidates. Every evaluation is a pure function of its inputs and the
//! static catalog, so it can be called from any number of threads at once.

pub mod catalog;
pub mod error;
pub mod guidance;
pub mod partition;
pub mod rank;
pub mod rationale;
pub mod rules;
pub mod weights;

use moodmatch_core::models::answers::{SymptomAnswers, TriageAnswers};
use moodmatch_core::models::recommendation::RecommendationResult;
use moodmatch_core::models::session::Session;
use moodmatch_instruments::triage::TriageProfile;
use moodmatch_instruments::{safety, scoring, severity};

use crate::catalog::checked_catalog;
use crate::error::CatalogError;
use crate::rules::RuleContext;

/// Run the full pipeline over one set of answers.
///
/// Never fails on answer content: missing responses count as zero and
/// unrecognized triage values as "no signal". Completeness is the caller's
/// check (see [`Session::submit`]). The only error is a catalog that fails
/// its load-time validation.
pub fn evaluate(
    symptoms: &SymptomAnswers,
    triage: &TriageAnswers,
) -> Result<RecommendationResult, CatalogError> {
    let candidates = checked_catalog()?;
    let totals = scoring::aggregate(symptoms);
    let bands = severity::classify(totals);
    let pattern = severity::dominance(totals);
    let profile = TriageProfile::from_answers(triage);

    let advisory = safety::mood_cycling_advisory(&profile);
    let weights = weights::compute(totals, pattern, &profile);
    let ctx = RuleContext {
        profile: &profile,
        pattern,
    };

    let ranked = rank::rank(candidates, &weights, &ctx);
    let tiers = partition::partition(ranked).truncate();

    let result = RecommendationResult {
        totals,
        bands,
        pattern,
        safety_flags: safety::safety_flags(symptoms),
        general_cautions: guidance::general_cautions(&profile, &advisory),
        must_discuss_first: advisory.must_discuss_first,
        next_steps: guidance::next_steps(bands.overall, &profile),
        primary_tier: tiers.primary,
        adjunct_tier: tiers.adjunct,
    };

    tracing::info!(
        phq9 = totals.phq9,
        gad7 = totals.gad7,
        pattern = ?pattern,
        urgent = result.has_urgent_safety_flag(),
        primary = result.primary_tier.len(),
        adjunct = result.adjunct_tier.len(),
        "evaluation complete"
    );
    Ok(result)
}

/// Evaluate a session snapshot. The session's phase is not consulted.
pub fn evaluate_session(session: &Session) -> Result<RecommendationResult, CatalogError> {
    evaluate(&session.symptoms, &session.triage)
}
