//! General cautions and next steps. Advisory text only; none of it feeds
//! back into scoring.

use moodmatch_core::models::scale::OverallBand;
use moodmatch_instruments::safety::MoodCyclingAdvisory;
use moodmatch_instruments::triage::{TreatmentHistory, TriageProfile};

pub const PANIC_CAUTION: &str = "If panic is frequent/severe, therapy (CBT/exposure) is high-yield; initial SSRI/SNRI activation can occur.";

pub const JITTERY_CAUTION: &str = "If you get jittery easily, discuss activating meds carefully and monitor anxiety/sleep.";

pub const MILD_FIRST_STEPS: &str = "Mild severity: many people start with CBT/therapy, sleep regularity, exercise, and stress skills; medication is optional and clinician-dependent.";

pub const COMBINED_THERAPY: &str = "Strongly consider psychotherapy (CBT) alongside meds; combined approaches often work best for anxiety/depression.";

pub const PRIOR_FAILURES: &str = "If multiple meds failed previously, ask about diagnosis accuracy (bipolar, ADHD, PTSD), comorbid medical issues, and targeted augmentation strategies.";

pub const PRIOR_SUCCESS: &str = "If something worked before, clinicians often consider that agent/class again unless side effects or contraindications exist.";

pub const DISCLAIMER: &str = "Disclaimer: Educational only. Not a diagnosis or prescription. Medication choice depends on medical history, other meds, contraindications, and clinician judgment.";

/// Mood-cycling caution first, then panic, then jitteriness.
pub fn general_cautions(profile: &TriageProfile, advisory: &MoodCyclingAdvisory) -> Vec<String> {
    let mut cautions: Vec<String> = advisory.caution.iter().cloned().collect();
    if profile.panic {
        cautions.push(PANIC_CAUTION.to_string());
    }
    if profile.jittery {
        cautions.push(JITTERY_CAUTION.to_string());
    }
    cautions
}

pub fn next_steps(overall: OverallBand, profile: &TriageProfile) -> Vec<String> {
    let mut steps = vec![match overall {
        OverallBand::MinimalMild => MILD_FIRST_STEPS.to_string(),
        _ => COMBINED_THERAPY.to_string(),
    }];
    match profile.treatment_history {
        Some(TreatmentHistory::Failed) => steps.push(PRIOR_FAILURES.to_string()),
        Some(TreatmentHistory::Worked) => steps.push(PRIOR_SUCCESS.to_string()),
        Some(TreatmentHistory::Naive) | None => {}
    }
    steps
}
