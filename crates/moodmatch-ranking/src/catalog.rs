//! The candidate catalog. Static, read-only, shared by every evaluation.
//!
//! Effect values are educational heuristics on a rough -3..=+3 scale:
//! positive helps with a factor (or is favourable on a side-effect axis),
//! negative works against it.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Serialize;

use moodmatch_core::models::candidate::{CandidateId, Factor, Tag};

use crate::error::CatalogError;

/// One number per [`Factor`]. Every field must be spelled out, so catalog
/// entries cannot silently disagree on which factors they cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FactorTable {
    pub anxiety: f64,
    pub depression: f64,
    pub panic: f64,
    pub sleep_help: f64,
    pub energy: f64,
    pub focus: f64,
    pub pain: f64,
    pub migraine: f64,
    pub smoking: f64,
    pub weight: f64,
    pub sexual: f64,
    pub jitteriness_risk: f64,
}

impl FactorTable {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Anxiety => self.anxiety,
            Factor::Depression => self.depression,
            Factor::Panic => self.panic,
            Factor::SleepHelp => self.sleep_help,
            Factor::Energy => self.energy,
            Factor::Focus => self.focus,
            Factor::Pain => self.pain,
            Factor::Migraine => self.migraine,
            Factor::Smoking => self.smoking,
            Factor::Weight => self.weight,
            Factor::Sexual => self.sexual,
            Factor::JitterinessRisk => self.jitteriness_risk,
        }
    }

    /// `(factor, value)` pairs in [`Factor::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub display_name: &'static str,
    pub tags: &'static [Tag],
    pub base_score: f64,
    pub effects: FactorTable,
    pub cautions: &'static [&'static str],
}

impl Candidate {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Add-on or situational option rather than a primary one.
    pub fn is_adjunct(&self) -> bool {
        self.tags.iter().any(|t| t.is_adjunct())
    }
}

/// Declaration order is the tie-break order when scores are equal.
pub static CATALOG: [Candidate; 8] = [
    Candidate {
        id: CandidateId::SsriSertralineEscitalopram,
        display_name: "SSRI (e.g., sertraline / escitalopram)",
        tags: &[Tag::FirstLine, Tag::Anxiety, Tag::Panic, Tag::Depression],
        base_score: 6.0,
        effects: FactorTable {
            anxiety: 3.0,
            depression: 2.0,
            panic: 3.0,
            sleep_help: 0.0,
            energy: 0.0,
            focus: 0.0,
            pain: 0.0,
            migraine: 0.0,
            smoking: 0.0,
            weight: -1.0,
            sexual: -2.0,
            jitteriness_risk: -1.0,
        },
        cautions: &[
            "Sexual side effects possible",
            "May cause GI upset early on",
            "Activation/anxiety can occur initially",
        ],
    },
    Candidate {
        id: CandidateId::SnriDuloxetine,
        display_name: "SNRI (duloxetine)",
        tags: &[Tag::FirstLine, Tag::Anxiety, Tag::Depression, Tag::Pain],
        base_score: 6.0,
        effects: FactorTable {
            anxiety: 2.0,
            depression: 2.0,
            panic: 2.0,
            sleep_help: 0.0,
            energy: 1.0,
            focus: 0.0,
            pain: 3.0,
            migraine: 0.0,
            smoking: 0.0,
            weight: -1.0,
            sexual: -2.0,
            jitteriness_risk: -1.0,
        },
        cautions: &[
            "Sexual side effects possible",
            "Can raise BP in some people",
            "Tapering needed to stop",
        ],
    },
    Candidate {
        id: CandidateId::SnriVenlafaxine,
        display_name: "SNRI (venlafaxine)",
        tags: &[Tag::Anxiety, Tag::Panic, Tag::Depression],
        base_score: 5.0,
        effects: FactorTable {
            anxiety: 2.0,
            depression: 2.0,
            panic: 3.0,
            sleep_help: 0.0,
            energy: 1.0,
            focus: 0.0,
            pain: 1.0,
            migraine: 1.0,
            smoking: 0.0,
            weight: -1.0,
            sexual: -2.0,
            jitteriness_risk: -1.0,
        },
        cautions: &[
            "Discontinuation symptoms if missed",
            "Can raise BP at higher doses",
            "Sexual side effects possible",
        ],
    },
    Candidate {
        id: CandidateId::Bupropion,
        display_name: "Bupropion",
        tags: &[Tag::Energy, Tag::Focus, Tag::SexualFriendly, Tag::Smoking],
        base_score: 5.0,
        effects: FactorTable {
            anxiety: -1.0,
            depression: 3.0,
            panic: -1.0,
            sleep_help: -1.0,
            energy: 3.0,
            focus: 2.0,
            pain: 0.0,
            migraine: 0.0,
            smoking: 3.0,
            weight: 2.0,
            sexual: 3.0,
            jitteriness_risk: -3.0,
        },
        cautions: &[
            "Can worsen anxiety/jitteriness for some",
            "Can worsen insomnia if taken late",
            "Not for seizure/eating-disorder risk",
        ],
    },
    Candidate {
        id: CandidateId::Mirtazapine,
        display_name: "Mirtazapine (often sedating, appetite-increasing)",
        tags: &[Tag::Sleep, Tag::Appetite, Tag::Depression],
        base_score: 4.0,
        effects: FactorTable {
            anxiety: 1.0,
            depression: 2.0,
            panic: 0.0,
            sleep_help: 3.0,
            energy: -1.0,
            focus: -1.0,
            pain: 0.0,
            migraine: 0.0,
            smoking: 0.0,
            weight: -3.0,
            sexual: 1.0,
            jitteriness_risk: 1.0,
        },
        cautions: &[
            "Weight gain/appetite increase common",
            "Daytime sedation possible",
        ],
    },
    Candidate {
        id: CandidateId::TrazodoneAdjunct,
        display_name: "Sleep adjunct (e.g., trazodone / CBT-I)",
        tags: &[Tag::SleepAdjunct],
        base_score: 3.0,
        effects: FactorTable {
            anxiety: 0.0,
            depression: 0.0,
            panic: 0.0,
            sleep_help: 3.0,
            energy: 0.0,
            focus: 0.0,
            pain: 0.0,
            migraine: 0.0,
            smoking: 0.0,
            weight: 0.0,
            sexual: 0.0,
            jitteriness_risk: 0.0,
        },
        cautions: &["Often used as add-on for sleep rather than primary antidepressant"],
    },
    Candidate {
        id: CandidateId::BuspironeAdjunct,
        display_name: "Anxiety adjunct (buspirone—GAD add-on option)",
        tags: &[Tag::AnxietyAdjunct],
        base_score: 3.0,
        effects: FactorTable {
            anxiety: 2.0,
            depression: 0.0,
            panic: 0.0,
            sleep_help: 0.0,
            energy: 0.0,
            focus: 0.0,
            pain: 0.0,
            migraine: 0.0,
            smoking: 0.0,
            weight: 1.0,
            sexual: 1.0,
            jitteriness_risk: 1.0,
        },
        cautions: &["Often used for generalized anxiety; takes time to work"],
    },
    Candidate {
        id: CandidateId::PropranololPrn,
        display_name: "Situational anxiety option (propranolol PRN—performance anxiety)",
        tags: &[Tag::Situational],
        base_score: 2.0,
        effects: FactorTable {
            anxiety: 1.0,
            depression: 0.0,
            panic: 1.0,
            sleep_help: 0.0,
            energy: -1.0,
            focus: 0.0,
            pain: 0.0,
            migraine: 2.0,
            smoking: 0.0,
            weight: 0.0,
            sexual: 0.0,
            jitteriness_risk: 2.0,
        },
        cautions: &["Not for asthma/bradycardia; for physical symptoms in specific situations"],
    },
];

pub fn catalog() -> &'static [Candidate] {
    &CATALOG
}

pub fn get_candidate(id: CandidateId) -> Option<&'static Candidate> {
    CATALOG.iter().find(|c| c.id == id)
}

/// Check catalog invariants that the type system does not cover.
pub fn validate_catalog(candidates: &[Candidate]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for candidate in candidates {
        if !seen.insert(candidate.id) {
            return Err(CatalogError::DuplicateId(candidate.id));
        }
        if candidate.display_name.trim().is_empty() {
            return Err(CatalogError::EmptyName(candidate.id));
        }
        if !candidate.base_score.is_finite() {
            return Err(CatalogError::NonFiniteBase { id: candidate.id });
        }
        if let Some((factor, _)) = candidate.effects.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CatalogError::NonFiniteEffect {
                id: candidate.id,
                factor,
            });
        }
    }
    if !candidates.iter().any(|c| !c.is_adjunct()) {
        return Err(CatalogError::MissingTier("primary"));
    }
    if !candidates.iter().any(Candidate::is_adjunct) {
        return Err(CatalogError::MissingTier("adjunct"));
    }
    Ok(())
}

/// The built-in catalog, validated once on first use.
pub fn checked_catalog() -> Result<&'static [Candidate], CatalogError> {
    static CHECKED: LazyLock<Result<(), CatalogError>> =
        LazyLock::new(|| validate_catalog(&CATALOG));
    (*CHECKED).clone().map(|()| catalog())
}
