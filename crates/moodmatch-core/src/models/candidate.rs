use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Stable identifier of a catalog candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CandidateId {
    SsriSertralineEscitalopram,
    SnriDuloxetine,
    SnriVenlafaxine,
    Bupropion,
    Mirtazapine,
    TrazodoneAdjunct,
    BuspironeAdjunct,
    PropranololPrn,
}

impl CandidateId {
    pub fn as_str(self) -> &'static str {
        match self {
            CandidateId::SsriSertralineEscitalopram => "ssri_sertraline_escitalopram",
            CandidateId::SnriDuloxetine => "snri_duloxetine",
            CandidateId::SnriVenlafaxine => "snri_venlafaxine",
            CandidateId::Bupropion => "bupropion",
            CandidateId::Mirtazapine => "mirtazapine",
            CandidateId::TrazodoneAdjunct => "trazodone_adjunct",
            CandidateId::BuspironeAdjunct => "buspirone_adjunct",
            CandidateId::PropranololPrn => "propranolol_prn",
        }
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog metadata used for rationale and tier partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Tag {
    FirstLine,
    Anxiety,
    Panic,
    Depression,
    Pain,
    Energy,
    Focus,
    SexualFriendly,
    Smoking,
    Sleep,
    Appetite,
    SleepAdjunct,
    AnxietyAdjunct,
    Situational,
}

impl Tag {
    /// Add-on or situational options, presented apart from primary ones.
    pub fn is_adjunct(self) -> bool {
        matches!(self, Tag::SleepAdjunct | Tag::AnxietyAdjunct | Tag::Situational)
    }
}

/// The fixed set of scoring factors every candidate is profiled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Factor {
    Anxiety,
    Depression,
    Panic,
    SleepHelp,
    Energy,
    Focus,
    Pain,
    Migraine,
    Smoking,
    Weight,
    Sexual,
    JitterinessRisk,
}

impl Factor {
    /// Every factor, in summation order.
    pub const ALL: [Factor; 12] = [
        Factor::Anxiety,
        Factor::Depression,
        Factor::Panic,
        Factor::SleepHelp,
        Factor::Energy,
        Factor::Focus,
        Factor::Pain,
        Factor::Migraine,
        Factor::Smoking,
        Factor::Weight,
        Factor::Sexual,
        Factor::JitterinessRisk,
    ];
}
