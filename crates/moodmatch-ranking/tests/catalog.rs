use moodmatch_core::models::candidate::{CandidateId, Factor, Tag};
use moodmatch_ranking::catalog::{
    CATALOG, Candidate, FactorTable, catalog, checked_catalog, get_candidate, validate_catalog,
};
use moodmatch_ranking::error::CatalogError;

#[test]
fn built_in_catalog_is_valid() {
    assert!(validate_catalog(catalog()).is_ok());
    assert_eq!(checked_catalog().map(<[Candidate]>::len), Ok(8));
}

#[test]
fn adjunct_membership_comes_from_tags() {
    let adjuncts: Vec<CandidateId> = catalog()
        .iter()
        .filter(|c| c.is_adjunct())
        .map(|c| c.id)
        .collect();
    assert_eq!(
        adjuncts,
        vec![
            CandidateId::TrazodoneAdjunct,
            CandidateId::BuspironeAdjunct,
            CandidateId::PropranololPrn,
        ]
    );
}

#[test]
fn factor_table_lookup_matches_fields() {
    let bupropion = get_candidate(CandidateId::Bupropion).expect("bupropion is in the catalog");
    assert_eq!(bupropion.effects.get(Factor::Smoking), 3.0);
    assert_eq!(bupropion.effects.get(Factor::JitterinessRisk), -3.0);
    assert_eq!(bupropion.effects.iter().count(), Factor::ALL.len());
    assert!(bupropion.has_tag(Tag::SexualFriendly));
}

#[test]
fn duplicate_ids_are_rejected() {
    let twice = [CATALOG[0].clone(), CATALOG[5].clone(), CATALOG[0].clone()];
    assert_eq!(
        validate_catalog(&twice),
        Err(CatalogError::DuplicateId(CandidateId::SsriSertralineEscitalopram))
    );
}

#[test]
fn non_finite_effects_are_rejected() {
    let mut broken = CATALOG[1].clone();
    broken.effects = FactorTable {
        migraine: f64::NAN,
        ..broken.effects
    };
    let candidates = [broken, CATALOG[6].clone()];
    assert_eq!(
        validate_catalog(&candidates),
        Err(CatalogError::NonFiniteEffect {
            id: CandidateId::SnriDuloxetine,
            factor: Factor::Migraine,
        })
    );
}

#[test]
fn both_tiers_must_be_represented() {
    let primary_only = [CATALOG[0].clone(), CATALOG[1].clone()];
    assert_eq!(
        validate_catalog(&primary_only),
        Err(CatalogError::MissingTier("adjunct"))
    );
    let adjunct_only = [CATALOG[7].clone()];
    assert_eq!(
        validate_catalog(&adjunct_only),
        Err(CatalogError::MissingTier("primary"))
    );
}
