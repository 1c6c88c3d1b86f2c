use super::common::*;
use crate::guidance::classify;
use crate::guidance::domain::{
    CertificateStatus, MaritalRecord, MarriageKind, MarriageRecord, Owner, Party,
    PriorMarriageEnd, SingleStatus, TransactionContext,
};
use crate::guidance::outcome::Signer;
use crate::guidance::validation::{validate, validate_all, FieldKey, Stage};

fn keys(context: &TransactionContext, stage: usize) -> Vec<FieldKey> {
    validate(context, stage).into_keys().collect()
}

fn owner_stage() -> usize {
    Stage::Owner(0).index()
}

fn former_spouse_mut(owner: &mut Owner) -> &mut Party {
    match owner.marital.as_mut() {
        Some(MaritalRecord::Single {
            status: Some(SingleStatus::Divorced(ending) | SingleStatus::Widowed(ending)),
        }) => &mut ending.former_spouse,
        Some(MaritalRecord::Married(MarriageRecord {
            marriage_type:
                Some(MarriageKind::Subsequent {
                    prior_end:
                        Some(PriorMarriageEnd::Divorce(ending) | PriorMarriageEnd::Death(ending)),
                }),
            ..
        })) => &mut ending.former_spouse,
        other => panic!("expected an ended marriage, got {other:?}"),
    }
}

fn without_former_spouse(mut owner: Owner) -> Owner {
    *former_spouse_mut(&mut owner) = Party::default();
    owner
}

#[test]
fn session_stage_requires_date_and_transaction_type() {
    let errors = validate(&TransactionContext::default(), 0);

    assert_eq!(
        errors.keys().copied().collect::<Vec<_>>(),
        vec![FieldKey::GuidanceDate, FieldKey::TransactionType]
    );
    assert_eq!(
        errors.get(&FieldKey::GuidanceDate).map(String::as_str),
        Some("Vui lòng nhập Ngày hướng dẫn")
    );
}

#[test]
fn certificate_stage_requires_status() {
    assert_eq!(
        keys(&TransactionContext::default(), 1),
        vec![FieldKey::HasCertificate]
    );
    assert!(validate(&complete_context(), 1).is_empty());
}

#[test]
fn property_stage_requires_every_answer() {
    let errors = validate(&TransactionContext::default(), 2);

    assert_eq!(
        errors.get(&FieldKey::NumberOfOwners).map(String::as_str),
        Some("Số lượng chủ sở hữu phải ít nhất là 1")
    );
    for key in [
        FieldKey::PropertyOrigin,
        FieldKey::PropertyOwnershipDate,
        FieldKey::IsMortgaged,
        FieldKey::IsSecured,
        FieldKey::HasFinancialDebt,
    ] {
        assert!(errors.contains_key(&key), "missing {key:?}");
    }
}

#[test]
fn blank_owner_keeps_default_honorific() {
    let context = with_owners(complete_context(), vec![Owner::blank(1)]);

    assert_eq!(
        keys(&context, owner_stage()),
        vec![FieldKey::Name, FieldKey::BirthDate, FieldKey::MaritalStatus]
    );
}

#[test]
fn owner_stage_beyond_roster_reports_missing_owner() {
    let errors = validate(&complete_context(), owner_stage() + 1);

    assert_eq!(
        errors.get(&FieldKey::Owners).map(String::as_str),
        Some("Vui lòng nhập thông tin chủ sở hữu thứ 2")
    );
}

#[test]
fn single_owner_needs_single_status() {
    let owner = adult(MaritalRecord::Single { status: None });
    let context = with_owners(complete_context(), vec![owner]);

    assert_eq!(keys(&context, owner_stage()), vec![FieldKey::SingleStatusType]);
}

#[test]
fn former_spouse_required_only_when_they_sign() {
    let acquired = date(2015, 1, 1);

    let before = with_owners(
        context(date(2024, 1, 1), acquired),
        vec![without_former_spouse(adult(divorced(date(2018, 1, 1))))],
    );
    let after = with_owners(
        context(date(2024, 1, 1), acquired),
        vec![without_former_spouse(adult(divorced(date(2012, 1, 1))))],
    );

    assert_eq!(
        keys(&before, owner_stage()),
        vec![FieldKey::ExSpouseNameDivorce, FieldKey::ExSpouseGenderDivorce]
    );
    assert!(validate(&after, owner_stage()).is_empty());
}

#[test]
fn validator_and_classifier_agree_on_divorce_day() {
    let day = date(2015, 1, 1);
    let context = with_owners(context(date(2024, 1, 1), day), vec![adult(divorced(day))]);

    assert!(validate(&context, owner_stage()).is_empty());
    let outcome = classify(&context.owners[0], &context);
    assert!(outcome
        .signers
        .iter()
        .any(|signer| matches!(signer, Signer::FormerSpouse(_))));

    let mut unnamed = context.clone();
    former_spouse_mut(&mut unnamed.owners[0]).name = None;
    assert_eq!(
        keys(&unnamed, owner_stage()),
        vec![FieldKey::ExSpouseNameDivorce]
    );
}

#[test]
fn widowed_owner_names_deceased_spouse_when_acquired_during_marriage() {
    let mut owner = adult(widowed(date(2018, 1, 1)));
    former_spouse_mut(&mut owner).honorific = None;
    let context = with_owners(context(date(2024, 1, 1), date(2015, 1, 1)), vec![owner]);

    assert_eq!(
        keys(&context, owner_stage()),
        vec![FieldKey::ExSpouseGenderDeath]
    );
}

#[test]
fn current_spouse_required_once_married_before_acquisition() {
    let record = |married_on| {
        adult(MaritalRecord::Married(MarriageRecord {
            marriage_date: Some(married_on),
            current_spouse: Party::default(),
            marriage_type: Some(MarriageKind::First),
        }))
    };
    let acquired = date(2015, 1, 1);

    let joint = with_owners(
        context(date(2024, 1, 1), acquired),
        vec![record(date(2010, 1, 1))],
    );
    let separate = with_owners(
        context(date(2024, 1, 1), acquired),
        vec![record(date(2018, 1, 1))],
    );

    assert_eq!(
        keys(&joint, owner_stage()),
        vec![FieldKey::CurrentSpouseName, FieldKey::CurrentSpouseGender]
    );
    assert!(validate(&separate, owner_stage()).is_empty());
}

#[test]
fn married_owner_needs_marriage_details() {
    let missing_kind = adult(MaritalRecord::Married(MarriageRecord {
        marriage_date: None,
        current_spouse: spouse(),
        marriage_type: None,
    }));
    let missing_reason = adult(married(
        date(2018, 1, 1),
        MarriageKind::Subsequent { prior_end: None },
    ));

    let first = with_owners(complete_context(), vec![missing_kind]);
    let second = with_owners(complete_context(), vec![missing_reason]);

    assert_eq!(
        keys(&first, owner_stage()),
        vec![FieldKey::MarriageDate, FieldKey::MarriageType]
    );
    assert_eq!(
        keys(&second, owner_stage()),
        vec![FieldKey::PrevMarriageEndReason]
    );
}

#[test]
fn prior_spouse_required_when_acquired_before_prior_marriage_ended() {
    let owner = without_former_spouse(adult(married(
        date(2018, 1, 1),
        after_death(date(2012, 1, 1)),
    )));
    let before = with_owners(
        context(date(2024, 1, 1), date(2010, 1, 1)),
        vec![owner.clone()],
    );
    let between = with_owners(context(date(2024, 1, 1), date(2015, 1, 1)), vec![owner]);

    assert_eq!(
        keys(&before, owner_stage()),
        vec![FieldKey::PrevSpouseName, FieldKey::PrevSpouseGender]
    );
    assert!(validate(&between, owner_stage()).is_empty());
}

#[test]
fn complete_fact_sheet_passes_every_stage() {
    assert_eq!(validate_all(&complete_context()), Ok(()));
}

#[test]
fn missing_certificate_stops_after_certificate_stage() {
    let context = TransactionContext {
        guidance_date: Some(date(2024, 1, 1)),
        transaction_type: complete_context().transaction_type,
        certificate: Some(CertificateStatus::NotIssued),
        ..TransactionContext::default()
    };

    assert_eq!(validate_all(&context), Ok(()));
}

#[test]
fn first_incomplete_stage_is_reported() {
    let mut context = complete_context();
    context.mortgage = None;
    context.owners[0].name.clear();

    let incomplete = validate_all(&context).expect_err("property stage incomplete");

    assert_eq!(incomplete.stage, Stage::Property.index());
    assert_eq!(
        incomplete.errors.keys().copied().collect::<Vec<_>>(),
        vec![FieldKey::IsMortgaged]
    );
}

#[test]
fn declared_owner_count_beyond_roster_is_incomplete() {
    let mut context = complete_context();
    context.owner_count = Some(2);

    let incomplete = validate_all(&context).expect_err("second owner missing");

    assert_eq!(incomplete.stage, Stage::Owner(1).index());
    assert!(incomplete.errors.contains_key(&FieldKey::Owners));
}

#[test]
fn huge_owner_count_still_checks_property_stage() {
    let context = TransactionContext {
        guidance_date: Some(date(2024, 1, 1)),
        transaction_type: complete_context().transaction_type,
        certificate: Some(CertificateStatus::Issued),
        owner_count: Some(usize::MAX),
        ..TransactionContext::default()
    };

    let incomplete = validate_all(&context).expect_err("property answers missing");

    assert_eq!(incomplete.stage, Stage::Property.index());
    assert!(incomplete.errors.contains_key(&FieldKey::PropertyOwnershipDate));
}

#[test]
fn huge_owner_count_reports_first_missing_owner() {
    let mut context = complete_context();
    context.owner_count = Some(usize::MAX);

    let incomplete = validate_all(&context).expect_err("second owner missing");

    assert_eq!(incomplete.stage, Stage::Owner(1).index());
    assert!(incomplete.errors.contains_key(&FieldKey::Owners));
}

#[test]
fn stage_indices_round_trip() {
    for index in 0..6 {
        assert_eq!(Stage::from_index(index).index(), index);
    }
    assert_eq!(Stage::from_index(4), Stage::Owner(1));
}
