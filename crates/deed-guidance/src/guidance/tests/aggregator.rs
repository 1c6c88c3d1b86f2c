use super::common::*;
use crate::guidance::domain::{
    Answer, CertificateStatus, MarriageKind, MortgageStatus, TransactionContext,
};
use crate::guidance::outcome::{GuidanceOutcome, HouseholdFlag, Rule};
use crate::guidance::{build_report, certificate_gate, generate, INELIGIBLE_NOTICE};

fn flags(context: &TransactionContext) -> Vec<HouseholdFlag> {
    build_report(context)
        .household
        .iter()
        .map(|advisory| advisory.flag)
        .collect()
}

#[test]
fn mortgage_and_tax_debt_are_flagged_in_order() {
    let mut context = complete_context();
    context.mortgage = Some(MortgageStatus::Mortgaged);
    context.secured_transaction = Some(Answer::No);
    context.tax_debt = Some(Answer::Yes);

    let report = build_report(&context);

    assert_eq!(
        flags(&context),
        vec![
            HouseholdFlag::MortgageReleaseNeeded,
            HouseholdFlag::TaxDebtBlocking
        ]
    );
    assert!(report.is_blocked());
    let narratives = report.narratives();
    assert_eq!(narratives.len(), 3);
    assert!(narratives[1].starts_with("[PL#_1: GIAICHAP]"));
    assert!(narratives[2].starts_with("[PL#_3: NO_TSDĐ]"));
}

#[test]
fn every_household_flag_follows_fixed_order() {
    let mut context = complete_context();
    context.tax_debt = Some(Answer::Yes);
    context.secured_transaction = Some(Answer::Yes);
    context.mortgage = Some(MortgageStatus::Mortgaged);

    assert_eq!(
        flags(&context),
        vec![
            HouseholdFlag::MortgageReleaseNeeded,
            HouseholdFlag::SecuredTransactionClearanceNeeded,
            HouseholdFlag::TaxDebtBlocking
        ]
    );
}

#[test]
fn released_mortgage_needs_no_advisory() {
    let mut context = complete_context();
    context.mortgage = Some(MortgageStatus::Released);

    let report = build_report(&context);

    assert!(report.household.is_empty());
    assert!(!report.is_blocked());
}

#[test]
fn outcomes_follow_roster_order() {
    let context = with_owners(
        complete_context(),
        vec![
            owner(1, "Nguyễn Văn A", date(1980, 1, 1), never_married()),
            owner(2, "Nguyễn Văn Bé", date(2020, 1, 1), never_married()),
            owner(
                3,
                "Phạm Văn D",
                date(1975, 1, 1),
                married(date(2010, 1, 1), MarriageKind::First),
            ),
        ],
    );

    let report = build_report(&context);

    let rules: Vec<Rule> = report.owners.iter().map(|outcome| outcome.rule).collect();
    assert_eq!(
        rules,
        vec![
            Rule::NeverMarriedOrInherited,
            Rule::UnderNine,
            Rule::MarriedBeforeAcquisition
        ]
    );
    let ids: Vec<usize> = report.owners.iter().map(|outcome| outcome.owner_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn outcomes_list_owners_before_household() {
    let mut context = complete_context();
    context.secured_transaction = Some(Answer::Yes);

    let outcomes = build_report(&context).outcomes();

    assert_eq!(outcomes.len(), 2);
    assert!(matches!(outcomes[0], GuidanceOutcome::Owner(_)));
    match &outcomes[1] {
        GuidanceOutcome::Household(advisory) => {
            assert_eq!(advisory.flag, HouseholdFlag::SecuredTransactionClearanceNeeded)
        }
        other => panic!("expected household advisory, got {other:?}"),
    }
    assert!(outcomes[1].narrative().starts_with("[PL#_2: XOA_GDBĐ]"));
}

#[test]
fn empty_roster_yields_only_household_guidance() {
    let mut context = complete_context();
    context.owners.clear();
    context.tax_debt = Some(Answer::Yes);

    let narratives = generate(&context);

    assert_eq!(narratives.len(), 1);
    assert!(narratives[0].contains("Hiện tại CHƯA THỂ thực hiện được giao dịch."));
}

#[test]
fn generation_is_deterministic() {
    let mut context = complete_context();
    context.mortgage = Some(MortgageStatus::Mortgaged);

    assert_eq!(generate(&context), generate(&context));
    assert_eq!(generate(&context), build_report(&context).narratives());
}

#[test]
fn certificate_gate_only_blocks_missing_certificates() {
    let mut context = complete_context();
    assert_eq!(certificate_gate(&context), None);

    context.certificate = Some(CertificateStatus::NotIssued);
    assert_eq!(certificate_gate(&context), Some(INELIGIBLE_NOTICE));

    context.certificate = None;
    assert_eq!(certificate_gate(&context), None);
}
