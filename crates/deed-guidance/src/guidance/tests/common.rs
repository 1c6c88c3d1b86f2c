use chrono::NaiveDate;

use crate::guidance::domain::{
    Answer, CertificateStatus, Honorific, MaritalRecord, MarriageEnding, MarriageKind,
    MarriageRecord, MortgageStatus, Owner, Party, PriorMarriageEnd, PropertyOrigin,
    SingleStatus, TransactionContext, TransactionType,
};

pub(super) const OWNER_NAME: &str = "Nguyễn Văn A";

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// A sale of a certified, unencumbered, purchased property with no owners yet.
pub(super) fn context(today: NaiveDate, acquired: NaiveDate) -> TransactionContext {
    TransactionContext {
        guidance_date: Some(today),
        transaction_type: Some(TransactionType::SaleOrOther),
        certificate: Some(CertificateStatus::Issued),
        owner_count: Some(1),
        owners: Vec::new(),
        property_origin: Some(PropertyOrigin::Transfer),
        acquisition_date: Some(acquired),
        mortgage: Some(MortgageStatus::NeverMortgaged),
        secured_transaction: Some(Answer::No),
        tax_debt: Some(Answer::No),
    }
}

pub(super) fn sale_on(today: NaiveDate) -> TransactionContext {
    context(today, date(2015, 6, 1))
}

pub(super) fn gift_on(today: NaiveDate) -> TransactionContext {
    TransactionContext {
        transaction_type: Some(TransactionType::Gift),
        ..sale_on(today)
    }
}

pub(super) fn with_owners(mut context: TransactionContext, owners: Vec<Owner>) -> TransactionContext {
    context.owner_count = Some(owners.len());
    context.owners = owners;
    context
}

pub(super) fn owner(id: usize, name: &str, birth: NaiveDate, marital: MaritalRecord) -> Owner {
    Owner {
        id,
        name: name.to_string(),
        honorific: Some(Honorific::Ong),
        birth_date: Some(birth),
        marital: Some(marital),
    }
}

/// Adult owner born 1980-01-01.
pub(super) fn adult(marital: MaritalRecord) -> Owner {
    owner(1, OWNER_NAME, date(1980, 1, 1), marital)
}

pub(super) fn minor(birth: NaiveDate) -> Owner {
    owner(1, "Nguyễn Văn Bé", birth, never_married())
}

pub(super) fn spouse() -> Party {
    Party::new("Trần Thị B", Honorific::Ba)
}

pub(super) fn former_spouse() -> Party {
    Party::new("Lê Thị C", Honorific::Ba)
}

pub(super) fn never_married() -> MaritalRecord {
    MaritalRecord::Single {
        status: Some(SingleStatus::NeverMarried),
    }
}

pub(super) fn divorced(on: NaiveDate) -> MaritalRecord {
    MaritalRecord::Single {
        status: Some(SingleStatus::Divorced(MarriageEnding::new(
            on,
            former_spouse(),
        ))),
    }
}

pub(super) fn widowed(on: NaiveDate) -> MaritalRecord {
    MaritalRecord::Single {
        status: Some(SingleStatus::Widowed(MarriageEnding::new(
            on,
            former_spouse(),
        ))),
    }
}

pub(super) fn married(on: NaiveDate, kind: MarriageKind) -> MaritalRecord {
    MaritalRecord::Married(MarriageRecord {
        marriage_date: Some(on),
        current_spouse: spouse(),
        marriage_type: Some(kind),
    })
}

pub(super) fn after_divorce(on: NaiveDate) -> MarriageKind {
    MarriageKind::Subsequent {
        prior_end: Some(PriorMarriageEnd::Divorce(MarriageEnding::new(
            on,
            former_spouse(),
        ))),
    }
}

pub(super) fn after_death(on: NaiveDate) -> MarriageKind {
    MarriageKind::Subsequent {
        prior_end: Some(PriorMarriageEnd::Death(MarriageEnding::new(
            on,
            former_spouse(),
        ))),
    }
}

/// A context that passes every validation stage with one never-married adult.
pub(super) fn complete_context() -> TransactionContext {
    with_owners(
        context(date(2024, 1, 1), date(2015, 6, 1)),
        vec![adult(never_married())],
    )
}
