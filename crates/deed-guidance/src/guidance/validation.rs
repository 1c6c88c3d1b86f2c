//! Per-stage completeness checks for the intake fact sheet.
//!
//! Conditional requirements reuse the classifier's guards so that every fact a
//! rule reads has been asked for.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    CertificateStatus, MaritalRecord, MarriageKind, MarriageRecord, Owner, Party,
    PriorMarriageEnd, SingleStatus, TransactionContext,
};
use super::guards::{acquired_during_current_marriage, acquired_within_ended_marriage};

/// Keys of the intake form, matching the field names of the fact sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    GuidanceDate,
    TransactionType,
    HasCertificate,
    NumberOfOwners,
    PropertyOrigin,
    PropertyOwnershipDate,
    IsMortgaged,
    IsSecured,
    HasFinancialDebt,
    Owners,
    Name,
    BirthDate,
    Gender,
    MaritalStatus,
    SingleStatusType,
    DivorceDate,
    ExSpouseNameDivorce,
    ExSpouseGenderDivorce,
    SpouseDeathDate,
    ExSpouseNameDeath,
    ExSpouseGenderDeath,
    MarriageDate,
    CurrentSpouseName,
    CurrentSpouseGender,
    MarriageType,
    PrevMarriageEndReason,
    PrevDivorceDate,
    PrevSpouseDeathDate,
    PrevSpouseName,
    PrevSpouseGender,
}

pub type ValidationErrors = BTreeMap<FieldKey, String>;

/// Wizard stage: three fixed stages, then one per owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", content = "owner", rename_all = "snake_case")]
pub enum Stage {
    Session,
    Certificate,
    Property,
    Owner(usize),
}

impl Stage {
    pub const FIRST_OWNER: usize = 3;

    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Self::Session,
            1 => Self::Certificate,
            2 => Self::Property,
            n => Self::Owner(n - Self::FIRST_OWNER),
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Session => 0,
            Self::Certificate => 1,
            Self::Property => 2,
            Self::Owner(position) => position + Self::FIRST_OWNER,
        }
    }
}

/// First stage that still has missing facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncompleteStage {
    pub stage: usize,
    pub errors: ValidationErrors,
}

/// Missing or invalid fields for one stage; empty when the stage is complete.
pub fn validate(context: &TransactionContext, stage: usize) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match Stage::from_index(stage) {
        Stage::Session => {
            require(
                &mut errors,
                context.guidance_date.is_some(),
                FieldKey::GuidanceDate,
                "Vui lòng nhập Ngày hướng dẫn",
            );
            require(
                &mut errors,
                context.transaction_type.is_some(),
                FieldKey::TransactionType,
                "Vui lòng chọn Loại giao dịch",
            );
        }
        Stage::Certificate => {
            require(
                &mut errors,
                context.certificate.is_some(),
                FieldKey::HasCertificate,
                "Vui lòng chọn tình trạng Giấy chứng nhận",
            );
        }
        Stage::Property => validate_property(context, &mut errors),
        Stage::Owner(position) => match context.owners.get(position) {
            Some(owner) => validate_owner(owner, context.acquisition_date, &mut errors),
            None => {
                errors.insert(
                    FieldKey::Owners,
                    format!("Vui lòng nhập thông tin chủ sở hữu thứ {}", position + 1),
                );
            }
        },
    }

    errors
}

/// Walk every stage in order and report the first incomplete one.
///
/// A fact sheet without a certificate stops after stage 1: nothing further is
/// needed to decide it.
pub fn validate_all(context: &TransactionContext) -> Result<(), IncompleteStage> {
    let owner_stages = context
        .owner_count
        .unwrap_or(0)
        .max(context.owners.len())
        .max(1);

    for stage in 0..Stage::FIRST_OWNER.saturating_add(owner_stages) {
        let errors = validate(context, stage);
        if !errors.is_empty() {
            return Err(IncompleteStage { stage, errors });
        }
        if stage == Stage::Certificate.index()
            && context.certificate == Some(CertificateStatus::NotIssued)
        {
            break;
        }
    }

    Ok(())
}

fn require(errors: &mut ValidationErrors, present: bool, key: FieldKey, message: &str) {
    if !present {
        errors.insert(key, message.to_string());
    }
}

fn validate_property(context: &TransactionContext, errors: &mut ValidationErrors) {
    if context.owner_count.unwrap_or(0) < 1 {
        errors.insert(
            FieldKey::NumberOfOwners,
            "Số lượng chủ sở hữu phải ít nhất là 1".to_string(),
        );
    }
    require(
        errors,
        context.property_origin.is_some(),
        FieldKey::PropertyOrigin,
        "Vui lòng chọn Nguồn gốc tài sản",
    );
    require(
        errors,
        context.acquisition_date.is_some(),
        FieldKey::PropertyOwnershipDate,
        "Vui lòng nhập Ngày bắt đầu sở hữu",
    );
    require(
        errors,
        context.mortgage.is_some(),
        FieldKey::IsMortgaged,
        "Vui lòng chọn Tình trạng thế chấp",
    );
    require(
        errors,
        context.secured_transaction.is_some(),
        FieldKey::IsSecured,
        "Vui lòng chọn Tình trạng đăng ký giao dịch bảo đảm",
    );
    require(
        errors,
        context.tax_debt.is_some(),
        FieldKey::HasFinancialDebt,
        "Vui lòng chọn Tình trạng nợ nghĩa vụ tài chính",
    );
}

fn validate_owner(owner: &Owner, acquired: Option<NaiveDate>, errors: &mut ValidationErrors) {
    require(
        errors,
        !owner.name.trim().is_empty(),
        FieldKey::Name,
        "Vui lòng nhập Họ tên chủ sở hữu",
    );
    require(
        errors,
        owner.birth_date.is_some(),
        FieldKey::BirthDate,
        "Vui lòng nhập Ngày sinh chủ sở hữu",
    );
    require(errors, owner.honorific.is_some(), FieldKey::Gender, "Vui lòng chọn Cách xưng hô");

    match &owner.marital {
        None => {
            errors.insert(
                FieldKey::MaritalStatus,
                "Vui lòng chọn Tình trạng hôn nhân".to_string(),
            );
        }
        Some(MaritalRecord::Single { status }) => {
            validate_single(status.as_ref(), acquired, errors)
        }
        Some(MaritalRecord::Married(record)) => validate_married(record, acquired, errors),
    }
}

fn validate_single(
    status: Option<&SingleStatus>,
    acquired: Option<NaiveDate>,
    errors: &mut ValidationErrors,
) {
    match status {
        None => {
            errors.insert(
                FieldKey::SingleStatusType,
                "Vui lòng chọn chi tiết tình trạng độc thân".to_string(),
            );
        }
        Some(SingleStatus::NeverMarried) => {}
        Some(SingleStatus::Divorced(ending)) => {
            require(
                errors,
                ending.date.is_some(),
                FieldKey::DivorceDate,
                "Vui lòng nhập Ngày ly hôn",
            );
            if acquired_within_ended_marriage(acquired, ending.date) {
                require_party(
                    errors,
                    &ending.former_spouse,
                    (FieldKey::ExSpouseNameDivorce, "Vui lòng nhập Họ tên vợ/chồng cũ"),
                    (FieldKey::ExSpouseGenderDivorce, "Vui lòng chọn Xưng hô vợ/chồng cũ"),
                );
            }
        }
        Some(SingleStatus::Widowed(ending)) => {
            require(
                errors,
                ending.date.is_some(),
                FieldKey::SpouseDeathDate,
                "Vui lòng nhập Ngày vợ/chồng chết",
            );
            if acquired_within_ended_marriage(acquired, ending.date) {
                require_party(
                    errors,
                    &ending.former_spouse,
                    (FieldKey::ExSpouseNameDeath, "Vui lòng nhập Họ tên vợ/chồng đã mất"),
                    (FieldKey::ExSpouseGenderDeath, "Vui lòng chọn Xưng hô vợ/chồng đã mất"),
                );
            }
        }
    }
}

fn validate_married(
    record: &MarriageRecord,
    acquired: Option<NaiveDate>,
    errors: &mut ValidationErrors,
) {
    require(
        errors,
        record.marriage_date.is_some(),
        FieldKey::MarriageDate,
        "Vui lòng nhập Ngày đăng ký kết hôn",
    );

    if acquired_during_current_marriage(record.marriage_date, acquired) {
        require_party(
            errors,
            &record.current_spouse,
            (FieldKey::CurrentSpouseName, "Vui lòng nhập Họ tên vợ/chồng hiện tại"),
            (FieldKey::CurrentSpouseGender, "Vui lòng chọn Xưng hô vợ/chồng hiện tại"),
        );
    }

    let prior_end = match &record.marriage_type {
        None => {
            errors.insert(
                FieldKey::MarriageType,
                "Vui lòng chọn Chi tiết kết hôn".to_string(),
            );
            return;
        }
        Some(MarriageKind::First) => return,
        Some(MarriageKind::Subsequent { prior_end }) => prior_end,
    };

    let ending = match prior_end {
        None => {
            errors.insert(
                FieldKey::PrevMarriageEndReason,
                "Vui lòng chọn Lý do chấm dứt hôn nhân trước".to_string(),
            );
            return;
        }
        Some(PriorMarriageEnd::Divorce(ending)) => {
            require(
                errors,
                ending.date.is_some(),
                FieldKey::PrevDivorceDate,
                "Vui lòng nhập Ngày ly hôn trước đây",
            );
            ending
        }
        Some(PriorMarriageEnd::Death(ending)) => {
            require(
                errors,
                ending.date.is_some(),
                FieldKey::PrevSpouseDeathDate,
                "Vui lòng nhập Ngày vợ/chồng trước chết",
            );
            ending
        }
    };

    if acquired_within_ended_marriage(acquired, ending.date) {
        require_party(
            errors,
            &ending.former_spouse,
            (FieldKey::PrevSpouseName, "Vui lòng nhập Họ tên vợ/chồng trước đây"),
            (FieldKey::PrevSpouseGender, "Vui lòng chọn Xưng hô vợ/chồng trước đây"),
        );
    }
}

fn require_party(
    errors: &mut ValidationErrors,
    party: &Party,
    name: (FieldKey, &str),
    honorific: (FieldKey, &str),
) {
    let has_name = party
        .name
        .as_deref()
        .is_some_and(|value| !value.trim().is_empty());
    require(errors, has_name, name.0, name.1);
    require(errors, party.honorific.is_some(), honorific.0, honorific.1);
}
