//! Ownership classification and document guidance for notarised transfers.
//!
//! A completed fact sheet flows through the completeness validator, the
//! certificate gate and the aggregator, which classifies each owner in roster
//! order and appends the household advisories.

mod aggregator;
mod classifier;
pub mod domain;
mod guards;
mod household;
mod intake;
mod narrative;
pub mod outcome;
mod text_report;
pub mod temporal;
pub mod validation;

#[cfg(test)]
mod tests;

pub use aggregator::{
    build_report, certificate_gate, generate, GuidanceReport, INELIGIBLE_NOTICE,
};
pub use classifier::classify;
pub use domain::{
    Answer, CertificateStatus, Honorific, MaritalRecord, MarriageEnding, MarriageKind,
    MarriageRecord, MortgageStatus, Owner, Party, PriorMarriageEnd, PropertyOrigin,
    SingleStatus, TransactionContext, TransactionType,
};
pub use household::evaluate_household;
pub use intake::{
    load_fact_sheet, parse_fact_sheet, read_fact_sheet, with_guidance_date, FactSheetError,
};
pub use outcome::{
    Classification, GuidanceOutcome, HouseholdAdvisory, HouseholdFlag, OutcomeCategory,
    PropertyCharacter, Rule, Signer,
};
pub use text_report::render_text_report;
pub use validation::{validate, validate_all, FieldKey, IncompleteStage, Stage, ValidationErrors};
