use serde::Serialize;
use tracing::info;

use super::classifier::classify;
use super::domain::{CertificateStatus, TransactionContext};
use super::household::evaluate_household;
use super::outcome::{Classification, GuidanceOutcome, HouseholdAdvisory};

pub const INELIGIBLE_NOTICE: &str = "[Hướng dẫn]: HS KHÔNG ĐỦ ĐIỀU KIỆN ĐỂ CÔNG CHỨNG";

/// Owner classifications in roster order followed by household advisories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceReport {
    pub owners: Vec<Classification>,
    pub household: Vec<HouseholdAdvisory>,
}

impl GuidanceReport {
    /// Flattened outcomes in presentation order.
    pub fn outcomes(&self) -> Vec<GuidanceOutcome> {
        self.owners
            .iter()
            .cloned()
            .map(GuidanceOutcome::Owner)
            .chain(self.household.iter().cloned().map(GuidanceOutcome::Household))
            .collect()
    }

    pub fn narratives(&self) -> Vec<String> {
        self.owners
            .iter()
            .map(|classification| classification.narrative.clone())
            .chain(
                self.household
                    .iter()
                    .map(|advisory| advisory.narrative.clone()),
            )
            .collect()
    }

    pub fn is_blocked(&self) -> bool {
        self.household
            .iter()
            .any(|advisory| advisory.flag.is_blocking())
    }
}

/// Classify every owner, then append the household flags.
pub fn build_report(context: &TransactionContext) -> GuidanceReport {
    let owners: Vec<Classification> = context
        .owners
        .iter()
        .map(|owner| classify(owner, context))
        .collect();
    let household = evaluate_household(context);

    info!(
        owners = owners.len(),
        advisories = household.len(),
        "guidance generated"
    );

    GuidanceReport { owners, household }
}

/// One narrative per owner, then 0–3 household narratives.
pub fn generate(context: &TransactionContext) -> Vec<String> {
    build_report(context).narratives()
}

/// Notice returned in place of guidance when no certificate has been issued.
pub fn certificate_gate(context: &TransactionContext) -> Option<&'static str> {
    (context.certificate == Some(CertificateStatus::NotIssued)).then_some(INELIGIBLE_NOTICE)
}
