use serde::Serialize;

/// Rules of the owner decision tree, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    GiftToMinor,
    UnderNine,
    NineToFifteen,
    FifteenToEighteen,
    NeverMarriedOrInherited,
    DivorcedBeforeAcquisition,
    WidowedBeforeAcquisition,
    AcquiredBeforeDivorce,
    AcquiredBeforeSpouseDeath,
    AcquiredBeforeFirstMarriage,
    MarriedBeforeAcquisition,
    AcquiredBetweenDivorceAndRemarriage,
    AcquiredBeforePriorDivorce,
    AcquiredBetweenDeathAndRemarriage,
    AcquiredBeforePriorSpouseDeath,
    NoApplicableRule,
}

impl Rule {
    pub const fn category(self) -> OutcomeCategory {
        match self {
            Self::GiftToMinor => OutcomeCategory::GiftToMinorProhibited,
            Self::UnderNine => OutcomeCategory::MinorUnderNine,
            Self::NineToFifteen => OutcomeCategory::MinorNineToFifteen,
            Self::FifteenToEighteen => OutcomeCategory::MinorFifteenToEighteen,
            Self::NeverMarriedOrInherited
            | Self::DivorcedBeforeAcquisition
            | Self::WidowedBeforeAcquisition
            | Self::AcquiredBeforeFirstMarriage
            | Self::AcquiredBetweenDivorceAndRemarriage
            | Self::AcquiredBetweenDeathAndRemarriage => OutcomeCategory::AdultSeparateProperty,
            Self::AcquiredBeforeDivorce
            | Self::MarriedBeforeAcquisition
            | Self::AcquiredBeforePriorDivorce => OutcomeCategory::AdultJointProperty,
            Self::AcquiredBeforeSpouseDeath | Self::AcquiredBeforePriorSpouseDeath => {
                OutcomeCategory::AdultInheritancePending
            }
            Self::NoApplicableRule => OutcomeCategory::NoApplicableRule,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeCategory {
    GiftToMinorProhibited,
    MinorUnderNine,
    MinorNineToFifteen,
    MinorFifteenToEighteen,
    AdultSeparateProperty,
    AdultJointProperty,
    AdultInheritancePending,
    NoApplicableRule,
}

/// Legal character of the owner's share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCharacter {
    Separate,
    Joint,
    PossiblyJoint,
}

/// Who must sign the deed, principal signer first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", content = "name", rename_all = "snake_case")]
pub enum Signer {
    Parents,
    Minor,
    Owner,
    Spouse(String),
    FormerSpouse(String),
    Heirs,
}

/// Result of running the decision tree for one owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub owner_id: usize,
    pub owner_name: String,
    pub rule: Rule,
    pub category: OutcomeCategory,
    pub character: Option<PropertyCharacter>,
    pub signers: Vec<Signer>,
    pub narrative: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdFlag {
    MortgageReleaseNeeded,
    SecuredTransactionClearanceNeeded,
    TaxDebtBlocking,
}

impl HouseholdFlag {
    /// Blocking flags stop the transaction outright.
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::TaxDebtBlocking)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseholdAdvisory {
    pub flag: HouseholdFlag,
    pub narrative: String,
}

/// Entry of the guidance list, in presentation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuidanceOutcome {
    Owner(Classification),
    Household(HouseholdAdvisory),
}

impl GuidanceOutcome {
    pub fn narrative(&self) -> &str {
        match self {
            Self::Owner(classification) => &classification.narrative,
            Self::Household(advisory) => &advisory.narrative,
        }
    }
}
