use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::temporal::deserialize_optional_date;

/// Form of address used in narratives. Closed set: masculine or feminine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Honorific {
    #[serde(rename = "ong")]
    Ong,
    #[serde(rename = "ba")]
    Ba,
}

impl Honorific {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ong => "ông",
            Self::Ba => "bà",
        }
    }
}

/// Renders an optional honorific, falling back to the neutral `ông/bà`.
pub fn honorific_label(honorific: Option<Honorific>) -> &'static str {
    honorific.map(Honorific::label).unwrap_or("ông/bà")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "tang_cho")]
    Gift,
    #[serde(rename = "mua_ban_khac")]
    SaleOrOther,
}

impl TransactionType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gift => "Tặng cho",
            Self::SaleOrOther => "Bán/Chuyển nhượng/Góp vốn/Thế chấp",
        }
    }
}

/// Whether a land-use / house-ownership certificate has been issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateStatus {
    #[serde(rename = "co")]
    Issued,
    #[serde(rename = "khong")]
    NotIssued,
}

impl CertificateStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Issued => "Đã có",
            Self::NotIssued => "Chưa có",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyOrigin {
    #[serde(rename = "nhan_chuyen_nhuong")]
    Transfer,
    #[serde(rename = "tang_cho_thua_ke")]
    GiftOrInheritance,
    #[serde(rename = "nha_nuoc_cong_nhan")]
    StateRecognition,
}

impl PropertyOrigin {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transfer => "Mua/Nhận chuyển nhượng...",
            Self::GiftOrInheritance => "Được tặng cho/Thừa kế",
            Self::StateRecognition => "Trực tiếp được NN công nhận",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageStatus {
    #[serde(rename = "dang_the_chap")]
    Mortgaged,
    #[serde(rename = "da_giai_chap")]
    Released,
    #[serde(rename = "khong_the_chap")]
    NeverMortgaged,
}

impl MortgageStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mortgaged => "Đang thế chấp",
            Self::Released => "Đã giải chấp",
            Self::NeverMortgaged => "Không",
        }
    }
}

/// Yes/no answer used by the secured-transaction and tax-debt questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "co")]
    Yes,
    #[serde(rename = "khong")]
    No,
}

/// Name and form of address of a spouse, former spouse or deceased spouse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Party {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "gender")]
    pub honorific: Option<Honorific>,
}

impl Party {
    pub fn new(name: impl Into<String>, honorific: Honorific) -> Self {
        Self {
            name: Some(name.into()),
            honorific: Some(honorific),
        }
    }

    /// `ông Nguyễn Văn A`, or the neutral form when details are missing.
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            honorific_label(self.honorific),
            self.name.as_deref().unwrap_or_default()
        )
    }
}

/// A marriage that ended, by divorce or by the spouse's death.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageEnding {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub former_spouse: Party,
}

impl MarriageEnding {
    pub fn new(date: NaiveDate, former_spouse: Party) -> Self {
        Self {
            date: Some(date),
            former_spouse,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SingleStatus {
    #[serde(rename = "chua_ket_hon")]
    NeverMarried,
    #[serde(rename = "da_ly_hon")]
    Divorced(MarriageEnding),
    #[serde(rename = "vo_chong_chet")]
    Widowed(MarriageEnding),
}

impl SingleStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NeverMarried => "Chưa kết hôn lần nào",
            Self::Divorced(_) => "Đã ly hôn",
            Self::Widowed(_) => "Vợ/chồng đã chết",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum PriorMarriageEnd {
    #[serde(rename = "ly_hon")]
    Divorce(MarriageEnding),
    #[serde(rename = "chet")]
    Death(MarriageEnding),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MarriageKind {
    #[serde(rename = "lan_dau")]
    First,
    #[serde(rename = "khong_phai_lan_dau")]
    Subsequent {
        #[serde(default, rename = "priorEnd")]
        prior_end: Option<PriorMarriageEnd>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarriageRecord {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub marriage_date: Option<NaiveDate>,
    #[serde(default)]
    pub current_spouse: Party,
    #[serde(default)]
    pub marriage_type: Option<MarriageKind>,
}

/// Marital facts of an owner. Only the selected branch can carry data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum MaritalRecord {
    #[serde(rename = "doc_than")]
    Single {
        #[serde(default, rename = "single")]
        status: Option<SingleStatus>,
    },
    #[serde(rename = "co_vo_chong")]
    Married(MarriageRecord),
}

/// One co-owner listed on the certificate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: usize,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "gender")]
    pub honorific: Option<Honorific>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub marital: Option<MaritalRecord>,
}

impl Owner {
    /// Blank owner as created when the roster grows.
    pub fn blank(id: usize) -> Self {
        Self {
            id,
            name: String::new(),
            honorific: Some(Honorific::Ong),
            birth_date: None,
            marital: None,
        }
    }

    pub fn honorific_label(&self) -> &'static str {
        honorific_label(self.honorific)
    }
}

/// The completed fact sheet for one guidance session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionContext {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub guidance_date: Option<NaiveDate>,
    #[serde(default)]
    pub transaction_type: Option<TransactionType>,
    #[serde(default, rename = "hasCertificate")]
    pub certificate: Option<CertificateStatus>,
    #[serde(default, rename = "numberOfOwners")]
    pub owner_count: Option<usize>,
    #[serde(default)]
    pub owners: Vec<Owner>,
    #[serde(default)]
    pub property_origin: Option<PropertyOrigin>,
    #[serde(
        default,
        rename = "propertyOwnershipDate",
        deserialize_with = "deserialize_optional_date"
    )]
    pub acquisition_date: Option<NaiveDate>,
    #[serde(default, rename = "isMortgaged")]
    pub mortgage: Option<MortgageStatus>,
    #[serde(default, rename = "isSecured")]
    pub secured_transaction: Option<Answer>,
    #[serde(default, rename = "hasFinancialDebt")]
    pub tax_debt: Option<Answer>,
}

impl TransactionContext {
    /// Grow or shrink the owner roster to the declared count.
    ///
    /// Existing owners keep their facts; new owners are blank and numbered by
    /// position. A count below one is treated as one.
    pub fn resize_owners(&mut self, count: usize) {
        let target = count.max(1);
        self.owner_count = Some(target);
        if target < self.owners.len() {
            self.owners.truncate(target);
        } else {
            let start = self.owners.len();
            self.owners
                .extend((start..target).map(|index| Owner::blank(index + 1)));
        }
    }

    pub fn is_gift(&self) -> bool {
        self.transaction_type == Some(TransactionType::Gift)
    }
}
