//! Date arithmetic and ordering predicates shared by the validator and classifier.
//!
//! Unset dates never fail: shifting passes them through and every comparison
//! against an unset date is simply false.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Shift a date by whole calendar years, keeping day and month.
///
/// 29 February rolls over to 1 March when the target year is not a leap year.
pub fn add_years(date: Option<NaiveDate>, years: i32) -> Option<NaiveDate> {
    let date = date?;
    let year = date.year() + years;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// `d1 < d2`; false when either side is unset.
pub fn before(d1: Option<NaiveDate>, d2: Option<NaiveDate>) -> bool {
    matches!((d1, d2), (Some(a), Some(b)) if a < b)
}

/// `d1 <= d2`; false when either side is unset.
pub fn before_or_equal(d1: Option<NaiveDate>, d2: Option<NaiveDate>) -> bool {
    matches!((d1, d2), (Some(a), Some(b)) if a <= b)
}

/// Age in fractional years (days / 365.25) with two decimals. Display only.
pub fn exact_age(birth: Option<NaiveDate>, today: Option<NaiveDate>) -> String {
    match (birth, today) {
        (Some(birth), Some(today)) => {
            let days = (today - birth).num_days() as f64;
            format!("{:.2}", days / 365.25)
        }
        _ => "0".to_string(),
    }
}

/// Whole calendar years between `birth` and `today`.
pub fn completed_years(birth: Option<NaiveDate>, today: Option<NaiveDate>) -> i32 {
    let (Some(birth), Some(today)) = (birth, today) else {
        return 0;
    };
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// `DD/MM/YYYY`, or an empty string when unset.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Accepts `null`, a missing value or a blank string as unset.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}
