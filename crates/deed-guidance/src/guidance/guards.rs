//! Guard predicates shared by the completeness validator and the owner classifier.
//!
//! The validator only asks for a spouse's identity when the classifier would put
//! that spouse on the deed, so both sides must call these same functions.

use chrono::NaiveDate;

use super::temporal::{add_years, before, before_or_equal};

pub(crate) const AGE_OF_MAJORITY: i32 = 18;
pub(crate) const CONSENT_AGE: i32 = 15;
pub(crate) const CO_SIGN_AGE: i32 = 9;

/// `today < birth + years`.
pub(crate) fn younger_than(
    birth: Option<NaiveDate>,
    today: Option<NaiveDate>,
    years: i32,
) -> bool {
    before(today, add_years(birth, years))
}

/// `birth + years <= today`.
pub(crate) fn at_least(birth: Option<NaiveDate>, today: Option<NaiveDate>, years: i32) -> bool {
    before_or_equal(add_years(birth, years), today)
}

/// A divorce or death strictly before acquisition leaves no marital claim.
pub(crate) fn ended_before_acquisition(
    ended_on: Option<NaiveDate>,
    acquired_on: Option<NaiveDate>,
) -> bool {
    before(ended_on, acquired_on)
}

/// Acquisition on or before the divorce/death: the asset arose inside that marriage.
pub(crate) fn acquired_within_ended_marriage(
    acquired_on: Option<NaiveDate>,
    ended_on: Option<NaiveDate>,
) -> bool {
    before_or_equal(acquired_on, ended_on)
}

/// Marriage on or before acquisition: joint property with the current spouse.
pub(crate) fn acquired_during_current_marriage(
    married_on: Option<NaiveDate>,
    acquired_on: Option<NaiveDate>,
) -> bool {
    before_or_equal(married_on, acquired_on)
}

pub(crate) fn acquired_before_marriage(
    acquired_on: Option<NaiveDate>,
    married_on: Option<NaiveDate>,
) -> bool {
    before(acquired_on, married_on)
}

/// Prior marriage ended, then the asset was acquired, then the owner remarried.
pub(crate) fn acquired_between_marriages(
    prior_ended_on: Option<NaiveDate>,
    acquired_on: Option<NaiveDate>,
    married_on: Option<NaiveDate>,
) -> bool {
    ended_before_acquisition(prior_ended_on, acquired_on)
        && acquired_before_marriage(acquired_on, married_on)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn same_day_divorce_counts_as_within_marriage() {
        let day = date(2015, 1, 1);
        assert!(!ended_before_acquisition(day, day));
        assert!(acquired_within_ended_marriage(day, day));
    }

    #[test]
    fn age_brackets_meet_on_the_birthday() {
        let birth = date(2006, 1, 1);
        let birthday = date(2024, 1, 1);
        assert!(at_least(birth, birthday, AGE_OF_MAJORITY));
        assert!(!younger_than(birth, birthday, AGE_OF_MAJORITY));
        assert!(younger_than(birth, date(2023, 12, 31), AGE_OF_MAJORITY));
    }

    #[test]
    fn between_marriages_requires_both_strict_orderings() {
        assert!(acquired_between_marriages(
            date(2005, 1, 1),
            date(2008, 1, 1),
            date(2010, 1, 1)
        ));
        assert!(!acquired_between_marriages(
            date(2005, 1, 1),
            date(2010, 1, 1),
            date(2010, 1, 1)
        ));
    }
}
