//! Age arithmetic for birth dates given as year and month

use chrono::{Datelike, NaiveDate};

/// Whole years elapsed from `birth` to `today`
///
/// A year counts once today's month and day reach the birth month and day.
/// Birth dates after `today` count backwards and truncate toward zero, so
/// anything less than a full year ahead is still zero.
pub fn whole_years_between(birth: NaiveDate, today: NaiveDate) -> i32 {
    if birth > today {
        return -whole_years_between(today, birth);
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years
}

/// Age on `today` of someone born in the given month, taking the first of
/// the month as the birthday. `None` when the year/month is not a real date.
pub fn age_from_month(year: i32, month: u32, today: NaiveDate) -> Option<i32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|birth| whole_years_between(birth, today))
}

pub fn is_within(age: i32, min: i32, max: i32) -> bool {
    (min..=max).contains(&age)
}
