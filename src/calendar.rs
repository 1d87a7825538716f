//! Calendar facts for the proleptic Gregorian calendar.
//!
//! Every function here is a pure query over `(year, month, day)`. Month
//! arguments must already be balanced into `1..=12`.

use crate::CalendarDate;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_MONTH_LEAP,
    DAYS_PER_WEEK, DECEMBER, FRIDAY, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MIN_DAY, SATURDAY,
    SUNDAY,
};

/// Gregorian leap year rule
pub const fn leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Returns 366 for leap years and 365 otherwise.
pub const fn days_in_year(year: i32) -> i32 {
    if leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Number of days in `month` of `year`.
///
/// # Panics
/// Panics if `month` is outside `1..=12`; balance first.
#[allow(clippy::cast_sign_loss)]
pub fn days_in_month(year: i32, month: i32) -> i32 {
    debug_assert!((JANUARY..=DECEMBER).contains(&month));

    let index = (month - 1) as usize;
    if leap_year(year) {
        DAYS_IN_MONTH_LEAP[index]
    } else {
        DAYS_IN_MONTH[index]
    }
}

/// One-based ordinal of the day within its year.
pub fn day_of_year(year: i32, month: i32, day: i32) -> i32 {
    (JANUARY..month).map(|m| days_in_month(year, m)).sum::<i32>() + day
}

/// ISO weekday, 1 = Monday through 7 = Sunday.
///
/// Zeller's congruence over a March-based year. The month term is
/// `trunc(2.6 * m - 0.2)` evaluated in `f64`, and all other divisions
/// truncate toward zero.
#[allow(clippy::cast_possible_truncation, clippy::suboptimal_flops)]
pub fn day_of_week(year: i32, month: i32, day: i32) -> i32 {
    let shifted_month = if month < 3 { month + 10 } else { month - 2 };
    let march_year = if month < 3 { year - 1 } else { year };
    let century = march_year / 100;
    let year_of_century = march_year - century * 100;

    let month_term = (2.6 * f64::from(shifted_month) - 0.2) as i32;
    let year_term = year_of_century + year_of_century / 4;
    let century_term = century / 4 - 2 * century;

    let dow = (day + month_term + year_term + century_term) % DAYS_PER_WEEK;
    if dow <= 0 { dow + DAYS_PER_WEEK } else { dow }
}

/// ISO 8601 week number (1..=53).
///
/// Days before the first ISO week of `year` report the last week of the
/// previous year (52 or 53); days after the last ISO week report week 1.
pub fn week_of_year(year: i32, month: i32, day: i32) -> i32 {
    let doy = day_of_year(year, month, day);
    let dow = match day_of_week(year, month, day) {
        0 => SUNDAY,
        d => d,
    };
    let jan1 = day_of_week(year, JANUARY, MIN_DAY);

    let week = (doy - dow + 10) / DAYS_PER_WEEK;

    if week < 1 {
        return if jan1 == FRIDAY || (jan1 == SATURDAY && leap_year(year - 1)) {
            53
        } else {
            52
        };
    }
    if week == 53 && days_in_year(year) - doy < 4 - dow {
        return 1;
    }
    week
}

impl CalendarDate {
    /// Returns true if this date's year is a leap year
    pub const fn in_leap_year(&self) -> bool {
        leap_year(self.year)
    }

    /// Number of days in this date's month
    pub fn days_in_month(&self) -> i32 {
        days_in_month(self.year, self.month)
    }

    /// One-based ordinal of this date within its year
    pub fn day_of_year(&self) -> i32 {
        day_of_year(self.year, self.month, self.day)
    }

    /// ISO weekday, 1 = Monday through 7 = Sunday
    pub fn day_of_week(&self) -> i32 {
        day_of_week(self.year, self.month, self.day)
    }

    /// ISO 8601 week number
    pub fn week_of_year(&self) -> i32 {
        week_of_year(self.year, self.month, self.day)
    }
}
