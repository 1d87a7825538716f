use crate::CalendarError;
use crate::calendar::days_in_month;
use crate::consts::{MIN_DAY, MONTHS_PER_YEAR, NS_PER_DAY};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A proleptic Gregorian `(year, month, day)` triple.
///
/// The fields are public and unchecked: balancing and regulation pass
/// intermediate values through this type that are not valid dates yet.
/// A value is canonical when `1 <= month <= 12` and
/// `1 <= day <= days_in_month(year, month)`; see [`CalendarDate::is_canonical`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Into,
)]
pub struct CalendarDate {
    pub year:  i32,
    pub month: i32,
    pub day:   i32,
}

impl CalendarDate {
    /// Creates a date without checking it.
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Creates a canonical date, validating month and day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the month is outside `1..=12`,
    /// or `CalendarError::InvalidDay` if the day does not exist in that month.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns true if month and day are within their natural ranges.
    pub fn is_canonical(&self) -> bool {
        (1..=MONTHS_PER_YEAR).contains(&self.month)
            && (MIN_DAY..=days_in_month(self.year, self.month)).contains(&self.day)
    }

    /// Returns the year and month, dropping the day
    pub const fn year_month(&self) -> YearMonth {
        YearMonth {
            year:  self.year,
            month: self.month,
        }
    }
}

/// A `(year, month)` pair, canonical when `1 <= month <= 12`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, From, Into,
)]
pub struct YearMonth {
    pub year:  i32,
    pub month: i32,
}

impl YearMonth {
    pub const fn new(year: i32, month: i32) -> Self {
        Self { year, month }
    }
}

/// A signed nanosecond count split into whole 24-hour days and a sub-day
/// remainder.
///
/// `day_length_ns` carries the sign of the split value (`+NS_PER_DAY` for
/// zero), and a non-zero remainder has that same sign with
/// `|nanoseconds| < NS_PER_DAY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NanoDays {
    pub days:          i32,
    pub nanoseconds:   i64,
    pub day_length_ns: i64,
}

impl NanoDays {
    /// The split of a zero duration
    pub const ZERO: Self = Self {
        days:          0,
        nanoseconds:   0,
        day_length_ns: NS_PER_DAY,
    };
}

/// How to treat a date whose month or day is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Leave the value to a caller-supplied validator
    #[display(fmt = "reject")]
    Reject,
    /// Clamp month and day into range
    #[display(fmt = "constrain")]
    Constrain,
}

impl FromStr for Overflow {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "reject" => Ok(Self::Reject),
            "constrain" => Ok(Self::Constrain),
            other => Err(CalendarError::UnknownOverflow(other.to_owned())),
        }
    }
}

/// Duration granularities, declared coarsest to finest.
///
/// The derived ordering follows declaration order, so `Years < Nanoseconds`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[display(fmt = "years")]
    Years,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "hours")]
    Hours,
    #[display(fmt = "minutes")]
    Minutes,
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "milliseconds")]
    Milliseconds,
    #[display(fmt = "microseconds")]
    Microseconds,
    #[display(fmt = "nanoseconds")]
    Nanoseconds,
}

impl DurationUnit {
    /// Every unit, coarsest first
    pub const ALL: [Self; 10] = [
        Self::Years,
        Self::Months,
        Self::Weeks,
        Self::Days,
        Self::Hours,
        Self::Minutes,
        Self::Seconds,
        Self::Milliseconds,
        Self::Microseconds,
        Self::Nanoseconds,
    ];

    /// Returns true for years, months, weeks and days.
    pub fn is_date_unit(self) -> bool {
        self <= Self::Days
    }
}

impl FromStr for DurationUnit {
    type Err = CalendarError;

    /// Accepts plural and singular lower-case names ("hours", "hour").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim() {
            "years" | "year" => Self::Years,
            "months" | "month" => Self::Months,
            "weeks" | "week" => Self::Weeks,
            "days" | "day" => Self::Days,
            "hours" | "hour" => Self::Hours,
            "minutes" | "minute" => Self::Minutes,
            "seconds" | "second" => Self::Seconds,
            "milliseconds" | "millisecond" => Self::Milliseconds,
            "microseconds" | "microsecond" => Self::Microseconds,
            "nanoseconds" | "nanosecond" => Self::Nanoseconds,
            other => return Err(CalendarError::UnknownUnit(other.to_owned())),
        };
        Ok(unit)
    }
}
