//! Civil-calendar arithmetic for Temporal-style date and duration types.
//!
//! Three layers, each built on the one below:
//!
//! - [`calendar`]: leap years, month lengths, day of year, ISO weekday and
//!   ISO week number.
//! - [`balance`]: carrying out-of-range months and days back into a
//!   canonical date, the reject/constrain overflow policy, and date addition.
//! - [`duration`]: folding days through nanoseconds into one signed count
//!   and redistributing it up to a largest unit.
//!
//! All arithmetic is proleptic Gregorian and every function is pure; the
//! only side channel is the [`DiagnosticSink`] passed to duration balancing.
//!
//! ```
//! use civil_calendar::{CalendarDate, DateDuration, Overflow};
//!
//! let jan31 = CalendarDate::new(2023, 1, 31);
//! let one_month = DateDuration { months: 1, ..DateDuration::default() };
//! assert_eq!(jan31.add(one_month, Overflow::Constrain), CalendarDate::new(2023, 2, 28));
//! ```

pub mod balance;
pub mod calendar;
mod consts;
pub mod duration;
mod prelude;
pub mod trace;
mod types;

pub use balance::{
    add_date, balance_date, balance_year_month, constrain_date, constrain_to_range, regulate_date,
    regulate_date_with,
};
pub use calendar::{day_of_week, day_of_year, days_in_month, days_in_year, leap_year, week_of_year};
pub use consts::*;
pub use duration::{
    DateDuration, DayTimeDuration, Duration, balance_duration, balance_duration_with,
    nanoseconds_to_days, total_duration_nanoseconds,
};
pub use trace::{DiagnosticSink, NoopSink, TracingSink};
pub use types::{CalendarDate, DurationUnit, NanoDays, Overflow, YearMonth};

/// Errors from validating dates and parsing option strings.
///
/// The arithmetic itself never fails; these only come from checked
/// construction and `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {month} (must be 1-12) in year {year}")]
    InvalidMonth { year: i32, month: i32 },

    /// Day that does not exist in its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    /// Unrecognized duration unit name.
    #[error("Unknown duration unit: {0}")]
    UnknownUnit(String),

    /// Unrecognized overflow option.
    #[error("Unknown overflow option: {0} (expected 'reject' or 'constrain')")]
    UnknownOverflow(String),
}
