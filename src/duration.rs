//! Duration records and duration balancing.
//!
//! Balancing folds days through nanoseconds into one signed nanosecond count
//! (days are exactly 24 hours here), optionally splits whole days back out,
//! and redistributes the rest across the time units up to a largest unit.
//!
//! The total must fit in an `i64` nanosecond count, roughly ±292 years.

use crate::consts::{
    HOURS_PER_DAY, MINUTES_PER_HOUR, NS_PER_DAY, SECONDS_PER_MINUTE, SUBSECOND_RATIO,
};
use crate::trace::{DiagnosticSink, TracingSink};
use crate::{DurationUnit, NanoDays};
use serde::{Deserialize, Serialize};

/// A ten-field signed duration record.
///
/// Fields are public; [`balance_duration`] fills the time fields after
/// construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    pub years:        i64,
    pub months:       i64,
    pub weeks:        i64,
    pub days:         i64,
    pub hours:        i64,
    pub minutes:      i64,
    pub seconds:      i64,
    pub milliseconds: i64,
    pub microseconds: i64,
    pub nanoseconds:  i64,
}

impl Duration {
    /// Creates a duration down to seconds; sub-second fields start at zero.
    pub const fn new(
        years: i64,
        months: i64,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    ) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
            milliseconds: 0,
            microseconds: 0,
            nanoseconds: 0,
        }
    }

    const fn fields(&self) -> [i64; 10] {
        [
            self.years,
            self.months,
            self.weeks,
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
            self.nanoseconds,
        ]
    }

    /// Sign of the first non-zero field: -1, 0 or 1.
    pub fn sign(&self) -> i64 {
        self.fields()
            .into_iter()
            .find(|&v| v != 0)
            .map_or(0, i64::signum)
    }

    /// Returns true if every field is zero
    pub fn is_zero(&self) -> bool {
        self.fields().iter().all(|&v| v == 0)
    }
}

/// The calendar part of a duration, as added by [`crate::add_date`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateDuration {
    pub years:  i32,
    pub months: i32,
    pub weeks:  i32,
    pub days:   i32,
}

/// Days through nanoseconds, the input to duration balancing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayTimeDuration {
    pub days:         i32,
    pub hours:        i32,
    pub minutes:      i32,
    pub seconds:      i32,
    pub milliseconds: i32,
    pub microseconds: i32,
    pub nanoseconds:  i32,
}

/// Total signed nanoseconds, treating each day as exactly 24 hours.
///
/// Accumulates coarsest to finest in `i64`, so no intermediate step
/// overflows while the result itself fits.
pub fn total_duration_nanoseconds(fields: DayTimeDuration) -> i64 {
    let hours = i64::from(fields.hours) + i64::from(fields.days) * HOURS_PER_DAY;
    let minutes = i64::from(fields.minutes) + hours * MINUTES_PER_HOUR;
    let seconds = i64::from(fields.seconds) + minutes * SECONDS_PER_MINUTE;
    let milliseconds = i64::from(fields.milliseconds) + seconds * SUBSECOND_RATIO;
    let microseconds = i64::from(fields.microseconds) + milliseconds * SUBSECOND_RATIO;
    i64::from(fields.nanoseconds) + microseconds * SUBSECOND_RATIO
}

/// Splits a nanosecond count into whole days and a same-signed remainder.
///
/// Division truncates toward zero: `-1` is zero days and `-1` nanoseconds.
#[allow(clippy::cast_possible_truncation)]
pub const fn nanoseconds_to_days(nanoseconds: i64) -> NanoDays {
    let sign = nanoseconds.signum();
    if sign == 0 {
        return NanoDays::ZERO;
    }

    NanoDays {
        // |i64::MAX / NS_PER_DAY| is 106_751
        days:          (nanoseconds / NS_PER_DAY) as i32,
        nanoseconds:   nanoseconds % NS_PER_DAY,
        day_length_ns: sign * NS_PER_DAY,
    }
}

/// Time fields produced by the nanosecond cascade, all non-negative.
#[derive(Debug, Default)]
struct TimeParts {
    hours:        i64,
    minutes:      i64,
    seconds:      i64,
    milliseconds: i64,
    microseconds: i64,
    nanoseconds:  i64,
}

impl TimeParts {
    /// Carries `magnitude` nanoseconds upward, stopping at `largest_unit`.
    /// Date units cascade all the way to hours.
    fn cascade(magnitude: i64, largest_unit: DurationUnit) -> Self {
        let mut parts = Self {
            nanoseconds: magnitude,
            ..Self::default()
        };

        if largest_unit <= DurationUnit::Microseconds {
            parts.microseconds = parts.nanoseconds / SUBSECOND_RATIO;
            parts.nanoseconds %= SUBSECOND_RATIO;
        }
        if largest_unit <= DurationUnit::Milliseconds {
            parts.milliseconds = parts.microseconds / SUBSECOND_RATIO;
            parts.microseconds %= SUBSECOND_RATIO;
        }
        if largest_unit <= DurationUnit::Seconds {
            parts.seconds = parts.milliseconds / SUBSECOND_RATIO;
            parts.milliseconds %= SUBSECOND_RATIO;
        }
        if largest_unit <= DurationUnit::Minutes {
            parts.minutes = parts.seconds / SECONDS_PER_MINUTE;
            parts.seconds %= SECONDS_PER_MINUTE;
        }
        if largest_unit <= DurationUnit::Hours {
            parts.hours = parts.minutes / MINUTES_PER_HOUR;
            parts.minutes %= MINUTES_PER_HOUR;
        }

        parts
    }
}

/// Balances `fields` up to `largest_unit`, tracing through [`TracingSink`].
pub fn balance_duration(fields: DayTimeDuration, largest_unit: DurationUnit) -> Duration {
    balance_duration_with(fields, largest_unit, &mut TracingSink)
}

/// Balances `fields` so that every time unit finer than `largest_unit` is
/// within its natural range, with one sign across all fields.
///
/// For years, months, weeks or days whole 24-hour days go to `days` and the
/// rest cascades up to hours; otherwise `days` is zero and the whole total
/// cascades up to `largest_unit`. Years, months and weeks are always zero
/// since calendar-unit balancing needs a reference date.
///
/// `sink` receives the total nanosecond count and, for date units, the
/// extracted day count.
pub fn balance_duration_with<S>(
    fields: DayTimeDuration,
    largest_unit: DurationUnit,
    sink: &mut S,
) -> Duration
where
    S: DiagnosticSink + ?Sized,
{
    let total = total_duration_nanoseconds(fields);
    sink.record(&total.to_string());

    let (days, nanoseconds) = if largest_unit.is_date_unit() {
        let split = nanoseconds_to_days(total);
        sink.record(&split.days.to_string());
        (i64::from(split.days), split.nanoseconds)
    } else {
        (0, total)
    };

    let sign = if nanoseconds < 0 { -1 } else { 1 };
    let parts = TimeParts::cascade(nanoseconds.abs(), largest_unit);

    let mut duration = Duration::new(
        0,
        0,
        0,
        days,
        parts.hours * sign,
        parts.minutes * sign,
        parts.seconds * sign,
    );
    duration.milliseconds = parts.milliseconds * sign;
    duration.microseconds = parts.microseconds * sign;
    duration.nanoseconds = parts.nanoseconds * sign;
    duration
}
