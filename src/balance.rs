//! Date balancing, overflow regulation, and calendar-aware date addition.

use crate::calendar::{days_in_month, days_in_year};
use crate::consts::{DAYS_PER_WEEK, DECEMBER, FEBRUARY, JANUARY, MIN_DAY, MONTHS_PER_YEAR};
use crate::{CalendarDate, CalendarError, DateDuration, Overflow, YearMonth};

/// Carries an arbitrary month number into the year so that the month lands
/// in `1..=12`. Month 0 is December of the previous year.
pub const fn balance_year_month(year: i32, month: i32) -> YearMonth {
    let zero_based = month - 1;
    YearMonth {
        year:  year + zero_based.div_euclid(MONTHS_PER_YEAR),
        month: zero_based.rem_euclid(MONTHS_PER_YEAR) + 1,
    }
}

/// Normalizes an out-of-range `(year, month, day)` into a canonical date.
///
/// Whole years are absorbed from `day` first, then whole months, so large
/// day offsets do not walk month by month.
pub fn balance_date(year: i32, month: i32, day: i32) -> CalendarDate {
    let YearMonth {
        mut year,
        mut month,
    } = balance_year_month(year, month);
    let mut day = day;

    // Year whose length covers the span ending at this month's next February
    let mut test_year = if month > FEBRUARY { year } else { year - 1 };

    while day < -days_in_year(test_year) {
        day += days_in_year(test_year);
        year -= 1;
        test_year -= 1;
    }

    test_year += 1;

    while day > days_in_year(test_year) {
        day -= days_in_year(test_year);
        year += 1;
        test_year += 1;
    }

    while day < MIN_DAY {
        YearMonth { year, month } = balance_year_month(year, month - 1);
        day += days_in_month(year, month);
    }

    while day > days_in_month(year, month) {
        day -= days_in_month(year, month);
        YearMonth { year, month } = balance_year_month(year, month + 1);
    }

    CalendarDate::new(year, month, day)
}

/// Clamps `value` into `min..=max`.
///
/// Unlike [`i32::clamp`] this never panics; with `min > max` the result is `max`.
pub fn constrain_to_range(value: i32, min: i32, max: i32) -> i32 {
    value.max(min).min(max)
}

/// Clamps the month into `1..=12`, then the day into the clamped month.
pub fn constrain_date(year: i32, month: i32, day: i32) -> CalendarDate {
    let month = constrain_to_range(month, JANUARY, DECEMBER);
    let day = constrain_to_range(day, MIN_DAY, days_in_month(year, month));
    CalendarDate::new(year, month, day)
}

/// Applies `overflow` to a date whose month is already balanced.
///
/// `Overflow::Reject` returns the input unchanged: this crate does not decide
/// what a rejected date is. Use [`regulate_date_with`] to supply that check.
pub fn regulate_date(year: i32, month: i32, day: i32, overflow: Overflow) -> CalendarDate {
    match overflow {
        Overflow::Reject => CalendarDate::new(year, month, day),
        Overflow::Constrain => constrain_date(year, month, day),
    }
}

/// Like [`regulate_date`], but routes `Overflow::Reject` through `reject`.
///
/// The hook is only called under `Reject`. [`CalendarDate::try_new`] is a
/// ready-made hook that rejects non-canonical dates.
///
/// # Errors
/// Returns whatever error `reject` returns.
pub fn regulate_date_with<F>(
    year: i32,
    month: i32,
    day: i32,
    overflow: Overflow,
    reject: F,
) -> Result<CalendarDate, CalendarError>
where
    F: FnOnce(CalendarDate) -> Result<CalendarDate, CalendarError>,
{
    match overflow {
        Overflow::Reject => reject(CalendarDate::new(year, month, day)),
        Overflow::Constrain => Ok(constrain_date(year, month, day)),
    }
}

/// Adds a calendar delta to `date`.
///
/// Years and months are applied and regulated before weeks and days, so
/// Jan 31 plus one month constrains to the end of February before any day
/// offset is added.
pub fn add_date(date: CalendarDate, delta: DateDuration, overflow: Overflow) -> CalendarDate {
    let YearMonth { year, month } =
        balance_year_month(date.year + delta.years, date.month + delta.months);
    let regulated = regulate_date(year, month, date.day, overflow);
    let days = delta.days + DAYS_PER_WEEK * delta.weeks;
    balance_date(regulated.year, regulated.month, regulated.day + days)
}

impl CalendarDate {
    /// Returns the canonical date this value denotes
    pub fn balanced(self) -> Self {
        balance_date(self.year, self.month, self.day)
    }

    /// Returns this date with month and day clamped into range
    pub fn constrained(self) -> Self {
        constrain_date(self.year, self.month, self.day)
    }

    /// Returns this date regulated under `overflow`
    pub fn regulated(self, overflow: Overflow) -> Self {
        regulate_date(self.year, self.month, self.day, overflow)
    }

    /// Returns this date plus `delta`; see [`add_date`]
    pub fn add(self, delta: DateDuration, overflow: Overflow) -> Self {
        add_date(self, delta, overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: i32, day: i32) -> CalendarDate {
        CalendarDate::new(year, month, day)
    }

    #[test]
    fn test_balance_year_month() {
        let cases = [
            ((2023, 13), (2024, 1)),
            ((2023, 0), (2022, 12)),
            ((2023, -13), (2021, 11)),
            ((2023, 25), (2025, 1)),
            ((2023, 12), (2023, 12)),
            ((2023, 1), (2023, 1)),
            ((2023, -11), (2022, 1)),
            ((2023, -12), (2021, 12)),
        ];

        for ((year, month), expected) in cases {
            assert_eq!(
                balance_year_month(year, month),
                YearMonth::from(expected),
                "balance_year_month({year}, {month})"
            );
        }
    }

    #[test]
    fn test_balance_date_cases() {
        struct TestCase {
            input:       (i32, i32, i32),
            expected:    (i32, i32, i32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       (2023, 1, 32),
                expected:    (2023, 2, 1),
                description: "day past end of January",
            },
            TestCase {
                input:       (2023, 3, 0),
                expected:    (2023, 2, 28),
                description: "day zero borrows from February",
            },
            TestCase {
                input:       (2024, 3, 0),
                expected:    (2024, 2, 29),
                description: "day zero in a leap year",
            },
            TestCase {
                input:       (2023, 12, 32),
                expected:    (2024, 1, 1),
                description: "carry into next year",
            },
            TestCase {
                input:       (2023, 1, 0),
                expected:    (2022, 12, 31),
                description: "borrow from previous year",
            },
            TestCase {
                input:       (2023, 1, -365),
                expected:    (2021, 12, 31),
                description: "negative day spanning a year",
            },
            TestCase {
                input:       (2023, 1, 366),
                expected:    (2024, 1, 1),
                description: "one common year of days",
            },
            TestCase {
                input:       (2024, 1, 400),
                expected:    (2025, 2, 3),
                description: "leap year span plus remainder",
            },
            TestCase {
                input:       (2020, 2, 1461),
                expected:    (2024, 1, 31),
                description: "four-year span starting in February",
            },
            TestCase {
                input:       (2023, 1, -730),
                expected:    (2020, 12, 31),
                description: "two years backwards across a leap year",
            },
            TestCase {
                input:       (2000, 14, -1),
                expected:    (2001, 1, 30),
                description: "month and day both out of range",
            },
        ];

        for case in &cases {
            let (y, m, d) = case.input;
            assert_eq!(
                balance_date(y, m, d),
                CalendarDate::from(case.expected),
                "balance_date({y}, {m}, {d}): {}",
                case.description
            );
        }
    }

    #[test]
    fn test_balance_date_leaves_canonical_dates_alone() {
        for date in [ymd(2024, 2, 29), ymd(2023, 12, 31), ymd(1, 1, 1), ymd(2023, 6, 15)] {
            assert_eq!(date.balanced(), date);
        }
    }

    #[test]
    fn test_constrain_to_range() {
        assert_eq!(constrain_to_range(5, 1, 10), 5);
        assert_eq!(constrain_to_range(-5, 1, 10), 1);
        assert_eq!(constrain_to_range(50, 1, 10), 10);
        assert_eq!(constrain_to_range(5, 10, 1), 1);
    }

    #[test]
    fn test_constrain_date() {
        assert_eq!(constrain_date(2023, 13, 1), ymd(2023, 12, 1));
        assert_eq!(constrain_date(2024, 2, 30), ymd(2024, 2, 29));
        assert_eq!(constrain_date(2023, 2, 30), ymd(2023, 2, 28));
        assert_eq!(constrain_date(2023, 0, 0), ymd(2023, 1, 1));
        assert_eq!(constrain_date(2023, 4, 31), ymd(2023, 4, 30));
    }

    #[test]
    fn test_constrain_date_clamps_month_before_day() {
        // Month 14 clamps to December, so day 31 survives
        assert_eq!(constrain_date(2023, 14, 31), ymd(2023, 12, 31));
        // Month -3 clamps to January
        assert_eq!(constrain_date(2023, -3, 40), ymd(2023, 1, 31));
    }

    #[test]
    fn test_regulate_date() {
        assert_eq!(regulate_date(2023, 2, 31, Overflow::Constrain), ymd(2023, 2, 28));
        assert_eq!(regulate_date(2023, 2, 31, Overflow::Reject), ymd(2023, 2, 31));
        assert_eq!(ymd(2023, 2, 31).regulated(Overflow::Reject), ymd(2023, 2, 31));
        assert_eq!(ymd(2023, 2, 31).constrained(), ymd(2023, 2, 28));
    }

    #[test]
    fn test_regulate_date_with_calls_hook_only_on_reject() {
        let rejected = regulate_date_with(2023, 2, 31, Overflow::Reject, |d| {
            CalendarDate::try_new(d.year, d.month, d.day)
        });
        assert!(matches!(
            rejected,
            Err(CalendarError::InvalidDay {
                year:  2023,
                month: 2,
                day:   31,
            })
        ));

        let accepted = regulate_date_with(2023, 2, 28, Overflow::Reject, |d| {
            CalendarDate::try_new(d.year, d.month, d.day)
        });
        assert_eq!(accepted.unwrap(), ymd(2023, 2, 28));

        let constrained = regulate_date_with(2023, 2, 31, Overflow::Constrain, |_| {
            panic!("reject hook must not run under Constrain")
        });
        assert_eq!(constrained.unwrap(), ymd(2023, 2, 28));
    }

    #[test]
    fn test_add_date_cases() {
        struct TestCase {
            start:       (i32, i32, i32),
            delta:       (i32, i32, i32, i32),
            overflow:    Overflow,
            expected:    (i32, i32, i32),
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       (2023, 1, 31),
                delta:       (0, 1, 0, 0),
                overflow:    Overflow::Constrain,
                expected:    (2023, 2, 28),
                description: "month end constrains into February",
            },
            TestCase {
                start:       (2024, 1, 31),
                delta:       (0, 1, 0, 0),
                overflow:    Overflow::Constrain,
                expected:    (2024, 2, 29),
                description: "month end constrains into leap February",
            },
            TestCase {
                start:       (2024, 2, 29),
                delta:       (1, 0, 0, 0),
                overflow:    Overflow::Constrain,
                expected:    (2025, 2, 28),
                description: "leap day plus a year",
            },
            TestCase {
                start:       (2023, 1, 31),
                delta:       (0, 1, 0, 0),
                overflow:    Overflow::Reject,
                expected:    (2023, 3, 3),
                description: "unregulated day spills into March",
            },
            TestCase {
                start:       (2023, 3, 31),
                delta:       (0, -1, 0, 0),
                overflow:    Overflow::Constrain,
                expected:    (2023, 2, 28),
                description: "subtracting a month",
            },
            TestCase {
                start:       (2023, 12, 31),
                delta:       (0, 0, 0, 1),
                overflow:    Overflow::Constrain,
                expected:    (2024, 1, 1),
                description: "one day across new year",
            },
            TestCase {
                start:       (2023, 1, 1),
                delta:       (0, 0, 2, 3),
                overflow:    Overflow::Constrain,
                expected:    (2023, 1, 18),
                description: "weeks and days",
            },
            TestCase {
                start:       (2023, 1, 1),
                delta:       (0, 0, -1, 0),
                overflow:    Overflow::Constrain,
                expected:    (2022, 12, 25),
                description: "negative week",
            },
            TestCase {
                start:       (2023, 5, 15),
                delta:       (-1, -5, 0, -20),
                overflow:    Overflow::Constrain,
                expected:    (2021, 11, 25),
                description: "all components negative",
            },
            TestCase {
                start:       (2023, 1, 1),
                delta:       (0, 0, 0, 365),
                overflow:    Overflow::Constrain,
                expected:    (2024, 1, 1),
                description: "a common year of days",
            },
        ];

        for case in &cases {
            let (years, months, weeks, days) = case.delta;
            let delta = DateDuration {
                years,
                months,
                weeks,
                days,
            };
            let start = CalendarDate::from(case.start);
            assert_eq!(
                add_date(start, delta, case.overflow),
                CalendarDate::from(case.expected),
                "{}",
                case.description
            );
            assert_eq!(start.add(delta, case.overflow), CalendarDate::from(case.expected));
        }
    }
}
