/// Number of months in a Gregorian year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Month number for January
pub const JANUARY: i32 = 1;
/// Month number for February
pub const FEBRUARY: i32 = 2;
/// Month number for December
pub const DECEMBER: i32 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: i32 = 1;

/// Days in a common (non-leap) year
pub const DAYS_IN_COMMON_YEAR: i32 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: i32 = 366;

/// Days per week
pub const DAYS_PER_WEEK: i32 = 7;

/// ISO weekday number for Friday (Monday = 1)
pub const FRIDAY: i32 = 5;
/// ISO weekday number for Saturday
pub const SATURDAY: i32 = 6;
/// ISO weekday number for Sunday
pub const SUNDAY: i32 = 7;

/// Month lengths for a common year, indexed by `month - 1`
pub const DAYS_IN_MONTH: [i32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month lengths for a leap year, indexed by `month - 1`
pub const DAYS_IN_MONTH_LEAP: [i32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Hours in an exact 24-hour day
pub const HOURS_PER_DAY: i64 = 24;
/// Minutes per hour
pub const MINUTES_PER_HOUR: i64 = 60;
/// Seconds per minute
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Ratio between adjacent sub-second units (s/ms, ms/us, us/ns)
pub const SUBSECOND_RATIO: i64 = 1_000;

/// Nanoseconds in an exact 24-hour day
pub const NS_PER_DAY: i64 = 86_400_000_000_000;
