// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! Conversions through the Julian Day Number.
//!
//! The Julian Day Number (JDN) is a plain count of days and serves as the
//! bridge between the Persian calendar and absolute millisecond instants.
//! Every function here is pure; division and remainder are floored, so the
//! functions are correct for dates before the calendar epoch as well.
//!
//! Persian dates are given as astronomical years (year 0 precedes year 1)
//! and zero-based months.

use crate::leap::GRAND_CYCLE_YEARS;

/// Julian Day Number of 1 Farvardin of year 1.
pub const PERSIAN_EPOCH: i64 = 1_948_321;

/// The instant of Julian Day 0 at 00:00 UTC, in milliseconds since the Unix epoch.
pub const JULIAN_EPOCH_MILLIS: i64 = -210_866_803_200_000;

/// Milliseconds in a day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// The first Julian Day Number whose Persian year fits in an `i32`.
pub const MIN_JULIAN_DAY: i64 = to_julian_day(i32::MIN as i64, 0, 1);

/// The last Julian Day Number whose Persian year fits in an `i32`.
pub const MAX_JULIAN_DAY: i64 = to_julian_day(i32::MAX as i64 + 1, 0, 1) - 1;

/// Days in a grand cycle of 2820 years.
const GRAND_CYCLE_DAYS: i64 = 1_029_983;

/// Floored division and remainder.
#[inline]
const fn div_mod_floor(this: i64, other: i64) -> (i64, i64) {
    (this.div_euclid(other), this.rem_euclid(other))
}

/// `ceil(a / b)` for a positive divisor.
#[inline]
const fn div_ceil(a: i64, b: i64) -> i64 {
    (a + b - 1).div_euclid(b)
}

/// Returns the Julian Day Number of the given Persian date.
///
/// The fields are not validated: a day past the end of the month spills
/// into the following month, which is what lenient date setting relies on.
///
/// ```
/// use persian_calendar::julian::{to_julian_day, PERSIAN_EPOCH};
///
/// assert_eq!(to_julian_day(1, 0, 1), PERSIAN_EPOCH);
/// // 1361-03-01 is 1982-05-22
/// assert_eq!(to_julian_day(1361, 2, 1), 2_445_112);
/// ```
pub const fn to_julian_day(year: i64, month0: i64, day: i64) -> i64 {
    let (cycle, year_in_cycle) = div_mod_floor(year - 474, GRAND_CYCLE_YEARS);
    let b = year_in_cycle + 474;
    let month_days = if month0 > 6 { 30 * month0 + 6 } else { 31 * month0 };
    (PERSIAN_EPOCH - 1)
        + GRAND_CYCLE_DAYS * cycle
        + 365 * (b - 1)
        + (682 * b - 110).div_euclid(2816)
        + month_days
        + day
}

/// Returns the Persian `(year, month0, day)` of a Julian Day Number.
///
/// # Panics
///
/// Overflows if `jdn` is outside `MIN_JULIAN_DAY..=MAX_JULIAN_DAY`, which covers
/// every day reachable from an `i64` instant. Use [`from_julian_day_opt`] for
/// arbitrary input.
///
/// ```
/// use persian_calendar::julian::from_julian_day;
///
/// assert_eq!(from_julian_day(2_445_112), (1361, 2, 1));
/// ```
pub const fn from_julian_day(jdn: i64) -> (i64, u32, u32) {
    let (cycle, day_in_cycle) = div_mod_floor(jdn - to_julian_day(475, 0, 1), GRAND_CYCLE_DAYS);
    // the last day of a grand cycle trips the general formula
    let year_in_cycle = if day_in_cycle == GRAND_CYCLE_DAYS - 1 {
        GRAND_CYCLE_YEARS
    } else {
        (2816 * day_in_cycle + 1_031_337).div_euclid(1_028_522)
    };
    let year = 474 + GRAND_CYCLE_YEARS * cycle + year_in_cycle;

    let day_of_year = (jdn + 1) - to_julian_day(year, 0, 1);
    let month0 =
        if day_of_year > 186 { div_ceil(day_of_year - 6, 30) - 1 } else { div_ceil(day_of_year, 31) - 1 };
    let day = jdn - (to_julian_day(year, month0, 1) - 1);
    (year, month0 as u32, day as u32)
}

/// Returns the Persian `(year, month0, day)` of a Julian Day Number, or `None`
/// if the year does not fit in an `i32`.
///
/// ```
/// use persian_calendar::julian::{from_julian_day_opt, MAX_JULIAN_DAY};
///
/// assert_eq!(from_julian_day_opt(MAX_JULIAN_DAY), Some((i32::MAX as i64, 11, 29)));
/// assert_eq!(from_julian_day_opt(i64::MAX), None);
/// ```
pub const fn from_julian_day_opt(jdn: i64) -> Option<(i64, u32, u32)> {
    if jdn < MIN_JULIAN_DAY || jdn > MAX_JULIAN_DAY {
        return None;
    }
    Some(from_julian_day(jdn))
}

/// Returns the Julian Day Number of the local date at `instant`, for a
/// local time `offset_millis` ahead of UTC.
///
/// This is total over `i64`: the sum is evaluated in 128 bits.
#[inline]
pub fn instant_to_julian_day(instant: i64, offset_millis: i64) -> i64 {
    let local = i128::from(instant) + i128::from(offset_millis) - i128::from(JULIAN_EPOCH_MILLIS);
    // |result| < 2^64 / 86_400_000, so the narrowing is lossless
    local.div_euclid(i128::from(MILLIS_PER_DAY)) as i64
}

/// Returns the Julian Day Number of the UTC date at `instant`.
#[inline]
pub fn instant_to_utc_julian_day(instant: i64) -> i64 {
    instant_to_julian_day(instant, 0)
}

/// Returns the instant at the start of day `jdn` plus the time of day of `reference`.
///
/// Returns `None` if the result does not fit in an `i64`.
///
/// ```
/// use persian_calendar::julian::julian_day_to_instant;
///
/// // noon on 1970-01-01 moved to 1970-01-02
/// assert_eq!(julian_day_to_instant(2_440_589, 43_200_000), Some(129_600_000));
/// ```
#[inline]
pub fn julian_day_to_instant(jdn: i64, reference: i64) -> Option<i64> {
    let time_of_day = reference.rem_euclid(MILLIS_PER_DAY);
    jdn.checked_mul(MILLIS_PER_DAY)?.checked_add(JULIAN_EPOCH_MILLIS)?.checked_add(time_of_day)
}
