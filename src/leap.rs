// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! The leap year rule of the Persian calendar.
//!
//! Years are grouped into a grand cycle of 2820 years holding 683 leap years,
//! for a mean year of 365.24219852 days. The rule is evaluated with floored
//! division so that years before 474 (and before year 1) fall into the right
//! place of the cycle.

/// Length of the grand cycle in years.
pub const GRAND_CYCLE_YEARS: i64 = 2820;

/// Returns `true` if the (astronomical) Persian `year` is a leap year.
///
/// ```
/// use persian_calendar::leap::is_leap_year;
///
/// assert!(is_leap_year(1399));
/// assert!(!is_leap_year(1400));
/// ```
#[inline]
pub const fn is_leap_year(year: i64) -> bool {
    let b = (year - 474).rem_euclid(GRAND_CYCLE_YEARS) + 474;
    ((b + 38) * 682).rem_euclid(2816) < 682
}

/// Number of days in `year`, 365 or 366.
#[inline]
pub const fn days_in_year(year: i64) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in the zero-based `month0` of `year`.
///
/// The first six months have 31 days, the next five 30, and Esfand has 29 days
/// or 30 in a leap year. Returns `None` if `month0` is not in `0..12`.
#[inline]
pub const fn days_in_month(year: i64, month0: u32) -> Option<u32> {
    match month0 {
        0..=5 => Some(31),
        6..=10 => Some(30),
        11 if is_leap_year(year) => Some(30),
        11 => Some(29),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, days_in_year, is_leap_year};

    #[test]
    fn test_leap_reference_years() {
        for year in [1375, 1379, 1383, 1387, 1391, 1395, 1399] {
            assert!(is_leap_year(year), "{} should be a leap year", year);
        }
        for year in [1376, 1400] {
            assert!(!is_leap_year(year), "{} should be a common year", year);
        }
    }

    #[test]
    fn test_leap_pre_epoch() {
        // the cycle extends backwards: astronomical years 0 and -4 are leap years
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-1));
        assert!(!is_leap_year(-5));
    }

    #[test]
    fn test_leap_count_per_grand_cycle() {
        let leaps = (474..474 + 2820).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 683);
        let leaps = (-2346..-2346 + 2820).filter(|&y| is_leap_year(y)).count();
        assert_eq!(leaps, 683);
    }

    #[test]
    fn test_days_in_month() {
        for year in -3000..=3000 {
            for month0 in 0..6 {
                assert_eq!(days_in_month(year, month0), Some(31));
            }
            for month0 in 6..11 {
                assert_eq!(days_in_month(year, month0), Some(30));
            }
            let esfand = if is_leap_year(year) { 30 } else { 29 };
            assert_eq!(days_in_month(year, 11), Some(esfand));

            let total: u32 = (0..12).filter_map(|m| days_in_month(year, m)).sum();
            assert_eq!(total, days_in_year(year));
        }
        assert_eq!(days_in_month(1400, 12), None);
    }
}
