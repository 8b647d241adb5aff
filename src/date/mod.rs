// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! A date in the Persian (Solar Hijri) calendar.

use core::fmt;
use core::str::FromStr;

use chrono::Weekday;

use crate::format::{locales, parse, DelayedFormat, Style};
use crate::julian;
use crate::leap;
use crate::{Error, ErrorKind};

#[cfg(feature = "serde")]
mod serde;

/// A validated Persian calendar date.
///
/// The year is astronomical: year 0 is the year before year 1, year -1 the
/// one before that. Months are stored zero-based; [`month`](Self::month)
/// returns the one-based month for display.
///
/// Dates order chronologically.
///
/// ```
/// use persian_calendar::PersianDate;
///
/// let date = PersianDate::from_ymd_opt(1361, 3, 1).unwrap();
/// assert_eq!(date.month0(), 2);
/// assert_eq!(date.to_string(), "1361/03/01");
/// assert_eq!(date.month_name(), "خرداد");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct PersianDate {
    year: i32,
    month0: u32,
    day: u32,
}

impl PersianDate {
    /// Makes a new `PersianDate` from the year, the zero-based month and the day.
    ///
    /// Returns `None` if the month or the day is out of range.
    pub const fn from_ymd0_opt(year: i32, month0: u32, day: u32) -> Option<PersianDate> {
        match leap::days_in_month(year as i64, month0) {
            Some(ndays) if day >= 1 && day <= ndays => Some(PersianDate { year, month0, day }),
            _ => None,
        }
    }

    /// Makes a new `PersianDate` from the year, the one-based month and the day.
    ///
    /// Returns `None` if the month or the day is out of range.
    pub const fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<PersianDate> {
        match month.checked_sub(1) {
            Some(month0) => PersianDate::from_ymd0_opt(year, month0, day),
            None => None,
        }
    }

    /// Makes a new `PersianDate` for the given Julian Day Number.
    ///
    /// Returns `None` if the year does not fit in an `i32`.
    pub fn from_julian_day(jdn: i64) -> Option<PersianDate> {
        let (year, month0, day) = julian::from_julian_day_opt(jdn)?;
        Some(PersianDate { year: year as i32, month0, day })
    }

    /// Builds a date from fields already produced by `julian::from_julian_day`.
    #[inline]
    pub(crate) const fn from_parts(year: i32, month0: u32, day: u32) -> PersianDate {
        PersianDate { year, month0, day }
    }

    /// Parses a date written as `year`, one-based `month` and `day` separated by `delimiter`.
    ///
    /// ```
    /// use persian_calendar::PersianDate;
    ///
    /// let date = PersianDate::parse_from_str("1361 , 03 , 01", " , ").unwrap();
    /// assert_eq!(date, PersianDate::from_ymd_opt(1361, 3, 1).unwrap());
    /// ```
    pub fn parse_from_str(s: &str, delimiter: &str) -> Result<PersianDate, Error> {
        let (year, month, day) = parse::parse_ymd(s, delimiter)?;
        PersianDate::from_ymd_opt(year, month, day).ok_or(Error::new(ErrorKind::InvalidDate))
    }

    /// Returns the Julian Day Number of this date.
    #[inline]
    pub const fn to_julian_day(&self) -> i64 {
        julian::to_julian_day(self.year as i64, self.month0 as i64, self.day as i64)
    }

    /// Returns the astronomical year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month starting from 1.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month0 + 1
    }

    /// Returns the month starting from 0.
    #[inline]
    pub const fn month0(&self) -> u32 {
        self.month0
    }

    /// Returns the day of month starting from 1.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Returns the day of year starting from 1.
    #[inline]
    pub const fn ordinal(&self) -> u32 {
        let before = if self.month0 > 6 { 30 * self.month0 + 6 } else { 31 * self.month0 };
        before + self.day
    }

    /// Returns `true` if the year of this date is a leap year.
    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        leap::is_leap_year(self.year as i64)
    }

    /// Returns the number of days in the month of this date.
    #[inline]
    pub const fn days_in_month(&self) -> u32 {
        match leap::days_in_month(self.year as i64, self.month0) {
            Some(ndays) => ndays,
            None => 0,
        }
    }

    /// Returns the day of week.
    pub const fn weekday(&self) -> Weekday {
        // Julian Day 0 was a Monday
        const FROM_MONDAY: [Weekday; 7] = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        FROM_MONDAY[self.to_julian_day().rem_euclid(7) as usize]
    }

    /// Returns the Persian name of the month.
    #[inline]
    pub fn month_name(&self) -> &'static str {
        locales::month_name(self.month0)
    }

    /// Returns the Persian name of the day of week.
    #[inline]
    pub fn weekday_name(&self) -> &'static str {
        locales::weekday_name(self.weekday())
    }

    /// Formats the date as `YYYY/MM/DD`.
    #[inline]
    pub fn short_date(&self) -> DelayedFormat<'static> {
        DelayedFormat::new(Style::ShortDate, *self, None)
    }

    /// Formats the date with the weekday and month names, as in `شنبه  01  خرداد  1361`.
    #[inline]
    pub fn long_date(&self) -> DelayedFormat<'static> {
        DelayedFormat::new(Style::LongDate, *self, None)
    }
}

impl fmt::Debug for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.short_date(), f)
    }
}

/// The format is the short date with `/` as delimiter.
impl fmt::Display for PersianDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.short_date(), f)
    }
}

/// Parses `YYYY/MM/DD`, the inverse of the `Display` format.
impl FromStr for PersianDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<PersianDate, Error> {
        PersianDate::parse_from_str(s, "/")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::PersianDate;
    use crate::julian::{self, PERSIAN_EPOCH};
    use crate::ErrorKind;

    #[test]
    fn test_date_bounds() {
        assert!(PersianDate::from_ymd0_opt(1400, 0, 31).is_some());
        assert!(PersianDate::from_ymd0_opt(1400, 0, 32).is_none());
        assert!(PersianDate::from_ymd0_opt(1400, 6, 30).is_some());
        assert!(PersianDate::from_ymd0_opt(1400, 6, 31).is_none());
        assert!(PersianDate::from_ymd0_opt(1399, 11, 30).is_some());
        assert!(PersianDate::from_ymd0_opt(1400, 11, 30).is_none());
        assert!(PersianDate::from_ymd0_opt(1400, 11, 29).is_some());
        assert!(PersianDate::from_ymd0_opt(1400, 12, 1).is_none());
        assert!(PersianDate::from_ymd0_opt(1400, 0, 0).is_none());
        assert!(PersianDate::from_ymd_opt(1400, 0, 1).is_none());
        assert!(PersianDate::from_ymd_opt(1400, 12, 29).is_some());
        assert!(PersianDate::from_ymd_opt(0, 12, 30).is_some());
    }

    #[test]
    fn test_date_julian_day() {
        let epoch = PersianDate::from_ymd_opt(1, 1, 1).unwrap();
        assert_eq!(epoch.to_julian_day(), PERSIAN_EPOCH);
        assert_eq!(PersianDate::from_julian_day(PERSIAN_EPOCH), Some(epoch));
        assert_eq!(PersianDate::from_julian_day(PERSIAN_EPOCH - 1).unwrap().to_string(), "00/12/30");
        assert_eq!(PersianDate::from_julian_day(i64::MAX / 4), None);
        assert_eq!(PersianDate::from_julian_day(i64::MAX), None);
        assert_eq!(PersianDate::from_julian_day(i64::MIN), None);
        let last = PersianDate::from_julian_day(julian::MAX_JULIAN_DAY).unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (i32::MAX, 12, 29));
        let first = PersianDate::from_julian_day(julian::MIN_JULIAN_DAY).unwrap();
        assert_eq!((first.year(), first.month(), first.day()), (i32::MIN, 1, 1));
        assert_eq!(PersianDate::from_julian_day(julian::MIN_JULIAN_DAY - 1), None);

        let date = PersianDate::from_julian_day(2_445_112).unwrap();
        assert_eq!((date.year(), date.month0(), date.day()), (1361, 2, 1));
    }

    #[test]
    fn test_date_weekday() {
        // 1982-05-22 was a Saturday
        let date = PersianDate::from_ymd_opt(1361, 3, 1).unwrap();
        assert_eq!(date.weekday(), Weekday::Sat);
        assert_eq!(date.weekday_name(), "شنبه");
        // 1970-01-01 was a Thursday
        let date = PersianDate::from_ymd_opt(1348, 10, 11).unwrap();
        assert_eq!(date.weekday(), Weekday::Thu);
    }

    #[test]
    fn test_date_ordinal() {
        assert_eq!(PersianDate::from_ymd_opt(1400, 1, 1).unwrap().ordinal(), 1);
        assert_eq!(PersianDate::from_ymd_opt(1400, 7, 1).unwrap().ordinal(), 187);
        assert_eq!(PersianDate::from_ymd_opt(1400, 12, 29).unwrap().ordinal(), 365);
        assert_eq!(PersianDate::from_ymd_opt(1399, 12, 30).unwrap().ordinal(), 366);
    }

    #[test]
    fn test_date_display_and_parse() {
        let date = PersianDate::from_ymd_opt(1361, 3, 1).unwrap();
        assert_eq!(date.to_string(), "1361/03/01");
        assert_eq!(format!("{:?}", date), "1361/03/01");
        assert_eq!(date.long_date().to_string(), "شنبه  01  خرداد  1361");
        assert_eq!(date.short_date().delimiter("-").to_string(), "1361-03-01");
        assert_eq!("1361/03/01".parse::<PersianDate>(), Ok(date));
        assert_eq!("1361/3/1".parse::<PersianDate>(), Ok(date));
        assert_eq!("1400/12/30".parse::<PersianDate>().unwrap_err().kind(), ErrorKind::InvalidDate);
        assert_eq!("1400/13/01".parse::<PersianDate>().unwrap_err().kind(), ErrorKind::InvalidDate);
    }

    #[test]
    fn test_date_ordering() {
        let a = PersianDate::from_ymd_opt(1399, 12, 30).unwrap();
        let b = PersianDate::from_ymd_opt(1400, 1, 1).unwrap();
        let c = PersianDate::from_ymd_opt(1400, 2, 1).unwrap();
        assert!(a < b && b < c);
        assert!(a.to_julian_day() < b.to_julian_day());
    }
}
