// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! An absolute instant paired with its Persian calendar date.

use core::fmt;

#[cfg(feature = "clock")]
use chrono::Utc;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Weekday};

use crate::format::{DelayedFormat, Style};
use crate::julian::{self, MILLIS_PER_DAY};
use crate::{Error, ErrorKind, Field, PersianDate, UtcOffset};

mod arith;

#[cfg(feature = "serde")]
mod serde;


/// An instant in time together with its Persian calendar date.
///
/// The value owns an instant (milliseconds since the Unix epoch) and a fixed
/// [`UtcOffset`], and caches the Persian date of the local day. Every way of
/// changing one of them recomputes the cache, so the date is always the one
/// of `julian::from_julian_day(julian::instant_to_julian_day(instant, offset))`.
///
/// `PersianDateTime` is `Copy`. Each `set_*` mutator has a `with_*`
/// counterpart returning a new value, and a failing mutator leaves the value
/// untouched.
///
/// ```
/// use persian_calendar::{PersianDateTime, UtcOffset};
///
/// let tehran = UtcOffset::from_hm(3, 30)?;
/// let mut dt = PersianDateTime::from_instant_with_offset(0, tehran);
/// assert_eq!(dt.short_date().to_string(), "1348/10/11");
///
/// dt.set_persian_date(1361, 2, 1)?;
/// assert_eq!(dt.short_date_time().to_string(), "1361/03/01 03:30:00");
/// assert_eq!(dt.naive_local().unwrap().to_string(), "1982-05-22 03:30:00");
/// # Ok::<(), persian_calendar::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersianDateTime {
    instant: i64,
    offset: UtcOffset,
    date: PersianDate,
}

/// Computes the Persian date of the local day at `instant`.
fn local_date(instant: i64, offset: UtcOffset) -> PersianDate {
    let jdn = julian::instant_to_julian_day(instant, i64::from(offset.local_minus_utc()));
    let (year, month0, day) = julian::from_julian_day(jdn);
    // instants stay well inside MIN_JULIAN_DAY..=MAX_JULIAN_DAY, so the year fits
    PersianDate::from_parts(year as i32, month0, day)
}

impl PersianDateTime {
    /// Makes a new `PersianDateTime` at `instant` (milliseconds since the Unix epoch) in UTC.
    #[inline]
    pub fn from_instant(instant: i64) -> PersianDateTime {
        PersianDateTime::from_instant_with_offset(instant, UtcOffset::UTC)
    }

    /// Makes a new `PersianDateTime` at `instant` with the local time `offset` from UTC.
    pub fn from_instant_with_offset(instant: i64, offset: UtcOffset) -> PersianDateTime {
        PersianDateTime { instant, offset, date: local_date(instant, offset) }
    }

    /// Makes a new `PersianDateTime` at local midnight of `date`.
    pub fn from_date(date: PersianDate, offset: UtcOffset) -> Result<PersianDateTime, Error> {
        julian::julian_day_to_instant(date.to_julian_day(), 0)
            .and_then(|local| local.checked_sub(i64::from(offset.local_minus_utc())))
            .map(|instant| PersianDateTime::from_instant_with_offset(instant, offset))
            .ok_or(Error::new(ErrorKind::OutOfRange))
    }

    /// Returns the current time in UTC.
    #[cfg(feature = "clock")]
    pub fn now() -> PersianDateTime {
        PersianDateTime::from_instant(Utc::now().timestamp_millis())
    }

    /// Returns the current time with the local time `offset` from UTC.
    #[cfg(feature = "clock")]
    pub fn now_with_offset(offset: UtcOffset) -> PersianDateTime {
        PersianDateTime::from_instant_with_offset(Utc::now().timestamp_millis(), offset)
    }

    /// Returns the instant in milliseconds since the Unix epoch.
    #[inline]
    pub const fn instant(&self) -> i64 {
        self.instant
    }

    /// Returns the offset from UTC used for the local date and time.
    #[inline]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the Persian date of the local day.
    #[inline]
    pub const fn date(&self) -> PersianDate {
        self.date
    }

    /// Returns the astronomical Persian year; year 0 precedes year 1.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Returns the Persian year counted without a year zero, with a flag which is
    /// `false` for years before the epoch.
    #[inline]
    pub const fn year_ah(&self) -> (bool, u32) {
        let year = self.date.year();
        if year < 1 {
            (false, (1 - year as i64) as u32)
        } else {
            (true, year as u32)
        }
    }

    /// Returns the Persian month starting from 1.
    #[inline]
    pub const fn month(&self) -> u32 {
        self.date.month()
    }

    /// Returns the Persian month starting from 0.
    #[inline]
    pub const fn month0(&self) -> u32 {
        self.date.month0()
    }

    /// Returns the Persian day of month starting from 1.
    #[inline]
    pub const fn day(&self) -> u32 {
        self.date.day()
    }

    /// Returns `true` if the Persian year is a leap year.
    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        self.date.is_leap_year()
    }

    /// Returns the number of days in the current Persian month.
    #[inline]
    pub const fn days_in_month(&self) -> u32 {
        self.date.days_in_month()
    }

    /// Returns the local day of week.
    #[inline]
    pub const fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Returns the Persian name of the month.
    #[inline]
    pub fn month_name(&self) -> &'static str {
        self.date.month_name()
    }

    /// Returns the Persian name of the local day of week.
    #[inline]
    pub fn weekday_name(&self) -> &'static str {
        self.date.weekday_name()
    }

    /// Returns the Julian Day Number of the local day.
    #[inline]
    pub fn julian_day(&self) -> i64 {
        julian::instant_to_julian_day(self.instant, i64::from(self.offset.local_minus_utc()))
    }

    /// Returns the Julian Day Number of the UTC day.
    #[inline]
    pub fn utc_julian_day(&self) -> i64 {
        julian::instant_to_utc_julian_day(self.instant)
    }

    /// Returns the local Gregorian date and time.
    ///
    /// Returns `None` outside the range supported by `chrono`.
    pub fn naive_local(&self) -> Option<NaiveDateTime> {
        let local = self.instant.checked_add(i64::from(self.offset.local_minus_utc()))?;
        DateTime::from_timestamp_millis(local).map(|dt| dt.naive_utc())
    }

    /// Returns the Gregorian date and time in UTC.
    ///
    /// Returns `None` outside the range supported by `chrono`.
    pub fn naive_utc(&self) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.instant).map(|dt| dt.naive_utc())
    }

    /// Milliseconds since local midnight.
    fn local_time_of_day(&self) -> u32 {
        let local = i128::from(self.instant) + i128::from(self.offset.local_minus_utc());
        local.rem_euclid(i128::from(MILLIS_PER_DAY)) as u32
    }

    /// Makes a new value at the given local time, keeping the offset.
    fn with_local_millis(&self, local: i64) -> Result<PersianDateTime, Error> {
        local
            .checked_sub(i64::from(self.offset.local_minus_utc()))
            .map(|instant| PersianDateTime::from_instant_with_offset(instant, self.offset))
            .ok_or(Error::new(ErrorKind::OutOfRange))
    }

    /// Makes a new value at another instant, keeping the offset.
    #[inline]
    #[must_use]
    pub fn with_instant(&self, instant: i64) -> PersianDateTime {
        PersianDateTime::from_instant_with_offset(instant, self.offset)
    }

    /// Makes a new value at the same instant seen from another offset.
    ///
    /// The Persian date is recomputed for the new local day.
    #[inline]
    #[must_use]
    pub fn with_offset(&self, offset: UtcOffset) -> PersianDateTime {
        PersianDateTime::from_instant_with_offset(self.instant, offset)
    }

    /// Makes a new value on the local day `jdn`, keeping the local time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] if the instant would overflow.
    pub fn with_julian_day(&self, jdn: i64) -> Result<PersianDateTime, Error> {
        let offset = i64::from(self.offset.local_minus_utc());
        let local = self.instant.checked_add(offset).ok_or(Error::new(ErrorKind::OutOfRange))?;
        let local =
            julian::julian_day_to_instant(jdn, local).ok_or(Error::new(ErrorKind::OutOfRange))?;
        self.with_local_millis(local)
    }

    /// Makes a new value on `date`, keeping the local time of day.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] if the instant would overflow.
    #[inline]
    pub fn with_date(&self, date: PersianDate) -> Result<PersianDateTime, Error> {
        self.with_julian_day(date.to_julian_day())
    }

    /// Makes a new value on the given Persian date, keeping the local time of day.
    ///
    /// `year` counts without a year zero: year -1 is the year before year 1.
    /// `month0` starts from 0.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidDate`] if the year is 0, the month is not in `0..12`
    /// or the day is not in the month.
    ///
    /// ```
    /// use persian_calendar::{ErrorKind, PersianDateTime};
    ///
    /// let dt = PersianDateTime::from_instant(0);
    /// assert_eq!(dt.with_persian_date(1399, 11, 30)?.short_date().to_string(), "1399/12/30");
    /// assert_eq!(dt.with_persian_date(1400, 11, 30).unwrap_err().kind(), ErrorKind::InvalidDate);
    /// # Ok::<(), persian_calendar::Error>(())
    /// ```
    pub fn with_persian_date(
        &self,
        year: i32,
        month0: u32,
        day: u32,
    ) -> Result<PersianDateTime, Error> {
        let year = match year {
            0 => return Err(Error::new(ErrorKind::InvalidDate)),
            year if year < 0 => year + 1,
            year => year,
        };
        let date = PersianDate::from_ymd0_opt(year, month0, day)
            .ok_or(Error::new(ErrorKind::InvalidDate))?;
        self.with_date(date)
    }

    /// Makes a new value on the given Persian date without validating the fields.
    ///
    /// Days and months past their end roll over: day 40 of Farvardin is day 9 of
    /// Ordibehesht. Non-positive years are shifted by one, so both 0 and 1 mean year 1.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] if the instant would overflow.
    pub fn with_persian_date_lenient(
        &self,
        year: i32,
        month0: i32,
        day: i32,
    ) -> Result<PersianDateTime, Error> {
        let year = if year > 0 { year } else { year + 1 };
        let jdn = julian::to_julian_day(year.into(), month0.into(), day.into());
        self.with_julian_day(jdn)
    }

    /// Makes a new value on the date read from `s`, keeping the local time of day.
    ///
    /// See [`PersianDate::parse_from_str`] for the accepted input.
    pub fn with_parsed_date(&self, s: &str, delimiter: &str) -> Result<PersianDateTime, Error> {
        self.with_date(PersianDate::parse_from_str(s, delimiter)?)
    }

    /// Makes a new value with a field of the local Gregorian date and time replaced.
    ///
    /// `Month` is the Gregorian month starting from 1, `Day` the day of the Gregorian month.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidArgument`] for [`Field::Week`].
    /// - [`ErrorKind::InvalidDate`] or [`ErrorKind::InvalidTime`] if the value is out of range.
    /// - [`ErrorKind::OutOfRange`] if the local time is outside the range supported by `chrono`.
    pub fn with_gregorian_field(&self, field: Field, value: i32) -> Result<PersianDateTime, Error> {
        let local = self.naive_local().ok_or(Error::new(ErrorKind::OutOfRange))?;
        let unsigned = u32::try_from(value).ok();
        let (updated, kind) = match field {
            Field::Year => (local.with_year(value), ErrorKind::InvalidDate),
            Field::Month => (unsigned.and_then(|m| local.with_month(m)), ErrorKind::InvalidDate),
            Field::Day => (unsigned.and_then(|d| local.with_day(d)), ErrorKind::InvalidDate),
            Field::Hour => (unsigned.and_then(|h| local.with_hour(h)), ErrorKind::InvalidTime),
            Field::Minute => (unsigned.and_then(|m| local.with_minute(m)), ErrorKind::InvalidTime),
            Field::Second => (unsigned.and_then(|s| local.with_second(s)), ErrorKind::InvalidTime),
            Field::Millisecond => (
                unsigned.filter(|&ms| ms < 1000).and_then(|ms| local.with_nanosecond(ms * 1_000_000)),
                ErrorKind::InvalidTime,
            ),
            Field::Week => return Err(Error::new(ErrorKind::InvalidArgument)),
        };
        let updated = updated.ok_or(Error::new(kind))?;
        self.with_local_millis(updated.and_utc().timestamp_millis())
    }

    /// Moves to another instant, keeping the offset.
    #[inline]
    pub fn set_instant(&mut self, instant: i64) {
        *self = self.with_instant(instant);
    }

    /// Changes the offset, keeping the instant.
    #[inline]
    pub fn set_offset(&mut self, offset: UtcOffset) {
        *self = self.with_offset(offset);
    }

    /// Moves to the local day `jdn`. See [`with_julian_day`](Self::with_julian_day).
    #[inline]
    pub fn set_julian_day(&mut self, jdn: i64) -> Result<(), Error> {
        *self = self.with_julian_day(jdn)?;
        Ok(())
    }

    /// Moves to the given Persian date. See [`with_persian_date`](Self::with_persian_date).
    #[inline]
    pub fn set_persian_date(&mut self, year: i32, month0: u32, day: u32) -> Result<(), Error> {
        *self = self.with_persian_date(year, month0, day)?;
        Ok(())
    }

    /// Moves to the given Persian date without validation.
    /// See [`with_persian_date_lenient`](Self::with_persian_date_lenient).
    #[inline]
    pub fn set_persian_date_lenient(
        &mut self,
        year: i32,
        month0: i32,
        day: i32,
    ) -> Result<(), Error> {
        *self = self.with_persian_date_lenient(year, month0, day)?;
        Ok(())
    }

    /// Replaces a local Gregorian field. See [`with_gregorian_field`](Self::with_gregorian_field).
    #[inline]
    pub fn set_gregorian_field(&mut self, field: Field, value: i32) -> Result<(), Error> {
        *self = self.with_gregorian_field(field, value)?;
        Ok(())
    }

    /// Formats the local date as `YYYY/MM/DD`.
    #[inline]
    pub fn short_date(&self) -> DelayedFormat<'static> {
        DelayedFormat::new(Style::ShortDate, self.date, Some(self.hms()))
    }

    /// Formats the local date and time as `YYYY/MM/DD HH:MM:SS`.
    #[inline]
    pub fn short_date_time(&self) -> DelayedFormat<'static> {
        DelayedFormat::new(Style::ShortDateTime, self.date, Some(self.hms()))
    }

    /// Formats the local date with the weekday and month names.
    #[inline]
    pub fn long_date(&self) -> DelayedFormat<'static> {
        DelayedFormat::new(Style::LongDate, self.date, Some(self.hms()))
    }

    /// Formats the local date with the weekday and month names, followed by the time.
    #[inline]
    pub fn long_date_time(&self) -> DelayedFormat<'static> {
        DelayedFormat::new(Style::LongDateTime, self.date, Some(self.hms()))
    }

    fn hms(&self) -> (u32, u32, u32) {
        (self.hour(), self.minute(), self.second())
    }
}

impl From<DateTime<FixedOffset>> for PersianDateTime {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        PersianDateTime::from_instant_with_offset(dt.timestamp_millis(), UtcOffset::from(*dt.offset()))
    }
}

/// The local wall-clock time, with millisecond precision.
impl Timelike for PersianDateTime {
    #[inline]
    fn hour(&self) -> u32 {
        self.local_time_of_day() / 3_600_000
    }

    #[inline]
    fn minute(&self) -> u32 {
        self.local_time_of_day() / 60_000 % 60
    }

    #[inline]
    fn second(&self) -> u32 {
        self.local_time_of_day() / 1_000 % 60
    }

    #[inline]
    fn nanosecond(&self) -> u32 {
        self.local_time_of_day() % 1_000 * 1_000_000
    }

    fn with_hour(&self, hour: u32) -> Option<PersianDateTime> {
        let hour = i32::try_from(hour).ok()?;
        self.with_gregorian_field(Field::Hour, hour).ok()
    }

    fn with_minute(&self, min: u32) -> Option<PersianDateTime> {
        let min = i32::try_from(min).ok()?;
        self.with_gregorian_field(Field::Minute, min).ok()
    }

    fn with_second(&self, sec: u32) -> Option<PersianDateTime> {
        let sec = i32::try_from(sec).ok()?;
        self.with_gregorian_field(Field::Second, sec).ok()
    }

    /// Only whole milliseconds can be represented; other values return `None`.
    fn with_nanosecond(&self, nano: u32) -> Option<PersianDateTime> {
        if nano % 1_000_000 != 0 {
            return None;
        }
        let millis = i32::try_from(nano / 1_000_000).ok()?;
        self.with_gregorian_field(Field::Millisecond, millis).ok()
    }
}

impl fmt::Debug for PersianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}T{:02}:{:02}:{:02}", self.date, self.hour(), self.minute(), self.second())?;
        let millis = self.nanosecond() / 1_000_000;
        if millis != 0 {
            write!(f, ".{:03}", millis)?;
        }
        write!(f, "{:?}", self.offset)
    }
}

/// Writes the short date and time followed by the offset, e.g. `1361/03/01 15:30:00 +03:30`.
impl fmt::Display for PersianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.short_date_time(), self.offset)
    }
}
