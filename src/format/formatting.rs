// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! Rendering of the fixed date layouts.

use core::fmt;

use super::locales::TIME_WORD;
use super::{Style, DEFAULT_DELIMITER};
use crate::PersianDate;

/// A *temporary* object which can be used as an argument to `format!` or others.
/// This is normally constructed via the `short_date`/`long_date` methods of
/// [`PersianDate`] and [`PersianDateTime`](crate::PersianDateTime).
#[derive(Debug, Clone)]
pub struct DelayedFormat<'a> {
    style: Style,
    date: PersianDate,
    /// Local hour, minute and second, if any.
    time: Option<(u32, u32, u32)>,
    delimiter: &'a str,
}

impl DelayedFormat<'static> {
    /// Makes a new `DelayedFormat` with the default delimiter.
    pub(crate) fn new(
        style: Style,
        date: PersianDate,
        time: Option<(u32, u32, u32)>,
    ) -> DelayedFormat<'static> {
        DelayedFormat { style, date, time, delimiter: DEFAULT_DELIMITER }
    }
}

impl<'a> DelayedFormat<'a> {
    /// Replaces the delimiter between the year, month and day of the short layouts.
    ///
    /// The long layouts do not use a delimiter.
    #[must_use]
    pub fn delimiter<'b>(self, delimiter: &'b str) -> DelayedFormat<'b> {
        DelayedFormat { style: self.style, date: self.date, time: self.time, delimiter }
    }

    /// The layout this value renders.
    pub fn style(&self) -> Style {
        self.style
    }

    fn write_short_date(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = &self.date;
        write!(
            f,
            "{:02}{delim}{:02}{delim}{:02}",
            date.year(),
            date.month(),
            date.day(),
            delim = self.delimiter
        )
    }

    fn write_long_date(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let date = &self.date;
        write!(f, "{}  {:02}  {}  {}", date.weekday_name(), date.day(), date.month_name(), date.year())
    }

    fn write_time(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.time {
            Some((hour, min, sec)) => write!(f, "{:02}:{:02}:{:02}", hour, min, sec),
            None => Ok(()),
        }
    }
}

impl fmt::Display for DelayedFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.style {
            Style::ShortDate => self.write_short_date(f),
            Style::LongDate => self.write_long_date(f),
            Style::ShortDateTime => {
                self.write_short_date(f)?;
                if self.time.is_some() {
                    f.write_str(" ")?;
                    self.write_time(f)?;
                }
                Ok(())
            }
            Style::LongDateTime => {
                self.write_long_date(f)?;
                if self.time.is_some() {
                    write!(f, " {} ", TIME_WORD)?;
                    self.write_time(f)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DelayedFormat;
    use crate::format::Style;
    use crate::PersianDate;

    #[test]
    fn test_short_layouts() {
        let date = PersianDate::from_ymd_opt(1361, 3, 1).unwrap();
        let time = Some((7, 5, 9));
        assert_eq!(DelayedFormat::new(Style::ShortDate, date, time).to_string(), "1361/03/01");
        assert_eq!(
            DelayedFormat::new(Style::ShortDateTime, date, time).to_string(),
            "1361/03/01 07:05:09"
        );
        assert_eq!(
            DelayedFormat::new(Style::ShortDateTime, date, None).delimiter(".").to_string(),
            "1361.03.01"
        );
    }

    #[test]
    fn test_long_layouts() {
        let date = PersianDate::from_ymd_opt(1361, 3, 1).unwrap();
        assert_eq!(
            DelayedFormat::new(Style::LongDateTime, date, Some((23, 0, 59))).to_string(),
            "شنبه  01  خرداد  1361 ساعت 23:00:59"
        );
        // the delimiter only applies to the short layouts
        assert_eq!(
            DelayedFormat::new(Style::LongDate, date, None).delimiter("-").to_string(),
            "شنبه  01  خرداد  1361"
        );
    }

    #[test]
    fn test_small_years_are_padded() {
        let date = PersianDate::from_ymd_opt(7, 1, 2).unwrap();
        assert_eq!(date.short_date().to_string(), "07/01/02");
    }
}
