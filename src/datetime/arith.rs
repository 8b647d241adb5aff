// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! Field-aware addition.

use super::PersianDateTime;
use crate::julian;
use crate::{Error, ErrorKind, Field};

impl PersianDateTime {
    /// Adds `amount` units of `field`, which may be negative.
    ///
    /// `Year` and `Month` are counted in the Persian calendar and keep the local
    /// time of day. A day of month that does not exist in the target month
    /// rolls over into the next one, as with
    /// [`with_persian_date_lenient`](Self::with_persian_date_lenient): one year
    /// after 1399/12/30 is 1401/01/01. All other fields have a fixed length and
    /// move the instant by that many milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::OutOfRange`] when the result overflows.
    ///
    /// ```
    /// use persian_calendar::{Field, PersianDateTime};
    ///
    /// let dt = PersianDateTime::from_instant(0); // 1348/10/11
    /// assert_eq!(dt.checked_add(Field::Month, -10)?.short_date().to_string(), "1347/12/11");
    /// assert_eq!(dt.checked_add("day".parse()?, 21)?.short_date().to_string(), "1348/11/02");
    /// # Ok::<(), persian_calendar::Error>(())
    /// ```
    pub fn checked_add(&self, field: Field, amount: i32) -> Result<PersianDateTime, Error> {
        if amount == 0 {
            return Ok(*self);
        }
        let out_of_range = || Error::new(ErrorKind::OutOfRange);
        let date = self.date;
        let (year, month0) = match field.fixed_millis() {
            Some(unit) => {
                let delta = unit.checked_mul(i64::from(amount)).ok_or_else(out_of_range)?;
                let instant = self.instant.checked_add(delta).ok_or_else(out_of_range)?;
                return Ok(self.with_instant(instant));
            }
            None if field == Field::Year => {
                (i64::from(date.year()) + i64::from(amount), i64::from(date.month0()))
            }
            None => {
                let total = i64::from(date.month0()) + i64::from(amount);
                (i64::from(date.year()) + total.div_euclid(12), total.rem_euclid(12))
            }
        };
        self.with_julian_day(julian::to_julian_day(year, month0, i64::from(date.day())))
    }

    /// Adds `amount` units of `field` in place. See [`checked_add`](Self::checked_add).
    ///
    /// On error the value is left unchanged.
    pub fn add_persian_date(&mut self, field: Field, amount: i32) -> Result<(), Error> {
        *self = self.checked_add(field, amount)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, Field, PersianDate, PersianDateTime, UtcOffset};

    fn at(year: i32, month: u32, day: u32) -> PersianDateTime {
        let date = PersianDate::from_ymd_opt(year, month, day).unwrap();
        PersianDateTime::from_date(date, UtcOffset::UTC).unwrap()
    }

    #[test]
    fn test_add_zero_is_noop() {
        let dt = at(1361, 3, 1);
        for i in 0..8u8 {
            assert_eq!(dt.checked_add(Field::try_from(i).unwrap(), 0), Ok(dt));
        }
    }

    #[test]
    fn test_add_months_across_years() {
        assert_eq!(at(1361, 3, 1).checked_add(Field::Month, 33).unwrap().date(), at(1363, 12, 1).date());
        assert_eq!(at(1361, 1, 15).checked_add(Field::Month, -3).unwrap().date(), at(1360, 10, 15).date());
        assert_eq!(at(1361, 1, 15).checked_add(Field::Month, -12).unwrap().date(), at(1360, 1, 15).date());
        assert_eq!(at(1361, 1, 15).checked_add(Field::Month, -13).unwrap().date(), at(1359, 12, 15).date());
        assert_eq!(at(1361, 12, 15).checked_add(Field::Month, 1).unwrap().date(), at(1362, 1, 15).date());
    }

    #[test]
    fn test_add_rolls_over_day() {
        // Shahrivar has 31 days, Mehr 30
        assert_eq!(at(1361, 6, 31).checked_add(Field::Month, 1).unwrap().date(), at(1361, 8, 1).date());
        assert_eq!(at(1361, 8, 1).checked_add(Field::Month, -1).unwrap().date(), at(1361, 7, 1).date());
        // 1399 is a leap year, 1400 is not
        assert_eq!(at(1399, 12, 30).checked_add(Field::Year, 1).unwrap().date(), at(1401, 1, 1).date());
        assert_eq!(at(1399, 12, 30).checked_add(Field::Year, -4).unwrap().date(), at(1395, 12, 30).date());
        assert_eq!(at(1399, 12, 30).checked_add(Field::Month, 12).unwrap().date(), at(1401, 1, 1).date());
        // the same as setting the raw fields leniently
        let dt = at(1399, 12, 30);
        assert_eq!(dt.checked_add(Field::Year, 1), dt.with_persian_date_lenient(1400, 11, 30));
    }

    #[test]
    fn test_add_years_before_epoch() {
        // astronomical year 0 is followed by year 1, with no gap
        let dt = at(1, 1, 1);
        let back = dt.checked_add(Field::Year, -1).unwrap();
        assert_eq!(back.year(), 0);
        assert_eq!(back.year_ah(), (false, 1));
        assert_eq!(back.checked_add(Field::Year, 1).unwrap(), dt);
        assert_eq!(dt.checked_add(Field::Day, -1).unwrap().date(), PersianDate::from_ymd_opt(0, 12, 30).unwrap());
    }

    #[test]
    fn test_add_fixed_fields() {
        let dt = at(1361, 3, 1);
        assert_eq!(dt.checked_add(Field::Week, 1).unwrap().date(), at(1361, 3, 8).date());
        assert_eq!(dt.checked_add(Field::Day, 31).unwrap().date(), at(1361, 4, 1).date());
        assert_eq!(dt.checked_add(Field::Hour, 24).unwrap(), dt.checked_add(Field::Day, 1).unwrap());
        assert_eq!(dt.checked_add(Field::Minute, -1).unwrap().date(), at(1361, 2, 31).date());
        assert_eq!(dt.checked_add(Field::Second, 60).unwrap().instant(), dt.instant() + 60_000);
        assert_eq!(dt.checked_add(Field::Millisecond, -5).unwrap().instant(), dt.instant() - 5);
    }

    #[test]
    fn test_add_overflow_leaves_value() {
        let mut dt = PersianDateTime::from_instant(i64::MAX - 10);
        let before = dt;
        assert_eq!(dt.add_persian_date(Field::Day, 1).unwrap_err().kind(), ErrorKind::OutOfRange);
        assert_eq!(dt, before);
        assert_eq!(
            at(1361, 3, 1).checked_add(Field::Year, i32::MAX).unwrap_err().kind(),
            ErrorKind::OutOfRange
        );
    }

    #[test]
    fn test_add_by_selector_name() {
        let mut dt = at(1361, 3, 1);
        let before = dt;
        let err = "fortnight".parse::<Field>().and_then(|field| dt.add_persian_date(field, 2));
        assert_eq!(err.unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(dt, before);
        let field: Field = "month".parse().unwrap();
        dt.add_persian_date(field, 2).unwrap();
        assert_eq!(dt.date(), at(1361, 5, 1).date());
    }
}
