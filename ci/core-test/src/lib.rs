#![no_std]

use persian_calendar::{Field, PersianDate, PersianDateTime, UtcOffset};

pub fn nowruz_1403() -> Result<PersianDateTime, persian_calendar::Error> {
    let date = PersianDate::from_ymd_opt(1403, 1, 1).ok_or(persian_calendar::ErrorKind::InvalidDate)?;
    let dt = PersianDateTime::from_date(date, UtcOffset::from_hm(3, 30)?)?;
    dt.checked_add(Field::Day, 13)
}
