#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, i32)| {
    use persian_calendar::{julian, PersianDateTime, UtcOffset};
    let (instant, offset) = data;
    if let Some(offset) = UtcOffset::east_opt(offset) {
        let dt = PersianDateTime::from_instant_with_offset(instant, offset);
        let jdn = dt.julian_day();
        let (year, month0, day) = julian::from_julian_day(jdn);
        assert_eq!(julian::to_julian_day(year, month0.into(), day.into()), jdn);
        assert_eq!((i64::from(dt.year()), dt.month0(), dt.day()), (year, month0, day));
    }
});
