#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use persian_calendar::{Field, PersianDate};
    if let Ok(data) = std::str::from_utf8(data) {
        if let Ok(date) = data.parse::<PersianDate>() {
            assert_eq!(date.to_string().parse::<PersianDate>(), Ok(date));
        }
        let _ = PersianDate::parse_from_str(data, "-");
        let _ = data.parse::<Field>();
    }
});
