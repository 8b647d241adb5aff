// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! Macro for easy initialization of Persian dates.

/// Create a [`PersianDate`](crate::PersianDate) with a statically known value.
///
/// The supported format is 'year/month/day', with the month starting from 1.
///
/// The input is checked at compile time.
///
/// # Examples
/// ```
/// use persian_calendar::{pdate, PersianDate};
///
/// assert_eq!(pdate!(1361/03/01), PersianDate::from_ymd_opt(1361, 3, 1).unwrap());
/// ```
#[macro_export]
macro_rules! pdate {
    ($y:literal/$m:literal/$d:literal) => {{
        #[allow(clippy::zero_prefixed_literal)]
        {
            const DATE: $crate::PersianDate = match $crate::PersianDate::from_ymd_opt($y, $m, $d) {
                Some(d) => d,
                None => panic!("invalid persian date"),
            };
            DATE
        }
    }};
}
