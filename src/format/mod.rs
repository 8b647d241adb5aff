// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! Formatting and parsing of Persian dates.
//!
//! Four fixed layouts are supported, see [`Style`]. Formatting is lazy: the
//! `short_date`/`long_date` family of methods return a [`DelayedFormat`] that
//! is rendered through `Display`, so no allocation is needed. The field
//! delimiter of the short layouts defaults to `/` and can be changed per call.
//!
//! ```
//! use persian_calendar::{PersianDateTime, UtcOffset};
//!
//! let dt = PersianDateTime::from_instant_with_offset(390_916_800_000, UtcOffset::from_hm(3, 30)?);
//! assert_eq!(dt.short_date().to_string(), "1361/03/01");
//! assert_eq!(dt.short_date_time().delimiter(" , ").to_string(), "1361 , 03 , 01 15:30:00");
//! # Ok::<(), persian_calendar::Error>(())
//! ```

mod formatting;
pub mod locales;
pub(crate) mod parse;

pub use formatting::DelayedFormat;

/// The layout of a formatted date.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Style {
    /// `YYYY/MM/DD`, e.g. `1361/03/01`.
    ShortDate,
    /// `YYYY/MM/DD HH:MM:SS`, e.g. `1361/03/01 15:30:00`.
    ShortDateTime,
    /// Weekday, day, month name and year separated by two spaces,
    /// e.g. `شنبه  01  خرداد  1361`.
    LongDate,
    /// The long date followed by ` ساعت HH:MM:SS`.
    LongDateTime,
}

/// The delimiter used between the fields of a short date unless another one is given.
pub const DEFAULT_DELIMITER: &str = "/";
