// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! # persian-calendar: Solar Hijri dates for Rust
//!
//! This crate converts between absolute instants (milliseconds since the Unix
//! epoch) and the Persian (Solar Hijri, Jalali) calendar, and provides a
//! date-time value that keeps both views in sync.
//!
//! The calendar has twelve months: six of 31 days, five of 30 days and a last
//! month of 29 days, or 30 in a leap year. Leap years follow the arithmetic
//! 2820-year grand cycle, which drifts by one day only every 3.8 million years.
//!
//! ## Overview
//!
//! - [`leap`]: the leap year rule and month lengths.
//! - [`julian`]: pure conversions through the Julian Day Number.
//! - [`PersianDate`]: a validated year, month and day.
//! - [`PersianDateTime`]: an instant and a [`UtcOffset`], with the cached Persian
//!   date of the local day, field arithmetic and formatting.
//!
//! Gregorian fields are delegated to [`chrono`]; time zone lookups are left to
//! the caller, who supplies a fixed [`UtcOffset`].
//!
//! ```
//! use persian_calendar::{Field, PersianDateTime, UtcOffset};
//!
//! let tehran = UtcOffset::from_hm(3, 30)?;
//! let mut dt = PersianDateTime::from_instant_with_offset(390_916_800_000, tehran);
//! assert_eq!(dt.short_date().to_string(), "1361/03/01");
//!
//! dt.add_persian_date(Field::Month, 33)?;
//! dt.add_persian_date(Field::Year, 5)?;
//! dt.add_persian_date(Field::Day, 50)?;
//! assert_eq!(dt.to_string(), "1369/01/22 15:30:00 +03:30");
//! # Ok::<(), persian_calendar::Error>(())
//! ```
//!
//! ## Years before the epoch
//!
//! [`PersianDate`] and the getters of [`PersianDateTime`] use astronomical
//! years, where year 0 precedes year 1. [`PersianDateTime::with_persian_date`]
//! takes the historical count without a year zero, and
//! [`PersianDateTime::year_ah`] returns it.
//!
//! ## Crate features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]. Without it the
//!   crate is `no_std`.
//! - `clock` (default): [`PersianDateTime::now`] through the system clock.
//! - `serde`: serialization of [`PersianDate`], [`UtcOffset`] and [`PersianDateTime`].

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod date;
mod datetime;
mod error;
mod field;
pub mod format;
pub mod julian;
pub mod leap;
mod macros;
mod offset;

pub use date::PersianDate;
pub use datetime::PersianDateTime;
pub use error::{Error, ErrorKind};
pub use field::Field;
pub use format::{DelayedFormat, Style};
pub use offset::UtcOffset;

/// Re-export of the `chrono` crate, whose types appear in this crate's API.
pub use chrono;
