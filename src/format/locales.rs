// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! The fixed Persian name tables.

use chrono::Weekday;

/// Month names, Farvardin first.
pub const MONTH_NAMES: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Weekday names, Saturday first.
pub const WEEKDAY_NAMES: [&str; 7] =
    ["شنبه", "یکشنبه", "دوشنبه", "سه‌شنبه", "چهارشنبه", "پنج‌شنبه", "جمعه"];

/// The word written between the date and the time in the long layout ("hour").
pub const TIME_WORD: &str = "ساعت";

/// Returns the name of the zero-based month, or an empty string for an invalid month.
pub(crate) fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES.get(month0 as usize).copied().unwrap_or("")
}

/// Returns the name of `weekday`.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    // the Persian week starts on Saturday
    let index = (weekday.num_days_from_monday() + 2) % 7;
    WEEKDAY_NAMES[index as usize]
}
