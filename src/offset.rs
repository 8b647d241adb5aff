// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! The fixed offset from UTC used to find the local date.

use core::fmt;

use chrono::FixedOffset;

use crate::julian::MILLIS_PER_DAY;
use crate::{Error, ErrorKind};

/// A fixed offset from UTC, from UTC-23:59:59.999 to UTC+23:59:59.999.
///
/// The offset is supplied by the caller, typically from a time zone database
/// outside this crate; it is only used to decide which local day an instant
/// falls on and to read local wall-clock fields.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct UtcOffset {
    local_minus_utc: i32,
}

impl UtcOffset {
    /// The zero offset.
    pub const UTC: UtcOffset = UtcOffset { local_minus_utc: 0 };

    /// Makes a new `UtcOffset` for the Eastern Hemisphere with the given difference in
    /// milliseconds. Negative `millis` mean the Western Hemisphere.
    ///
    /// Returns `None` on the out-of-bound `millis`.
    ///
    /// ```
    /// use persian_calendar::UtcOffset;
    ///
    /// let tehran = UtcOffset::east_opt(3 * 3_600_000 + 30 * 60_000).unwrap();
    /// assert_eq!(tehran.to_string(), "+03:30");
    /// assert!(UtcOffset::east_opt(86_400_000).is_none());
    /// ```
    pub const fn east_opt(millis: i32) -> Option<UtcOffset> {
        if -MILLIS_PER_DAY < millis as i64 && (millis as i64) < MILLIS_PER_DAY {
            Some(UtcOffset { local_minus_utc: millis })
        } else {
            None
        }
    }

    /// Makes a new `UtcOffset` for the Western Hemisphere with the given difference in
    /// milliseconds. Negative `millis` mean the Eastern Hemisphere.
    ///
    /// Returns `None` on the out-of-bound `millis`.
    pub const fn west_opt(millis: i32) -> Option<UtcOffset> {
        match millis.checked_neg() {
            Some(millis) => UtcOffset::east_opt(millis),
            None => None,
        }
    }

    /// Makes a new `UtcOffset` from hours and minutes east of UTC.
    ///
    /// Both parts carry the sign of the offset: `from_hm(-3, -30)` is UTC-03:30.
    pub fn from_hm(hours: i32, minutes: i32) -> Result<UtcOffset, Error> {
        let millis = hours
            .checked_mul(3_600_000)
            .and_then(|h| minutes.checked_mul(60_000).and_then(|m| h.checked_add(m)))
            .ok_or(Error::new(ErrorKind::InvalidOffset))?;
        UtcOffset::east_opt(millis).ok_or(Error::new(ErrorKind::InvalidOffset))
    }

    /// Returns the number of milliseconds to add to convert from UTC to the local time.
    #[inline]
    pub const fn local_minus_utc(&self) -> i32 {
        self.local_minus_utc
    }
}

impl From<FixedOffset> for UtcOffset {
    fn from(offset: FixedOffset) -> Self {
        // a `FixedOffset` is always less than a day
        UtcOffset { local_minus_utc: offset.local_minus_utc() * 1000 }
    }
}

impl TryFrom<UtcOffset> for FixedOffset {
    type Error = Error;

    /// Fails if the offset has a fractional second.
    fn try_from(offset: UtcOffset) -> Result<Self, Self::Error> {
        if offset.local_minus_utc % 1000 != 0 {
            return Err(Error::new(ErrorKind::InvalidOffset));
        }
        FixedOffset::east_opt(offset.local_minus_utc / 1000)
            .ok_or(Error::new(ErrorKind::InvalidOffset))
    }
}

impl fmt::Debug for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let offset = self.local_minus_utc;
        let (sign, offset) = if offset < 0 { ('-', -offset) } else { ('+', offset) };
        let (secs, millis) = (offset / 1000, offset % 1000);
        let (mins, sec) = (secs / 60, secs % 60);
        let (hour, min) = (mins / 60, mins % 60);
        if millis != 0 {
            write!(f, "{}{:02}:{:02}:{:02}.{:03}", sign, hour, min, sec, millis)
        } else if sec != 0 {
            write!(f, "{}{:02}:{:02}:{:02}", sign, hour, min, sec)
        } else {
            write!(f, "{}{:02}:{:02}", sign, hour, min)
        }
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "serde")]
mod serde {
    use core::fmt;

    use serde::{de, ser};

    use super::UtcOffset;

    /// Serializes as the number of milliseconds east of UTC.
    impl ser::Serialize for UtcOffset {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: ser::Serializer,
        {
            serializer.serialize_i32(self.local_minus_utc)
        }
    }

    struct UtcOffsetVisitor;

    impl<'de> de::Visitor<'de> for UtcOffsetVisitor {
        type Value = UtcOffset;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an offset in milliseconds of less than a day")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i32::try_from(value)
                .ok()
                .and_then(UtcOffset::east_opt)
                .ok_or_else(|| E::custom("utc offset out of range"))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i32::try_from(value)
                .ok()
                .and_then(UtcOffset::east_opt)
                .ok_or_else(|| E::custom("utc offset out of range"))
        }
    }

    impl<'de> de::Deserialize<'de> for UtcOffset {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: de::Deserializer<'de>,
        {
            deserializer.deserialize_i32(UtcOffsetVisitor)
        }
    }
}
