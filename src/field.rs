// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

use core::fmt;
use core::str::FromStr;

use crate::{Error, ErrorKind};

/// A calendar field selector for arithmetic and field setting.
///
/// With [`PersianDateTime::checked_add`](crate::PersianDateTime::checked_add), `Year` and
/// `Month` are counted in the Persian calendar and every other field is a fixed amount of
/// milliseconds. With
/// [`PersianDateTime::with_gregorian_field`](crate::PersianDateTime::with_gregorian_field)
/// the fields address the Gregorian local wall-clock time.
///
/// Selectors coming from outside (a UI, a config file) are read with `FromStr` or
/// `TryFrom<u8>`; an unknown selector is an [`ErrorKind::InvalidArgument`].
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Field {
    /// Year.
    Year = 0,
    /// Month.
    Month = 1,
    /// Week, seven days.
    Week = 2,
    /// Day (of month when setting).
    Day = 3,
    /// Hour of day.
    Hour = 4,
    /// Minute.
    Minute = 5,
    /// Second.
    Second = 6,
    /// Millisecond.
    Millisecond = 7,
}

impl Field {
    /// The lowercase name of the field, as accepted by `FromStr`.
    pub const fn name(&self) -> &'static str {
        match *self {
            Field::Year => "year",
            Field::Month => "month",
            Field::Week => "week",
            Field::Day => "day",
            Field::Hour => "hour",
            Field::Minute => "minute",
            Field::Second => "second",
            Field::Millisecond => "millisecond",
        }
    }

    /// Length of one unit of the field in milliseconds, if it has a fixed length.
    ///
    /// `Year` and `Month` depend on the calendar and return `None`.
    pub(crate) const fn fixed_millis(&self) -> Option<i64> {
        match *self {
            Field::Year | Field::Month => None,
            Field::Week => Some(7 * 86_400_000),
            Field::Day => Some(86_400_000),
            Field::Hour => Some(3_600_000),
            Field::Minute => Some(60_000),
            Field::Second => Some(1_000),
            Field::Millisecond => Some(1),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any field can be represented as an integer from 0 to 7, in declaration order.
impl num_traits::FromPrimitive for Field {
    #[inline]
    fn from_i64(n: i64) -> Option<Field> {
        match n {
            0..=7 => Field::from_u64(n as u64),
            _ => None,
        }
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Field> {
        match n {
            0 => Some(Field::Year),
            1 => Some(Field::Month),
            2 => Some(Field::Week),
            3 => Some(Field::Day),
            4 => Some(Field::Hour),
            5 => Some(Field::Minute),
            6 => Some(Field::Second),
            7 => Some(Field::Millisecond),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Field {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        <Field as num_traits::FromPrimitive>::from_u8(value)
            .ok_or(Error::new(ErrorKind::InvalidArgument))
    }
}

/// Parsing a field name is case insensitive; `date` is accepted as an alias of `day`.
impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const NAMES: [(&str, Field); 9] = [
            ("year", Field::Year),
            ("month", Field::Month),
            ("week", Field::Week),
            ("day", Field::Day),
            ("date", Field::Day),
            ("hour", Field::Hour),
            ("minute", Field::Minute),
            ("second", Field::Second),
            ("millisecond", Field::Millisecond),
        ];
        NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, field)| field)
            .ok_or(Error::new(ErrorKind::InvalidArgument))
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::Field;
    use crate::ErrorKind;

    #[test]
    fn test_field_from_primitive() {
        for i in 0..8u8 {
            let field = Field::try_from(i).unwrap();
            assert_eq!(field as u8, i);
            assert_eq!(Field::from_i64(i64::from(i)), Some(field));
        }
        assert_eq!(Field::try_from(8).unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(Field::from_i64(-1), None);
        assert_eq!(Field::from_u64(15), None);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("year".parse::<Field>(), Ok(Field::Year));
        assert_eq!("MONTH".parse::<Field>(), Ok(Field::Month));
        assert_eq!("Date".parse::<Field>(), Ok(Field::Day));
        assert_eq!("millisecond".parse::<Field>(), Ok(Field::Millisecond));
        for bad in ["", "years", "fortnight", "zone_offset", " day"] {
            assert_eq!(bad.parse::<Field>().unwrap_err().kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_field_display_round_trip() {
        for i in 0..8u8 {
            let field = Field::try_from(i).unwrap();
            assert_eq!(field.to_string().parse::<Field>(), Ok(field));
        }
    }
}
