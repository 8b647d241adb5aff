// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

use core::fmt;

/// The kind of failure reported by [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An unknown field selector, or a field the operation does not support.
    InvalidArgument,
    /// Date fields out of range, in either calendar.
    InvalidDate,
    /// Wall-clock fields out of range.
    InvalidTime,
    /// A UTC offset of a day or more.
    InvalidOffset,
    /// The result does not fit in the supported range of instants or years.
    OutOfRange,
    /// The input text has the wrong shape (bad number, bad delimiter).
    ParseInvalid,
    /// The input text ended before all fields were read.
    ParseTooShort,
    /// There is trailing input after the last field.
    ParseTooLong,
}

/// The error raised by fallible calendar operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// What went wrong.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidArgument => write!(f, "invalid field selector"),
            ErrorKind::InvalidDate => write!(f, "invalid date"),
            ErrorKind::InvalidTime => write!(f, "invalid time"),
            ErrorKind::InvalidOffset => write!(f, "invalid utc offset"),
            ErrorKind::OutOfRange => write!(f, "date out of range"),
            ErrorKind::ParseInvalid => write!(f, "input contains invalid characters"),
            ErrorKind::ParseTooShort => write!(f, "premature end of input"),
            ErrorKind::ParseTooLong => write!(f, "trailing input"),
        }
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
