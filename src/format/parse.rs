// This is a part of persian-calendar.
// See README.md and LICENSE.txt for details.

//! Reading `year <delimiter> month <delimiter> day`.

use crate::{Error, ErrorKind};

/// Splits `s` on `delimiter` into year, one-based month and day.
///
/// Only the shape is checked here; the caller validates the date itself.
pub(crate) fn parse_ymd(s: &str, delimiter: &str) -> Result<(i32, u32, u32), Error> {
    if delimiter.is_empty() {
        return Err(Error::new(ErrorKind::InvalidArgument));
    }
    let mut parts = s.split(delimiter);
    let year = number::<i32>(parts.next())?;
    let month = number::<u32>(parts.next())?;
    let day = number::<u32>(parts.next())?;
    if parts.next().is_some() {
        return Err(Error::new(ErrorKind::ParseTooLong));
    }
    Ok((year, month, day))
}

fn number<T: core::str::FromStr>(part: Option<&str>) -> Result<T, Error> {
    match part {
        None | Some("") => Err(Error::new(ErrorKind::ParseTooShort)),
        Some(digits) => digits.parse().map_err(|_| Error::new(ErrorKind::ParseInvalid)),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_ymd;
    use crate::ErrorKind;

    #[test]
    fn test_parse_ymd() {
        assert_eq!(parse_ymd("1361/03/01", "/"), Ok((1361, 3, 1)));
        assert_eq!(parse_ymd("1361 , 03 , 01", " , "), Ok((1361, 3, 1)));
        assert_eq!(parse_ymd("-5/1/1", "/"), Ok((-5, 1, 1)));
        assert_eq!(parse_ymd("1361-03-01", "-"), Ok((1361, 3, 1)));
    }

    #[test]
    fn test_parse_ymd_errors() {
        let kind = |s, delim| parse_ymd(s, delim).unwrap_err().kind();

        assert_eq!(kind("1361/03", "/"), ErrorKind::ParseTooShort);
        assert_eq!(kind("1361/03/", "/"), ErrorKind::ParseTooShort);
        assert_eq!(kind("", "/"), ErrorKind::ParseTooShort);
        assert_eq!(kind("1361/03/01/", "/"), ErrorKind::ParseTooLong);
        assert_eq!(kind("1361/03/01/12", "/"), ErrorKind::ParseTooLong);
        assert_eq!(kind("1361/x3/01", "/"), ErrorKind::ParseInvalid);
        assert_eq!(kind("1361/-3/01", "/"), ErrorKind::ParseInvalid);
        assert_eq!(kind(" 1361/03/01", "/"), ErrorKind::ParseInvalid);
        assert_eq!(kind("1361 , 03 , 01", ","), ErrorKind::ParseInvalid);
        assert_eq!(kind("1361/03/01", ""), ErrorKind::InvalidArgument);
    }
}
