//! Parsing of caller-supplied period identifiers.
//!
//! Reporting layers usually hold years, months and weeks as strings taken
//! from query parameters. An empty or `"0"` value means "not supplied" and
//! parses to `None`; anything that is not a usable number is an error.

use chrono_tz::Tz;

use crate::error::{RangeError, Result};

/// Parse a year. Empty or `"0"` is absent.
pub fn parse_year(s: &str) -> Result<Option<i32>> {
    parse_component(s).map_err(|_| RangeError::InvalidYear(format!("'{}'", s.trim())))
}

/// Parse a month in 1-12. Leading zeros are accepted (`"03"`).
pub fn parse_month(s: &str) -> Result<Option<u32>> {
    let invalid = || RangeError::InvalidMonth(format!("'{}'", s.trim()));
    match parse_component::<u32>(s).map_err(|_| invalid())? {
        Some(month) if month > 12 => Err(invalid()),
        other => Ok(other),
    }
}

/// Parse an ISO week number in 1-53.
pub fn parse_week(s: &str) -> Result<Option<u32>> {
    let invalid = || RangeError::InvalidWeek(format!("'{}'", s.trim()));
    match parse_component::<u32>(s).map_err(|_| invalid())? {
        Some(week) if week > 53 => Err(invalid()),
        other => Ok(other),
    }
}

/// Parse an IANA timezone name into the calendar zone.
pub fn parse_timezone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| RangeError::InvalidTimezone(format!("'{}'", s)))
}

fn parse_component<T>(s: &str) -> std::result::Result<Option<T>, T::Err>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    let value = s.parse::<T>()?;
    if value == T::default() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year_plain_and_padded() {
        assert_eq!(parse_year("2023"), Ok(Some(2023)));
        assert_eq!(parse_year(" 2016 "), Ok(Some(2016)));
    }

    #[test]
    fn test_parse_year_absent() {
        assert_eq!(parse_year(""), Ok(None));
        assert_eq!(parse_year("   "), Ok(None));
        assert_eq!(parse_year("0"), Ok(None));
    }

    #[test]
    fn test_parse_year_invalid() {
        let err = parse_year("twenty").unwrap_err();
        assert!(err.to_string().contains("Invalid year"), "got: {err}");
    }

    #[test]
    fn test_parse_month_leading_zero() {
        assert_eq!(parse_month("03"), Ok(Some(3)));
        assert_eq!(parse_month("12"), Ok(Some(12)));
        assert_eq!(parse_month("00"), Ok(None));
    }

    #[test]
    fn test_parse_month_out_of_range() {
        assert!(matches!(parse_month("13"), Err(RangeError::InvalidMonth(_))));
        assert!(matches!(parse_month("-1"), Err(RangeError::InvalidMonth(_))));
    }

    #[test]
    fn test_parse_week_bounds() {
        assert_eq!(parse_week("1"), Ok(Some(1)));
        assert_eq!(parse_week("53"), Ok(Some(53)));
        assert_eq!(parse_week(""), Ok(None));
        assert!(matches!(parse_week("54"), Err(RangeError::InvalidWeek(_))));
        assert!(matches!(parse_week("W5"), Err(RangeError::InvalidWeek(_))));
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Asia/Shanghai"), Ok(chrono_tz::Asia::Shanghai));
        let err = parse_timezone("Invalid/Zone").unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }
}
