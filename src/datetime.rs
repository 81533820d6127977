//! Post date normalization.
//!
//! Each platform prints post dates its own way; both are rewritten to
//! `YYYY/MM/DD HH:MM`.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Canonical output format.
pub const STANDARD_DATETIME_FORMAT: &str = "%Y/%m/%d %H:%M";

/// phpBB post header dates, e.g. `Mon Jan 15, 2024 3:45 pm`.
pub const PHPBB_DATETIME_FORMAT: &str = "%a %b %d, %Y %I:%M %p";

/// vBulletin post header dates, e.g. `Tue 16 Jan '24, 10:05am`.
pub const VBULLETIN_DATETIME_FORMAT: &str = "%a %d %b '%y, %I:%M%p";

/// Source date layouts understood by [`normalize_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    PhpBb,
    VBulletin,
}

impl SourceFormat {
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::PhpBb => PHPBB_DATETIME_FORMAT,
            Self::VBulletin => VBULLETIN_DATETIME_FORMAT,
        }
    }
}

/// Parses `input` in the given source format and renders it as
/// `YYYY/MM/DD HH:MM`.
///
/// Surrounding whitespace is ignored. The weekday must agree with the date.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if `input` does not follow the format.
pub fn normalize_datetime(input: &str, format: SourceFormat) -> Result<String> {
    let pattern = format.pattern();
    let parsed = NaiveDateTime::parse_from_str(input.trim(), pattern).map_err(|source| {
        Error::InvalidDate {
            input: input.to_string(),
            format: pattern,
            source,
        }
    })?;
    Ok(parsed.format(STANDARD_DATETIME_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phpbb_afternoon() {
        assert_eq!(
            normalize_datetime("Mon Jan 15, 2024 3:45 pm", SourceFormat::PhpBb).ok(),
            Some("2024/01/15 15:45".to_string())
        );
    }

    #[test]
    fn phpbb_midnight_hour() {
        assert_eq!(
            normalize_datetime("Sun Dec 03, 2023 12:07 am", SourceFormat::PhpBb).ok(),
            Some("2023/12/03 00:07".to_string())
        );
    }

    #[test]
    fn vbulletin_morning() {
        assert_eq!(
            normalize_datetime("Tue 16 Jan '24, 10:05am", SourceFormat::VBulletin).ok(),
            Some("2024/01/16 10:05".to_string())
        );
    }

    #[test]
    fn vbulletin_uppercase_meridiem_and_padding() {
        assert_eq!(
            normalize_datetime("  Wed 01 Jun '22, 11:30PM\n", SourceFormat::VBulletin).ok(),
            Some("2022/06/01 23:30".to_string())
        );
    }

    #[test]
    fn wrong_format_is_an_error() {
        match normalize_datetime("2024-01-15 15:45", SourceFormat::PhpBb) {
            Err(Error::InvalidDate { input, format, .. }) => {
                assert_eq!(input, "2024-01-15 15:45");
                assert_eq!(format, PHPBB_DATETIME_FORMAT);
            }
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_weekday_is_an_error() {
        assert!(normalize_datetime("Fri Jan 15, 2024 3:45 pm", SourceFormat::PhpBb).is_err());
    }
}
