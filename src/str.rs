use core::fmt;

use crate::{Period, PeriodSet};

impl<T: fmt::Display> fmt::Display for Period<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.from().fmt(f)?;
        f.write_str(" - ")?;
        self.to().fmt(f)
    }
}

impl<T: fmt::Display + Clone> fmt::Display for PeriodSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, period) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            period.fmt(f)?;
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug + Clone> fmt::Debug for PeriodSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(feature = "chrono")]
pub use self::pattern::{FormatError, StrftimeInstant};

#[cfg(feature = "chrono")]
mod pattern {
    use alloc::{string::String, vec::Vec};
    use core::fmt::{self, Write as _};

    use chrono::{
        format::{Item, StrftimeItems},
        DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    };

    use crate::Period;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// The failure of rendering a [`Period`] with an explicit pattern.
    pub enum FormatError {
        /// The pattern contains a specifier that cannot be parsed.
        InvalidPattern,
        /// The instant cannot be rendered with the pattern,
        /// e.g. a time specifier is applied to a date.
        OutOfRange,
    }

    impl fmt::Display for FormatError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::InvalidPattern => f.write_str("invalid format pattern"),
                Self::OutOfRange => f.write_str("the instant cannot be rendered with the pattern"),
            }
        }
    }

    impl core::error::Error for FormatError {}

    /// An instant type able to render itself with parsed `strftime` items.
    pub trait StrftimeInstant {
        /// Append the rendered instant to the output.
        ///
        /// # Errors
        /// Propagates the [`fmt::Error`] raised when an item does not apply to the instant.
        fn write_items(&self, out: &mut String, items: &[Item<'_>]) -> fmt::Result;
    }

    macro_rules! impl_strftime_instant {
        ($($t:ty),* $(,)?) => {$(
            impl StrftimeInstant for $t {
                fn write_items(&self, out: &mut String, items: &[Item<'_>]) -> fmt::Result {
                    write!(out, "{}", self.format_with_items(items.iter()))
                }
            }
        )*};
    }

    impl_strftime_instant!(NaiveDate, NaiveTime, NaiveDateTime);

    impl<Tz> StrftimeInstant for DateTime<Tz>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        fn write_items(&self, out: &mut String, items: &[Item<'_>]) -> fmt::Result {
            write!(out, "{}", self.format_with_items(items.iter()))
        }
    }

    fn parse_pattern(pattern: &str) -> Result<Vec<Item<'_>>, FormatError> {
        let items: Vec<_> = StrftimeItems::new(pattern).collect();
        if items.iter().any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidPattern);
        }
        Ok(items)
    }

    impl<T: StrftimeInstant> Period<T> {
        /// Render the period as `"<from> - <to>"`
        /// applying the same `strftime` pattern to both endpoints.
        ///
        /// ```
        /// # use chrono::NaiveDate;
        /// # use periodset::Period;
        /// let p = Period::new(
        ///     NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
        ///     NaiveDate::from_ymd_opt(2014, 2, 1).unwrap(),
        /// );
        /// assert_eq!(p.format("%Y-%m").unwrap(), "2014-01 - 2014-02");
        /// ```
        ///
        /// # Errors
        ///
        /// - [`FormatError::InvalidPattern`] if the pattern cannot be parsed;
        /// - [`FormatError::OutOfRange`] if an endpoint cannot be rendered with the pattern.
        pub fn format(&self, pattern: &str) -> Result<String, FormatError> {
            let items = parse_pattern(pattern)?;

            let mut out = String::new();
            self.from()
                .write_items(&mut out, &items)
                .and_then(|()| out.write_str(" - "))
                .and_then(|()| self.to().write_items(&mut out, &items))
                .map_err(|fmt::Error| FormatError::OutOfRange)?;
            Ok(out)
        }
    }
}


#[cfg(all(feature = "chrono", test))]
mod pattern_tests {
    use chrono::{NaiveDate, NaiveDateTime, TimeZone as _, Utc};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn same_pattern_for_both_endpoints() {
        let p = Period::new(at(2014, 1, 1, 8), at(2014, 1, 2, 17));
        assert_eq!(
            p.format("%d.%m.%Y %H:%M").unwrap(),
            "01.01.2014 08:00 - 02.01.2014 17:00"
        );
    }

    #[test]
    fn timezone_aware_instants() {
        let p = Period::new(
            Utc.from_utc_datetime(&at(2014, 3, 1, 0)),
            Utc.from_utc_datetime(&at(2014, 10, 1, 0)),
        );
        assert_eq!(p.format("%Y-%m-%d %Z").unwrap(), "2014-03-01 UTC - 2014-10-01 UTC");
    }

    #[test]
    fn invalid_pattern() {
        let p = Period::new(at(2014, 1, 1, 0), at(2014, 2, 1, 0));
        assert_eq!(p.format("%Y-%Q"), Err(FormatError::InvalidPattern));
    }

    #[test]
    fn pattern_not_applicable_to_instant() {
        let p = Period::new(
            NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2014, 2, 1).unwrap(),
        );
        assert_eq!(p.format("%H:%M"), Err(FormatError::OutOfRange));
    }

    #[test]
    fn error_display() {
        use alloc::string::ToString as _;

        assert_eq!(
            FormatError::InvalidPattern.to_string(),
            "invalid format pattern"
        );
    }
}
