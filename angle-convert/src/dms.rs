//! Parsing of angles written in degrees-minutes-seconds notation, such as `180°20'13''`.
//!
//! Only the degrees may carry a sign. The minutes and seconds are always read as non-negative
//! offsets and are *added* to the degrees, whatever the sign of the degrees. So `-10°30'0''` is
//! `-10 + 30/60 = -9.5` degrees, not `-10.5`. Minutes and seconds of 60 or more are accepted as
//! they are.

use crate::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_DEGREE},
    error::{ConversionError, ParseFailure},
    precision::Precision,
};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use rug::{Float, Integer, Rational};
use std::{num::ParseIntError, str::FromStr};

/// Matches DMS notation, capturing the degrees, minutes and seconds.
static DMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+)°(\d+)'(\d+)''$").expect("DMS regex is valid")
});

/// Returns true if the given text is in DMS notation.
pub fn is_dms(text: &str) -> bool {
    DMS_RE.is_match(text)
}

/// The parts of an angle in DMS notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DmsComponents {
    /// Whole degrees, carrying the sign of the angle.
    pub degrees: i64,

    /// Arc minutes.
    pub minutes: u64,

    /// Arc seconds.
    pub seconds: u64,
}

impl DmsComponents {
    /// Parses the components from text in DMS notation.
    ///
    /// Returns `Ok(None)` if the text is not in DMS notation, and an error if it is, but one of
    /// its components does not fit in its integer type.
    pub fn parse(text: &str) -> Result<Option<Self>, ConversionError> {
        let Some(captures) = DMS_RE.captures(text) else {
            return Ok(None);
        };

        Ok(Some(Self {
            degrees: component(&captures, 1, "degrees")?,
            minutes: component(&captures, 2, "minutes")?,
            seconds: component(&captures, 3, "seconds")?,
        }))
    }

    /// Returns the angle as decimal degrees: `degrees + minutes / 60 + seconds / 3600`.
    ///
    /// The sum is computed exactly, and rounded once to the given precision.
    pub fn to_decimal_degrees(&self, precision: Precision) -> Float {
        let degrees = Rational::from(self.degrees)
            + Rational::from((Integer::from(self.minutes), Integer::from(MINUTES_IN_DEGREE)))
            + Rational::from((Integer::from(self.seconds), Integer::from(SECONDS_IN_DEGREE)));
        Float::with_val(precision.bits(), &degrees)
    }
}

/// Parses capture group `index` as an integer, reporting the span of the group if it fails.
fn component<T>(captures: &Captures<'_>, index: usize, name: &'static str) -> Result<T, ConversionError>
where
    T: FromStr<Err = ParseIntError>,
{
    // every group is non-optional in the pattern, so it is present in any match
    let Some(group) = captures.get(index) else {
        return Err(ConversionError::new(Vec::new(), ParseFailure {
            component: name,
            cause: "missing from the input".to_string(),
        }));
    };

    group.as_str().parse().map_err(|err: ParseIntError| {
        ConversionError::new(vec![group.start()..group.end()], ParseFailure {
            component: name,
            cause: err.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(text: &str) -> DmsComponents {
        DmsComponents::parse(text).unwrap().unwrap()
    }

    #[test]
    fn components() {
        assert_eq!(parse("180°20'13''"), DmsComponents { degrees: 180, minutes: 20, seconds: 13 });
        assert_eq!(parse("-10°30'0''"), DmsComponents { degrees: -10, minutes: 30, seconds: 0 });
        assert_eq!(parse("007°08'09''"), DmsComponents { degrees: 7, minutes: 8, seconds: 9 });
    }

    #[test]
    fn not_dms() {
        for text in ["180", "180°20'13\"", "180°-20'13''", "1°2'3'", "°2'3''", "1°2'3''x"] {
            assert!(!is_dms(text), "{text:?}");
            assert_eq!(DmsComponents::parse(text).unwrap(), None);
        }
    }

    #[test]
    fn decimal_degrees() {
        let degrees = parse("180°20'13''").to_decimal_degrees(Precision::default());
        let expected = Float::with_val(Precision::default().bits(), 649_213) / 3600;
        assert_eq!(degrees, expected);
    }

    #[test]
    fn sign_applies_to_degrees_only() {
        let degrees = parse("-10°30'0''").to_decimal_degrees(Precision::default());
        assert_eq!(degrees, -9.5);

        let degrees = parse("-0°30'0''").to_decimal_degrees(Precision::default());
        assert_eq!(degrees, 0.5);
    }

    #[test]
    fn lenient_minutes_and_seconds() {
        let degrees = parse("1°90'3600''").to_decimal_degrees(Precision::default());
        assert_eq!(degrees, 3.5);
    }

    #[test]
    fn component_overflow() {
        let text = "1°99999999999999999999'0''";
        let err = DmsComponents::parse(text).unwrap_err();
        let failure = err.kind::<ParseFailure>().unwrap();
        assert_eq!(failure.component, "minutes");
        assert_eq!(err.spans, vec![3..23]);
        assert_eq!(&text[err.spans[0].clone()], "99999999999999999999");
    }

    #[test]
    fn degrees_overflow() {
        let err = DmsComponents::parse("-99999999999999999999°0'0''").unwrap_err();
        assert_eq!(err.kind::<ParseFailure>().unwrap().component, "degrees");
    }
}
