//! Parsing of angles written in scientific notation, such as `2.3456e1`.

use crate::{
    classify::ExponentMarker,
    error::{ConversionError, ParseFailure},
    precision::Precision,
};
use once_cell::sync::Lazy;
use regex::Regex;
use rug::Float;

/// Matches scientific notation with a lowercase exponent marker.
static LOWERCASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+(?:\.\d+)?e[+-]?\d+)$").expect("scientific regex is valid")
});

/// Matches scientific notation with an exponent marker of either case.
static ANY_CASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?\d+(?:\.\d+)?[eE][+-]?\d+)$").expect("scientific regex is valid")
});

/// Returns true if the given text is in scientific notation, using the given exponent markers.
pub fn is_scientific(text: &str, exponent: ExponentMarker) -> bool {
    match exponent {
        ExponentMarker::Lowercase => LOWERCASE_RE.is_match(text),
        ExponentMarker::AnyCase => ANY_CASE_RE.is_match(text),
    }
}

/// Counts the significant digits in the mantissa of the given text.
fn significant_digits(text: &str) -> usize {
    let mantissa = text.split(['e', 'E']).next().unwrap_or(text);
    mantissa
        .chars()
        .filter(char::is_ascii_digit)
        .skip_while(|&c| c == '0')
        .count()
}

/// Parses text in scientific notation into a [`Float`].
///
/// The result has the given precision, raised if needed so that every significant digit of the
/// mantissa is kept.
pub fn parse(text: &str, precision: Precision) -> Result<Float, ConversionError> {
    let failure = |cause: String| {
        ConversionError::new(vec![0..text.len()], ParseFailure { component: "number", cause })
    };

    let parsed = Float::parse(text).map_err(|err| failure(err.to_string()))?;
    let precision = precision.max(Precision::for_decimal_digits(significant_digits(text)));
    let value = Float::with_val(precision.bits(), parsed);

    if value.is_finite() {
        Ok(value)
    } else {
        Err(failure("the exponent is out of range".to_string()))
    }
}
