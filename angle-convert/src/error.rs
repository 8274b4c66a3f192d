//! The kinds of errors a conversion can fail with. Each one is wrapped in a [`ConversionError`],
//! along with the region of the input text it refers to.

use angle_attrs::ErrorKind;
use angle_error::{ErrorKind, EXPR};
use ariadne::Fmt;
use crate::classify::ExponentMarker;

pub use angle_error::Error as ConversionError;

/// The input is neither a number nor text.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot convert a value of type `{}` to an angle", type_name),
    help = "pass a number, or text in DMS or scientific notation",
)]
pub struct UnsupportedType {
    /// The kind of value that was given.
    pub type_name: &'static str,
}

/// The input is text, but matches none of the accepted angle notations.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a recognized angle notation", input),
    labels = ["this text"],
    help = format!(
        "use degrees-minutes-seconds, e.g. {}, or scientific notation, e.g. {}{}",
        "180°20'13''".fg(EXPR),
        "2.3456e1".fg(EXPR),
        match exponent {
            ExponentMarker::Lowercase => " (the exponent marker must be a lowercase `e`)",
            ExponentMarker::AnyCase => "",
        },
    ),
)]
pub struct UnsupportedFormat {
    /// The text that was given.
    pub input: String,

    /// The exponent markers that were accepted for scientific notation.
    pub exponent: ExponentMarker,
}

/// The input matched an angle notation, but one of its parts could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot read the {} of this angle: {}", component, cause),
    labels = [format!("this {}", component)],
)]
pub struct ParseFailure {
    /// The part of the angle that failed to parse.
    pub component: &'static str,

    /// Why the part failed to parse.
    pub cause: String,
}
