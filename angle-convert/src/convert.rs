//! Conversion of angles between degrees and radians.

use crate::{
    classify::{classify, AngleValue, ExponentMarker, Input, Invalid},
    dms::DmsComponents,
    error::{ConversionError, UnsupportedFormat, UnsupportedType},
    precision::{degrees_from_radians, radians_from_degrees, Precision},
    scientific,
};
use log::debug;
use rug::Float;

/// The unit a conversion produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Degrees in, radians out.
    ToRadians,

    /// Radians in, degrees out.
    ToDegrees,
}

impl Direction {
    /// The exponent markers accepted in scientific notation for this direction.
    ///
    /// Conversion to radians accepts only a lowercase `e`, while conversion to degrees accepts
    /// either case.
    pub const fn exponent_marker(self) -> ExponentMarker {
        match self {
            Self::ToRadians => ExponentMarker::Lowercase,
            Self::ToDegrees => ExponentMarker::AnyCase,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::ToRadians => write!(f, "radians"),
            Direction::ToDegrees => write!(f, "degrees"),
        }
    }
}

/// Converts angles at a fixed working precision.
///
/// The result of a conversion has the converter's precision, or the precision of the input if
/// the input is a [`Float`] with a higher precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    precision: Precision,
}

impl Converter {
    /// Creates a converter with a working precision of the given number of bits.
    pub fn new(bits: u32) -> Self {
        Self { precision: Precision::new(bits) }
    }

    /// Returns the working precision of this converter.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Converts an angle in degrees to radians.
    ///
    /// The input can be a number of degrees, or text in DMS notation (`180°20'13''`) or scientific
    /// notation with a lowercase exponent marker (`2.3456e1`).
    pub fn to_radians<'a>(&self, input: impl Into<Input<'a>>) -> Result<Float, ConversionError> {
        self.convert(input.into(), Direction::ToRadians)
    }

    /// Converts an angle in radians to degrees.
    ///
    /// The input can be a number of radians, or text in scientific notation with an exponent
    /// marker of either case (`1.234E1`). Text in DMS notation is already in degrees, so it is
    /// returned as decimal degrees without further conversion.
    pub fn to_degrees<'a>(&self, input: impl Into<Input<'a>>) -> Result<Float, ConversionError> {
        self.convert(input.into(), Direction::ToDegrees)
    }

    /// Converts the input in the given direction.
    pub fn convert(&self, input: Input<'_>, direction: Direction) -> Result<Float, ConversionError> {
        debug!("converting {} input to {}", input.type_name(), direction);

        let transform = match direction {
            Direction::ToRadians => radians_from_degrees,
            Direction::ToDegrees => degrees_from_radians,
        };

        match classify(&input, direction.exponent_marker(), self.precision) {
            AngleValue::Numeric(n) => Ok(transform(&n, self.precision)),
            AngleValue::Dms(text) => {
                let Some(dms) = DmsComponents::parse(text)? else {
                    return Err(unsupported_format(text, direction));
                };
                let degrees = dms.to_decimal_degrees(self.precision);
                match direction {
                    Direction::ToRadians => Ok(radians_from_degrees(&degrees, self.precision)),
                    Direction::ToDegrees => Ok(degrees),
                }
            },
            AngleValue::Scientific(text) => {
                let n = scientific::parse(text, self.precision)?;
                Ok(transform(&n, self.precision))
            },
            AngleValue::Invalid(Invalid::Type(type_name)) => {
                Err(ConversionError::new(Vec::new(), UnsupportedType { type_name }))
            },
            AngleValue::Invalid(Invalid::Format) => {
                let text = match &input {
                    Input::Text(text) => text.as_ref(),
                    _ => "",
                };
                Err(unsupported_format(text, direction))
            },
        }
    }
}

impl From<Precision> for Converter {
    fn from(precision: Precision) -> Self {
        Self { precision }
    }
}

/// Builds the error for text that matches none of the notations accepted in the given direction.
fn unsupported_format(text: &str, direction: Direction) -> ConversionError {
    ConversionError::new(vec![0..text.len()], UnsupportedFormat {
        input: text.to_string(),
        exponent: direction.exponent_marker(),
    })
}

/// Converts an angle in degrees to radians, at the default working precision.
///
/// See [`Converter::to_radians`].
pub fn to_radians<'a>(input: impl Into<Input<'a>>) -> Result<Float, ConversionError> {
    Converter::default().to_radians(input)
}

/// Converts an angle in radians to degrees, at the default working precision.
///
/// See [`Converter::to_degrees`].
pub fn to_degrees<'a>(input: impl Into<Input<'a>>) -> Result<Float, ConversionError> {
    Converter::default().to_degrees(input)
}
