//! Classification of caller input into one of the supported angle representations.
//!
//! Any value that can be converted is first turned into an [`Input`] through one of its [`From`]
//! impls. [`classify`] then decides which parse path applies to it, producing an [`AngleValue`].

use crate::{dms, precision::Precision, scientific};
use log::trace;
use rug::{Float, Integer, Rational};
use std::borrow::Cow;

/// A value given to a conversion, before it has been classified.
///
/// The numeric variants are the representations a number can arrive in. The remaining variants
/// exist so that values with no meaning as an angle (booleans, sequences and null) can still be
/// passed in and rejected with an error instead of failing to compile at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum Input<'a> {
    /// An integer of any width.
    Integer(Integer),

    /// A native binary floating-point number.
    Native(f64),

    /// An exact fraction, used for fixed-point and decimal values.
    Rational(Rational),

    /// An arbitrary-precision float. Its precision is kept as-is.
    Float(Float),

    /// Text to be parsed.
    Text(Cow<'a, str>),

    /// A boolean.
    Bool(bool),

    /// A sequence of values, with its length.
    Sequence(usize),

    /// The absence of a value.
    Null,
}

impl Input<'_> {
    /// A short name for the kind of value this is, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Native(_) => "float",
            Self::Rational(_) => "rational",
            Self::Float(_) => "arbitrary-precision float",
            Self::Text(_) => "text",
            Self::Bool(_) => "bool",
            Self::Sequence(_) => "sequence",
            Self::Null => "null",
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Input<'_> {
                fn from(n: $ty) -> Self {
                    Self::Integer(Integer::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f32> for Input<'_> {
    fn from(n: f32) -> Self {
        Self::Native(f64::from(n))
    }
}

impl From<f64> for Input<'_> {
    fn from(n: f64) -> Self {
        Self::Native(n)
    }
}

impl From<Integer> for Input<'_> {
    fn from(n: Integer) -> Self {
        Self::Integer(n)
    }
}

impl From<Rational> for Input<'_> {
    fn from(n: Rational) -> Self {
        Self::Rational(n)
    }
}

impl From<Float> for Input<'_> {
    fn from(n: Float) -> Self {
        Self::Float(n)
    }
}

impl From<&Float> for Input<'_> {
    fn from(n: &Float) -> Self {
        Self::Float(n.clone())
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(Cow::Borrowed(s))
    }
}

impl From<String> for Input<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl From<bool> for Input<'_> {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T> From<Vec<T>> for Input<'_> {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.len())
    }
}

impl<T> From<&[T]> for Input<'_> {
    fn from(v: &[T]) -> Self {
        Self::Sequence(v.len())
    }
}

impl From<()> for Input<'_> {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<'a, T: Into<Input<'a>>> From<Option<T>> for Input<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// The exponent markers accepted in scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExponentMarker {
    /// Only a lowercase `e`, as in `1.8e2`.
    Lowercase,

    /// Either `e` or `E`, as in `1.8e2` or `1.8E2`.
    AnyCase,
}

/// Why an input was rejected by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invalid {
    /// The input is not a number or text. Contains the name of the input's type.
    Type(&'static str),

    /// The input is text that matches none of the accepted notations.
    Format,
}

/// A classified input, ready to be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum AngleValue<'a> {
    /// A number, already coerced to an arbitrary-precision float.
    Numeric(Float),

    /// Text in degrees-minutes-seconds notation.
    Dms(&'a str),

    /// Text in scientific notation.
    Scientific(&'a str),

    /// An input that cannot be converted.
    Invalid(Invalid),
}

/// Classifies the given input.
///
/// Numbers are coerced to a [`Float`] with the given precision, except for [`Input::Float`], which
/// keeps its own precision if it is higher. Text is tested against the DMS notation first, and
/// then against scientific notation with the given exponent markers.
pub fn classify<'a>(
    input: &'a Input<'_>,
    exponent: ExponentMarker,
    precision: Precision,
) -> AngleValue<'a> {
    let value = match input {
        Input::Integer(n) => AngleValue::Numeric(Float::with_val(precision.bits(), n)),
        Input::Native(n) => AngleValue::Numeric(Float::with_val(precision.bits(), *n)),
        Input::Rational(n) => AngleValue::Numeric(Float::with_val(precision.bits(), n)),
        Input::Float(n) => {
            let precision = precision.at_least(n);
            AngleValue::Numeric(Float::with_val(precision.bits(), n))
        },
        Input::Text(text) => {
            let text: &str = text;
            if dms::is_dms(text) {
                AngleValue::Dms(text)
            } else if scientific::is_scientific(text, exponent) {
                AngleValue::Scientific(text)
            } else {
                AngleValue::Invalid(Invalid::Format)
            }
        },
        Input::Bool(_) | Input::Sequence(_) | Input::Null => {
            AngleValue::Invalid(Invalid::Type(input.type_name()))
        },
    };

    trace!("classified {} input as {:?}", input.type_name(), value);
    value
}
