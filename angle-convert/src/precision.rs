//! Working precision of a conversion, and the two arithmetic transforms between degrees and
//! radians.

use crate::consts::{pi, HALF_TURN};
use rug::{float::prec_max, Float};

/// The smallest working precision, in bits of mantissa. This is the precision of an [`f64`], so
/// that a native float input is never rounded when it is coerced.
pub const MIN_PRECISION: u32 = 53;

/// The working precision used when none is given.
pub const DEFAULT_PRECISION: u32 = 1 << 9;

/// The number of bits of mantissa used for arbitrary-precision arithmetic.
///
/// A [`Precision`] is always at least [`MIN_PRECISION`]; smaller values are raised to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u32);

impl Precision {
    /// Creates a working precision of the given number of bits.
    pub fn new(bits: u32) -> Self {
        Self(bits.clamp(MIN_PRECISION, prec_max()))
    }

    /// The smallest precision that can hold the given number of significant decimal digits.
    pub fn for_decimal_digits(digits: usize) -> Self {
        // log2(10) ~= 3.3219, rounded up
        let bits = (digits as u64 * 33_220).div_ceil(10_000);
        Self::new(u32::try_from(bits).unwrap_or(u32::MAX))
    }

    /// Returns the number of bits of this precision.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns the larger of this precision and the precision of the given [`Float`].
    pub fn at_least(self, n: &Float) -> Self {
        self.max(Self::new(n.prec()))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl From<u32> for Precision {
    fn from(bits: u32) -> Self {
        Self::new(bits)
    }
}

/// Converts decimal degrees to radians: `degrees * π / 180`.
///
/// The result has the given precision, or the precision of `degrees` if that is higher.
pub fn radians_from_degrees(degrees: &Float, precision: Precision) -> Float {
    let precision = precision.at_least(degrees);
    let product = Float::with_val(precision.bits(), degrees * &*pi(precision));
    product / HALF_TURN
}

/// Converts radians to decimal degrees: `radians * 180 / π`.
///
/// The result has the given precision, or the precision of `radians` if that is higher.
pub fn degrees_from_radians(radians: &Float, precision: Precision) -> Float {
    let precision = precision.at_least(radians);
    let product = Float::with_val(precision.bits(), radians * HALF_TURN);
    product / &*pi(precision)
}
