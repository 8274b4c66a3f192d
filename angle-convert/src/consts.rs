//! Constants used by the conversions.

use crate::precision::{Precision, DEFAULT_PRECISION};
use once_cell::sync::Lazy;
use rug::{float::Constant, Float};
use std::borrow::Cow;

/// The number of degrees in a half turn, i.e. in `π` radians.
pub const HALF_TURN: u32 = 180;

/// The number of arc minutes in a degree.
pub const MINUTES_IN_DEGREE: u32 = 60;

/// The number of arc seconds in a degree.
pub const SECONDS_IN_DEGREE: u32 = 3600;

/// `π` at the default working precision.
pub static PI: Lazy<Float> = Lazy::new(|| Float::with_val(DEFAULT_PRECISION, Constant::Pi));

/// Returns `π` at the given precision. The default precision is computed once and shared.
pub fn pi(precision: Precision) -> Cow<'static, Float> {
    if precision.bits() == DEFAULT_PRECISION {
        Cow::Borrowed(&*PI)
    } else {
        Cow::Owned(Float::with_val(precision.bits(), Constant::Pi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_matches_precision() {
        assert_eq!(pi(Precision::default()).prec(), DEFAULT_PRECISION);
        assert_eq!(pi(Precision::new(1024)).prec(), 1024);
        assert_eq!(pi(Precision::new(53)).to_f64(), std::f64::consts::PI);
    }
}
