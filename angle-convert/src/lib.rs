//! Conversion of angles between degrees and radians, using arbitrary-precision arithmetic.
//!
//! Angles can be given as numbers of any kind, or as text in degrees-minutes-seconds notation
//! (`180°20'13''`) or scientific notation (`2.3456e1`). Results are [`rug::Float`]s, so that
//! precision is not lost when they are used in further computations.
//!
//! ```
//! use angle_convert::{to_degrees, to_radians, Converter};
//!
//! let radians = to_radians("180°0'0''").unwrap();
//! assert_eq!(radians, to_radians(180).unwrap());
//! assert_eq!(radians.to_f64(), std::f64::consts::PI);
//!
//! let degrees = to_degrees("1.234E1").unwrap();
//! assert!((degrees.to_f64() - 707.0299191914359).abs() < 1e-9);
//!
//! // a custom working precision, in bits
//! let converter = Converter::new(1024);
//! assert_eq!(converter.to_radians(45).unwrap().prec(), 1024);
//!
//! // inputs that are not angles are rejected with an error
//! assert!(to_radians(true).is_err());
//! assert!(to_radians("not-an-angle").is_err());
//! ```

pub mod classify;
pub mod consts;
pub mod convert;
pub mod dms;
pub mod error;
pub mod precision;
pub mod scientific;

pub use classify::{AngleValue, ExponentMarker, Input};
pub use convert::{to_degrees, to_radians, Converter, Direction};
pub use dms::DmsComponents;
pub use error::{ConversionError, ParseFailure, UnsupportedFormat, UnsupportedType};
pub use precision::{Precision, DEFAULT_PRECISION, MIN_PRECISION};
