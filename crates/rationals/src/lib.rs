//! Exact rational numbers over arbitrary-precision integers.
//!
//! Values are stored as written and reduced lazily: equality, hashing,
//! ordering and formatting all observe the lowest-terms form with the sign on
//! the numerator, while arithmetic never pays for a gcd.

mod div_by;
mod error;
mod range;
mod rational;
pub mod trace;

pub use div_by::DivBy;
pub use error::{InvalidArgument, ParseFailure, RationalError};
pub use num_bigint::BigInt;
pub use range::RationalRange;
pub use rational::Rational;
