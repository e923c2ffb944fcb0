use num_bigint::BigInt;

use crate::{Rational, RationalError};

/// `numerator.div_by(denominator)` for any integer width.
pub trait DivBy<Rhs = Self> {
    fn div_by(self, denominator: Rhs) -> Result<Rational, RationalError>;
}

macro_rules! impl_div_by_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DivBy for $ty {
                fn div_by(self, denominator: $ty) -> Result<Rational, RationalError> {
                    Rational::new(BigInt::from(self), BigInt::from(denominator))
                }
            }
        )*
    };
}

impl_div_by_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl DivBy for BigInt {
    fn div_by(self, denominator: BigInt) -> Result<Rational, RationalError> {
        Rational::new(self, denominator)
    }
}

impl DivBy for &BigInt {
    fn div_by(self, denominator: &BigInt) -> Result<Rational, RationalError> {
        Rational::new(self.clone(), denominator.clone())
    }
}
