use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use crate::{trace, InvalidArgument, RationalError};

mod arith;
mod ordering;
mod serialize;
mod text;


/// An exact fraction of two arbitrary-precision integers.
///
/// The parts are kept exactly as constructed; `6/-4` is stored as `6/-4`.
/// Equality, hashing, ordering and `Display` all see it as `-3/2`.
#[derive(Clone, Debug)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    pub fn new(numerator: BigInt, denominator: BigInt) -> Result<Self, RationalError> {
        if denominator.is_zero() {
            let err = RationalError::from(InvalidArgument::ZeroDenominator);
            trace::rejected(
                "construct_rejected",
                || format!("{numerator}/{denominator}"),
                &err,
            );
            return Err(err);
        }
        Ok(Self::from_raw(numerator, denominator))
    }

    // Callers guarantee a non-zero denominator.
    pub(crate) fn from_raw(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    pub fn from_integer(value: BigInt) -> Self {
        Self::from_raw(value, BigInt::one())
    }

    /// The stored numerator, not necessarily reduced.
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// The stored denominator, not necessarily reduced or positive.
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Lowest terms with a positive denominator; the sign lives on the
    /// numerator and zero is always `(0, 1)`.
    pub fn canonical_form(&self) -> (BigInt, BigInt) {
        // gcd is non-negative and gcd(0, d) == |d|
        let divisor = self.numerator.gcd(&self.denominator);
        let (numerator, denominator) = if divisor.is_one() {
            (self.numerator.clone(), self.denominator.clone())
        } else {
            (&self.numerator / &divisor, &self.denominator / &divisor)
        };
        if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        }
    }

    pub fn reduced(&self) -> Self {
        let (numerator, denominator) = self.canonical_form();
        Self::from_raw(numerator, denominator)
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.numerator.is_multiple_of(&self.denominator)
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i8 {
        match (self.numerator.sign(), self.denominator.sign()) {
            (Sign::NoSign, _) => 0,
            (numerator, denominator) if numerator == denominator => 1,
            _ => -1,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.signum() > 0
    }

    pub fn is_negative(&self) -> bool {
        self.signum() < 0
    }

    pub fn abs(&self) -> Self {
        Self::from_raw(self.numerator.abs(), self.denominator.abs())
    }

    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::one().checked_div(self)
    }

    pub fn to_big_rational(&self) -> BigRational {
        let (numerator, denominator) = self.canonical_form();
        BigRational::new_raw(numerator, denominator)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        let (numerator, denominator) = value.into_raw();
        Self::from_raw(numerator, denominator)
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Rational {
                fn from(value: $ty) -> Self {
                    Self::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
