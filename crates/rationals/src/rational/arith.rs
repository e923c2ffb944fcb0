use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use super::Rational;
use crate::{trace, InvalidArgument, RationalError};

// Results are left unreduced; canonicalization happens when a value is
// compared, hashed or printed.
impl Rational {
    pub fn negate(&self) -> Rational {
        Rational::from_raw(-&self.numerator, self.denominator.clone())
    }

    pub fn plus(&self, other: &Rational) -> Rational {
        if self.denominator == other.denominator {
            return Rational::from_raw(
                &self.numerator + &other.numerator,
                self.denominator.clone(),
            );
        }
        Rational::from_raw(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn minus(&self, other: &Rational) -> Rational {
        if self.denominator == other.denominator {
            return Rational::from_raw(
                &self.numerator - &other.numerator,
                self.denominator.clone(),
            );
        }
        Rational::from_raw(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    pub fn times(&self, other: &Rational) -> Rational {
        Rational::from_raw(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Fails when `other` is zero, since the quotient's denominator would be.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational, RationalError> {
        if other.numerator.is_zero() {
            let err = RationalError::from(InvalidArgument::DivisionByZero);
            trace::rejected("divide_rejected", || format!("{self} / {other}"), &err);
            return Err(err);
        }
        Ok(Rational::from_raw(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::from_raw(-self.numerator, self.denominator)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.negate()
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $named:ident) => {
        impl $imp<&Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                self.$named(rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$named(&rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                self.$named(rhs)
            }
        }

        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$named(&rhs)
            }
        }
    };
}

forward_binop!(Add, add, plus);
forward_binop!(Sub, sub, minus);
forward_binop!(Mul, mul, times);

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, value| acc.plus(&value))
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, value| acc.plus(value))
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, value| acc.times(&value))
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Rational {
        iter.fold(Rational::one(), |acc, value| acc.times(value))
    }
}
