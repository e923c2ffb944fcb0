use std::any::Any;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use num_bigint::BigInt;
use num_traits::{One, Signed};

use super::Rational;

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        if self.numerator == other.numerator && self.denominator == other.denominator {
            return true;
        }
        self.canonical_form() == other.canonical_form()
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

impl Ord for Rational {
    /// Cross-multiplies instead of dividing: `a/b` vs `c/d` is `a*d` vs `c*b`,
    /// flipped when exactly one of `b` and `d` is negative.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        let ordering = lhs.cmp(&rhs);
        if self.denominator.is_negative() != other.denominator.is_negative() {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<BigInt> for Rational {
    fn eq(&self, other: &BigInt) -> bool {
        let (numerator, denominator) = self.canonical_form();
        denominator.is_one() && &numerator == other
    }
}

impl PartialEq<i64> for Rational {
    fn eq(&self, other: &i64) -> bool {
        *self == BigInt::from(*other)
    }
}

impl Rational {
    /// Value equality against anything; a non-`Rational` is simply unequal.
    pub fn eq_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Rational>()
            .is_some_and(|other| self == other)
    }
}
