use std::fmt;
use std::ops::{Bound, RangeBounds, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::Rational;

/// `start..=end` over rationals. Endpoints are never swapped, so a range
/// whose start lies above its end contains nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    pub fn new(start: Rational, end: Rational) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Rational {
        &self.start
    }

    pub fn end(&self) -> &Rational {
        &self.end
    }

    pub fn into_bounds(self) -> (Rational, Rational) {
        (self.start, self.end)
    }

    pub fn contains(&self, value: &Rational) -> bool {
        &self.start <= value && value <= &self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Rational {
    pub fn range_to(&self, end: &Rational) -> RationalRange {
        RationalRange::new(self.clone(), end.clone())
    }
}

impl RangeBounds<Rational> for RationalRange {
    fn start_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.end)
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(range: RangeInclusive<Rational>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl fmt::Display for RationalRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}
