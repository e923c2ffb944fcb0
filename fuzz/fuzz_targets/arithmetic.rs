#![no_main]

use libfuzzer_sys::fuzz_target;
use rationals::{DivBy, Rational};

fuzz_target!(|parts: (i64, i64, i64, i64)| {
    let (a, b, c, d) = parts;
    let (Ok(lhs), Ok(rhs)) = (a.div_by(b), c.div_by(d)) else {
        return;
    };

    assert_eq!(lhs.plus(&rhs).minus(&rhs), lhs);
    assert_eq!(lhs.plus(&lhs.negate()), Rational::from(0i32));
    assert_eq!(lhs.cmp(&rhs), rhs.cmp(&lhs).reverse());
    match lhs.checked_div(&rhs) {
        Ok(quotient) => assert_eq!(quotient.times(&rhs), lhs),
        Err(err) => {
            assert!(err.is_invalid_argument());
            assert!(rhs.is_zero());
        }
    }
});
