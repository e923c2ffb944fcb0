use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::One;

use super::Rational;
use crate::{trace, ParseFailure, RationalError};

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (numerator, denominator) = self.canonical_form();
        if denominator.is_one() {
            write!(f, "{numerator}")
        } else {
            write!(f, "{numerator}/{denominator}")
        }
    }
}

impl Rational {
    /// Accepts `-?digits` or `-?digits/-?digits`. The value is kept as written.
    pub fn parse(text: &str) -> Result<Rational, RationalError> {
        let (numerator, denominator) = parse_parts(text).map_err(|err| {
            trace::rejected("parse_rejected", || text.to_string(), &err);
            err
        })?;
        Rational::new(numerator, denominator)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Rational::parse(text)
    }
}

fn parse_parts(text: &str) -> Result<(BigInt, BigInt), RationalError> {
    if !text.contains('/') {
        return Ok((parse_integer(text, text)?, BigInt::one()));
    }
    let tokens: Vec<&str> = text.split('/').collect();
    match tokens.as_slice() {
        [numerator, denominator] => Ok((
            parse_integer(text, numerator)?,
            parse_integer(text, denominator)?,
        )),
        _ => Err(RationalError::Parse {
            input: text.to_string(),
            reason: ParseFailure::WrongTokenCount {
                found: tokens.len(),
            },
        }),
    }
}

// `BigInt::from_str` also takes `+` and `_`, which the text format doesn't.
fn parse_integer(input: &str, token: &str) -> Result<BigInt, RationalError> {
    let invalid = || RationalError::Parse {
        input: input.to_string(),
        reason: ParseFailure::InvalidInteger {
            token: token.to_string(),
        },
    };
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    BigInt::parse_bytes(token.as_bytes(), 10).ok_or_else(invalid)
}
