#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArgument {
    #[error("denominator must be non-zero")]
    ZeroDenominator,
    #[error("division by a rational with a zero numerator")]
    DivisionByZero,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("{token:?} is not an integer")]
    InvalidInteger { token: String },
    #[error("expected numerator/denominator, found {found} parts")]
    WrongTokenCount { found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("cannot parse {input:?} as a rational: {reason}")]
    Parse { input: String, reason: ParseFailure },
}

impl RationalError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RationalError::InvalidArgument(_))
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, RationalError::Parse { .. })
    }
}
