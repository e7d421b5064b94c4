use thiserror::Error;

/// A literal that is not a number under the configured options.
///
/// `position` is the byte offset at which scanning gave up.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {position}")]
pub struct ParseError {
    /// What was wrong with the literal.
    pub kind: ParseErrorKind,
    /// Byte offset into the scanned input.
    pub position: usize,
}

impl ParseError {
    pub(crate) const fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// Reasons a literal is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The input slice was empty.
    #[error("empty input")]
    Empty,
    /// A sign was not followed by a digit (or, outside JSON rules, by the
    /// decimal point).
    #[error("sign is not followed by a digit")]
    InvalidSign,
    /// Neither the integer nor the fractional part has a digit.
    #[error("no digits in mantissa")]
    NoDigitsInMantissa,
    /// JSON rules: the decimal point is not preceded by a digit.
    #[error("no digits in integer part")]
    NoDigitsInIntegerPart,
    /// JSON rules: the decimal point is not followed by a digit.
    #[error("no digits in fractional part")]
    NoDigitsInFractionalPart,
    /// JSON rules: a `0` is followed by further integer digits.
    #[error("leading zeros in integer part")]
    LeadingZerosInIntegerPart,
    /// An exponent marker has no digits and fixed notation is not allowed.
    #[error("missing exponent digits")]
    MissingExponentDigits,
    /// Scientific notation is required but there is no exponent marker.
    #[error("missing exponential part")]
    MissingExponentialPart,
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn display_includes_position() {
        let err = ParseError::new(ParseErrorKind::LeadingZerosInIntegerPart, 1);
        assert_eq!(err.to_string(), "leading zeros in integer part at byte 1");
    }
}
