use core::fmt;

use bstr::BStr;

/// Largest number of decimal digits that always fits a `u64` accumulator.
pub(crate) const MAX_EXACT_DIGITS: usize = 19;

/// A scanned decimal literal: `(-1)^negative * mantissa * 10^exponent`.
///
/// The spans borrow from the scanned input, so a `ParsedNumber` cannot outlive
/// it. When `too_many_digits` is set the value is a truncation of the literal
/// towards zero, never a rounding away from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedNumber<'a> {
    /// The literal started with `-`.
    pub negative: bool,
    /// Significant digits, without sign or decimal point.
    pub mantissa: u64,
    /// Power of ten to scale `mantissa` by.
    pub exponent: i64,
    /// No decimal point or exponent was consumed and the integer digits were
    /// not truncated.
    pub is_64bit_int: bool,
    /// More digits than a `u64` holds losslessly; `mantissa` and `exponent`
    /// describe the truncated value.
    pub too_many_digits: bool,
    /// Digits before the decimal point. May be empty outside JSON rules.
    pub integer: &'a [u8],
    /// Digits after the decimal point; `Some` iff a decimal point was
    /// consumed, even when no digits follow it.
    pub fraction: Option<&'a [u8]>,
    /// Offset one past the last byte that belongs to the literal.
    pub lastmatch: usize,
}

impl ParsedNumber<'_> {
    /// The literal as a `u64`, when it is a pure integer that fits.
    ///
    /// `-0` converts to `0`; any other negative literal is `None`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        let magnitude = self.integer_magnitude()?;
        if self.negative && magnitude != 0 {
            return None;
        }
        Some(magnitude)
    }

    /// The literal as an `i64`, when it is a pure integer that fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.integer_magnitude()?;
        if self.negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    fn integer_magnitude(&self) -> Option<u64> {
        if !self.is_64bit_int {
            return None;
        }
        if self.integer.len() <= MAX_EXACT_DIGITS {
            return Some(self.mantissa);
        }
        // A 20-digit run can wrap while still looking large enough to the
        // scanner.
        self.integer.iter().try_fold(0u64, |acc, &c| {
            acc.checked_mul(10)?.checked_add(u64::from(c - b'0'))
        })
    }
}

impl fmt::Debug for ParsedNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedNumber")
            .field("negative", &self.negative)
            .field("mantissa", &self.mantissa)
            .field("exponent", &self.exponent)
            .field("is_64bit_int", &self.is_64bit_int)
            .field("too_many_digits", &self.too_many_digits)
            .field("integer", &BStr::new(self.integer))
            .field("fraction", &self.fraction.map(BStr::new))
            .field("lastmatch", &self.lastmatch)
            .finish()
    }
}
