//! Truncating re-scan for literals with more than 19 digits.
#![allow(clippy::cast_possible_wrap)]

use super::LongScan;
use crate::{
    number::{MAX_EXACT_DIGITS, ParsedNumber},
    options::ParseOptions,
};

/// Smallest 19-digit value. The re-scan stops as soon as the accumulator
/// reaches it, so one more digit can never overflow.
const MINIMAL_NINETEEN_DIGIT_INTEGER: u64 = 1_000_000_000_000_000_000;

/// Smallest 20-digit value. A 20-digit JSON integer whose raw accumulator is
/// below this has wrapped.
const MINIMAL_TWENTY_DIGIT_INTEGER: u64 = 10_000_000_000_000_000_000;

/// Settles `too_many_digits` and, if set, rebuilds mantissa and exponent from
/// the recorded spans.
pub(crate) fn correct(long: LongScan<'_>, options: ParseOptions) -> ParsedNumber<'_> {
    let LongScan {
        mut number,
        digit_count,
        exp_number,
    } = long;

    // 0.000…0001 has many digits but few that carry precision.
    let significant = digit_count - leading_zeros(number.integer, number.fraction);
    number.too_many_digits = if options.is_json() && options.parse_ints && number.is_64bit_int {
        significant > MAX_EXACT_DIGITS + 1 || number.mantissa < MINIMAL_TWENTY_DIGIT_INTEGER
    } else {
        significant > MAX_EXACT_DIGITS
    };
    if !number.too_many_digits {
        return number;
    }

    trace!(
        "truncating {significant} significant digits at offset {}",
        number.lastmatch
    );
    number.is_64bit_int = false;
    let mut i = 0;
    let integer_left = truncate_into(&mut i, number.integer);
    number.exponent = if i >= MINIMAL_NINETEEN_DIGIT_INTEGER {
        integer_left as i64 + exp_number
    } else {
        let fraction = number.fraction.unwrap_or_default();
        let fraction_left = truncate_into(&mut i, fraction);
        -((fraction.len() - fraction_left) as i64) + exp_number
    };
    number.mantissa = i;
    number
}

/// Folds digits into `acc` until it reaches 19 digits. Returns how many
/// digits were left over.
fn truncate_into(acc: &mut u64, digits: &[u8]) -> usize {
    let mut rest = digits;
    while *acc < MINIMAL_NINETEEN_DIGIT_INTEGER {
        let Some((&c, tail)) = rest.split_first() else {
            break;
        };
        *acc = *acc * 10 + u64::from(c - b'0');
        rest = tail;
    }
    rest.len()
}

/// Zeros in front of the first significant digit, reading through the
/// decimal point when the integer part is all zeros.
fn leading_zeros(integer: &[u8], fraction: Option<&[u8]>) -> usize {
    let zeros = |digits: &[u8]| digits.iter().take_while(|&&c| c == b'0').count();
    let in_integer = zeros(integer);
    if in_integer < integer.len() {
        return in_integer;
    }
    in_integer + fraction.map_or(0, zeros)
}
