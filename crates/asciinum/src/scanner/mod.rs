//! Scanner: single forward pass over one numeric literal.
//!
//! What it does
//! - Consumes an optional sign, the integer digit run, an optional fraction
//!   (eight digits at a time where possible) and an optional exponent.
//! - Accumulates every digit into a wrapping `u64`. Up to 19 digits the
//!   accumulator is exact; beyond that it may have wrapped and the scan is
//!   handed to [`correct()`] as [`Scan::Long`].
//! - Enforces the dialect rules of [`ParseOptions`] and reports the first
//!   violation as a [`ParseError`].
//!
//! Invariants
//! - Every read is bounds-checked through `get`/`first_chunk`; the scanner
//!   never looks past the end of the input.
//! - `integer` and `fraction` are sub-slices of the input that contain only
//!   ASCII digits. The correction pass relies on this and does not re-check.
//! - The exponent accumulator stops growing at [`EXPONENT_CEILING`], so a long
//!   run of exponent digits costs time but never overflows.
#![allow(clippy::cast_possible_wrap)]

mod correct;

pub(crate) use correct::correct;

use crate::{
    error::{ParseError, ParseErrorKind},
    number::{MAX_EXACT_DIGITS, ParsedNumber},
    options::ParseOptions,
    word::{eight_digits, is_integer, parse_eight_digits_unrolled},
};

/// Exponent magnitudes stop accumulating once they reach this value.
pub(crate) const EXPONENT_CEILING: i64 = 0x1000_0000;

/// Outcome of the forward pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan<'a> {
    /// At most 19 digits: mantissa and exponent are final.
    Exact(ParsedNumber<'a>),
    /// More digits than the accumulator holds; needs [`correct()`].
    Long(LongScan<'a>),
}

/// A literal whose accumulator may have wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LongScan<'a> {
    /// Provisional result; `mantissa` is the raw wrapping accumulator.
    pub(crate) number: ParsedNumber<'a>,
    /// Integer plus fraction digits, leading zeros included.
    pub(crate) digit_count: usize,
    /// The explicit exponent after the `e` marker, already signed and clamped.
    pub(crate) exp_number: i64,
}

#[inline]
fn digit_at(input: &[u8], p: usize) -> Option<u8> {
    input.get(p).copied().filter(|&c| is_integer(c)).map(|c| c - b'0')
}

/// Runs the forward pass over `input`.
pub(crate) fn scan(input: &[u8], options: ParseOptions) -> Result<Scan<'_>, ParseError> {
    let json = options.is_json();
    let Some(&first) = input.first() else {
        return Err(ParseError::new(ParseErrorKind::Empty, 0));
    };

    let mut p = 0;
    let negative = first == b'-';
    if negative || (first == b'+' && options.allow_leading_plus) {
        p += 1;
        // A sign must be followed by a digit, or by the decimal point outside
        // JSON.
        match input.get(p).copied() {
            Some(c) if is_integer(c) => {}
            Some(c) if !json && c == options.decimal_point => {}
            _ => return Err(ParseError::new(ParseErrorKind::InvalidSign, p)),
        }
    }

    let start_digits = p;
    let mut i: u64 = 0;
    while let Some(digit) = digit_at(input, p) {
        i = i.wrapping_mul(10).wrapping_add(u64::from(digit));
        p += 1;
    }
    let end_of_integer_part = p;
    let integer = &input[start_digits..end_of_integer_part];
    let mut digit_count = integer.len();

    let mut exponent: i64 = 0;
    let mut fraction = None;
    if input.get(p).copied() == Some(options.decimal_point) {
        p += 1;
        let before = p;
        while let Some(word) = eight_digits(&input[p..]) {
            i = i
                .wrapping_mul(100_000_000)
                .wrapping_add(u64::from(parse_eight_digits_unrolled(word)));
            p += 8;
        }
        while let Some(digit) = digit_at(input, p) {
            i = i.wrapping_mul(10).wrapping_add(u64::from(digit));
            p += 1;
        }
        let digits = &input[before..p];
        exponent = -(digits.len() as i64);
        digit_count += digits.len();
        fraction = Some(digits);
    }

    if digit_count == 0 {
        return Err(ParseError::new(ParseErrorKind::NoDigitsInMantissa, p));
    }
    if json {
        if integer.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::NoDigitsInIntegerPart,
                start_digits,
            ));
        }
        if fraction.is_some_and(<[u8]>::is_empty) {
            return Err(ParseError::new(
                ParseErrorKind::NoDigitsInFractionalPart,
                p,
            ));
        }
    }

    let mut exp_number: i64 = 0;
    let marker = input.get(p).copied();
    if options.allows_scientific() && matches!(marker, Some(b'e' | b'E')) {
        let location_of_e = p;
        p += 1;
        let mut neg_exp = false;
        match input.get(p).copied() {
            Some(b'-') => {
                neg_exp = true;
                p += 1;
            }
            Some(b'+') => p += 1,
            _ => {}
        }
        if digit_at(input, p).is_none() {
            if !options.allows_fixed() {
                return Err(ParseError::new(ParseErrorKind::MissingExponentDigits, p));
            }
            // Not an exponent after all; the literal ends before the marker.
            p = location_of_e;
        } else {
            while let Some(digit) = digit_at(input, p) {
                if exp_number < EXPONENT_CEILING {
                    exp_number = 10 * exp_number + i64::from(digit);
                }
                p += 1;
            }
            if exp_number >= EXPONENT_CEILING {
                trace!("exponent clamped at {exp_number}");
            }
            if neg_exp {
                exp_number = -exp_number;
            }
            exponent += exp_number;
        }
    } else if options.allows_scientific() && !options.allows_fixed() {
        return Err(ParseError::new(ParseErrorKind::MissingExponentialPart, p));
    }

    if json && integer.len() >= 2 && integer[0] == b'0' {
        return Err(ParseError::new(
            ParseErrorKind::LeadingZerosInIntegerPart,
            start_digits,
        ));
    }

    let number = ParsedNumber {
        negative,
        mantissa: i,
        exponent,
        is_64bit_int: p == end_of_integer_part,
        too_many_digits: false,
        integer,
        fraction,
        lastmatch: p,
    };
    if digit_count > MAX_EXACT_DIGITS {
        Ok(Scan::Long(LongScan {
            number,
            digit_count,
            exp_number,
        }))
    } else {
        Ok(Scan::Exact(number))
    }
}
