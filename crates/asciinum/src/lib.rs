//! An allocation-free scanner for ASCII decimal number literals.
//!
//! [`parse_number_string`] turns the bytes of a literal such as `-12.5e3`
//! into a [`ParsedNumber`]: a sign, a `u64` mantissa of significant digits and
//! a decimal exponent. Converting that to an `f64` or integer is left to the
//! caller; the scan itself is the expensive part of number parsing in most
//! codecs and is what this crate optimizes.
//!
//! ```rust
//! use asciinum::{ParseOptions, parse_number_string};
//!
//! let n = parse_number_string(b"123.456,", ParseOptions::default()).unwrap();
//! assert_eq!((n.mantissa, n.exponent), (123_456, -3));
//! assert_eq!(n.lastmatch, 7);
//! assert!(!n.is_64bit_int);
//! ```
//!
//! Literals with more than 19 significant digits are truncated (see
//! [`ParsedNumber::too_many_digits`]); the spans in the result still cover
//! every digit so a slow path can re-read them.

#![no_std]

#[cfg(test)]
extern crate std;

macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        ::log::trace!(target: "asciinum", $($arg)+);
    }};
}

mod error;
mod number;
mod options;
mod scanner;
mod word;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};
pub use number::ParsedNumber;
pub use options::{CharsFormat, ParseOptions, ParseRules};
pub use word::{
    is_integer, is_made_of_eight_digits_fast, parse_eight_digits_unrolled, read_u64, write_u64,
};

use scanner::Scan;

/// Scans the numeric literal at the start of `input`.
///
/// Scanning stops at the first byte that cannot continue the literal;
/// [`ParsedNumber::lastmatch`] says where. Trailing bytes are the caller's
/// concern.
///
/// # Errors
///
/// Returns a [`ParseError`] when `input` does not start with a literal that is
/// legal under `options`.
#[inline]
pub fn parse_number_string(
    input: &[u8],
    options: ParseOptions,
) -> Result<ParsedNumber<'_>, ParseError> {
    match scanner::scan(input, options)? {
        Scan::Exact(number) => Ok(number),
        Scan::Long(long) => Ok(scanner::correct(long, options)),
    }
}

/// Scans a JSON number token with [`ParseOptions::json`].
///
/// # Errors
///
/// Returns a [`ParseError`] when `input` does not start with a JSON number.
#[inline]
pub fn parse_json_number(input: &[u8]) -> Result<ParsedNumber<'_>, ParseError> {
    parse_number_string(input, ParseOptions::json())
}
