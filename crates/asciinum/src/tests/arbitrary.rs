use std::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{CharsFormat, ParseOptions, ParseRules};

impl Arbitrary for ParseOptions {
    fn arbitrary(g: &mut Gen) -> Self {
        let format = *g
            .choose(&[CharsFormat::GENERAL, CharsFormat::FIXED, CharsFormat::SCIENTIFIC])
            .unwrap();
        let rules = if bool::arbitrary(g) {
            ParseRules::Json
        } else {
            ParseRules::General
        };
        Self {
            format,
            rules,
            parse_ints: bool::arbitrary(g),
            decimal_point: *g.choose(b".,").unwrap(),
            allow_leading_plus: bool::arbitrary(g),
        }
    }
}

/// Bytes drawn mostly from the characters that can appear in a literal.
#[derive(Debug, Clone)]
pub(crate) struct NumberLike(pub(crate) Vec<u8>);

impl Arbitrary for NumberLike {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[u8] = b"0123456789000999.,eE+-x ";
        let len = usize::arbitrary(g) % (g.size() + 1);
        Self((0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(NumberLike))
    }
}

fn digits(g: &mut Gen, max_len: usize) -> String {
    let len = usize::arbitrary(g) % (max_len + 1);
    (0..len)
        .map(|_| char::from(*g.choose(b"0123456789").unwrap()))
        .collect()
}

/// A well-formed general-rules literal with explicit parts.
#[derive(Debug, Clone)]
pub(crate) struct DecimalLiteral {
    pub(crate) negative: bool,
    pub(crate) integer: String,
    pub(crate) fraction: Option<String>,
    pub(crate) exponent: Option<i32>,
}

impl DecimalLiteral {
    pub(crate) fn generate(g: &mut Gen, max_integer: usize, max_fraction: usize) -> Self {
        let mut integer = digits(g, max_integer);
        let fraction = bool::arbitrary(g).then(|| digits(g, max_fraction));
        if integer.is_empty() && fraction.as_ref().is_none_or(String::is_empty) {
            integer.push('7');
        }
        Self {
            negative: bool::arbitrary(g),
            integer,
            fraction,
            exponent: bool::arbitrary(g).then(|| i32::from(i16::arbitrary(g))),
        }
    }

    pub(crate) fn render(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        out.push_str(&self.integer);
        if let Some(fraction) = &self.fraction {
            out.push('.');
            out.push_str(fraction);
        }
        if let Some(exponent) = self.exponent {
            out.push('e');
            out.push_str(&std::format!("{exponent}"));
        }
        out
    }

    pub(crate) fn fraction_len(&self) -> usize {
        self.fraction.as_ref().map_or(0, String::len)
    }

    /// All mantissa digits with leading zeros removed.
    pub(crate) fn significant_digits(&self) -> String {
        let mut all = self.integer.clone();
        if let Some(fraction) = &self.fraction {
            all.push_str(fraction);
        }
        String::from(all.trim_start_matches('0'))
    }
}

/// At most 19 digits in total, so the accumulator is exact.
#[derive(Debug, Clone)]
pub(crate) struct ShortLiteral(pub(crate) DecimalLiteral);

impl Arbitrary for ShortLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(DecimalLiteral::generate(g, 10, 9))
    }
}

/// Up to 60 digits, frequently more than 19.
#[derive(Debug, Clone)]
pub(crate) struct LongLiteral(pub(crate) DecimalLiteral);

impl Arbitrary for LongLiteral {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(DecimalLiteral::generate(g, 30, 30))
    }
}
