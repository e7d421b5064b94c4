#![no_main]

use arbitrary::Arbitrary;
use asciinum::{CharsFormat, ParseOptions, ParseRules, parse_number_string};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    flags: u8,
    decimal_comma: bool,
    bytes: Vec<u8>,
}

impl Input {
    fn options(&self) -> ParseOptions {
        let format = match self.flags & 0b11 {
            0 => CharsFormat::FIXED,
            1 => CharsFormat::SCIENTIFIC,
            _ => CharsFormat::GENERAL,
        };
        let rules = if self.flags & 0b100 == 0 {
            ParseRules::General
        } else {
            ParseRules::Json
        };
        ParseOptions {
            format,
            rules,
            parse_ints: self.flags & 0b1000 != 0,
            decimal_point: if self.decimal_comma { b',' } else { b'.' },
            allow_leading_plus: self.flags & 0b1_0000 != 0,
        }
    }
}

fuzz_target!(|input: Input| {
    let options = input.options();
    let bytes = input.bytes.as_slice();

    if let Ok(n) = parse_number_string(bytes, options) {
        assert!(n.lastmatch <= bytes.len());
        assert!(n.integer.iter().all(u8::is_ascii_digit));
        assert!(n.fraction.is_none_or(|f| f.iter().all(u8::is_ascii_digit)));
        assert!(!n.integer.is_empty() || n.fraction.is_some_and(|f| !f.is_empty()));
        assert!(!(n.is_64bit_int && n.too_many_digits));

        let again = parse_number_string(&bytes[..n.lastmatch], options);
        assert_eq!(again, Ok(n), "rescan of {:?}", &bytes[..n.lastmatch]);
    }

    // Whatever serde_json reads as a number must scan in full under JSON
    // rules.
    let json = ParseOptions::json();
    if serde_json::from_slice::<serde_json::Number>(bytes).is_ok()
        && !bytes.iter().any(u8::is_ascii_whitespace)
    {
        let n = parse_number_string(bytes, json).expect("serde_json accepted it");
        assert_eq!(n.lastmatch, bytes.len());
    }
});
