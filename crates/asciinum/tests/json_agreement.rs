#![expect(missing_docs)]

use asciinum::{ParsedNumber, parse_json_number};
use quickcheck::{Arbitrary, Gen, QuickCheck, TestResult};
use rstest::rstest;

fn serde_accepts(text: &str) -> bool {
    serde_json::from_str::<serde_json::Number>(text).is_ok()
}

fn scanner_accepts(text: &str) -> bool {
    parse_json_number(text.as_bytes()).is_ok_and(|n: ParsedNumber<'_>| n.lastmatch == text.len())
}

#[rstest]
#[case("0")]
#[case("-0")]
#[case("1")]
#[case("-12")]
#[case("1.5")]
#[case("0.000001")]
#[case("1e5")]
#[case("1E+5")]
#[case("1e-5")]
#[case("-0.0e+0")]
#[case("123456789012345678901234567890")]
#[case("01")]
#[case("-01")]
#[case("00")]
#[case(".5")]
#[case("-.5")]
#[case("1.")]
#[case("1.e5")]
#[case("1e")]
#[case("1e+")]
#[case("-")]
#[case("+1")]
#[case("0x10")]
#[case("1_000")]
fn agrees_with_serde_json(#[case] text: &str) {
    assert_eq!(scanner_accepts(text), serde_accepts(text), "{text:?}");
}

#[derive(Debug, Clone)]
struct JsonLike(String);

impl Arbitrary for JsonLike {
    fn arbitrary(g: &mut Gen) -> Self {
        const ALPHABET: &[u8] = b"0123456789001.eE+-";
        let len = 1 + usize::arbitrary(g) % 40;
        Self(
            (0..len)
                .map(|_| char::from(*g.choose(ALPHABET).unwrap()))
                .collect(),
        )
    }
}

/// Property: whatever `serde_json` reads as a number, the scanner reads in
/// full; without an exponent (where `serde_json` may report overflow) the
/// converse holds as well.
#[test]
fn agreement_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: JsonLike) -> TestResult {
        let text = text.0;
        let ours = scanner_accepts(&text);
        let theirs = serde_accepts(&text);
        if theirs && !ours {
            return TestResult::failed();
        }
        if ours && !theirs && !text.contains(['e', 'E']) {
            return TestResult::failed();
        }
        TestResult::passed()
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(JsonLike) -> TestResult);
}
