//! Word-at-a-time digit helpers.
//!
//! Eight ASCII bytes are handled as one little-endian `u64` so the fraction
//! scanner can test and convert them without a per-byte loop. Every helper is
//! a `const fn`; `u64::from_le_bytes`/`to_le_bytes` swap bytes on big-endian
//! targets, so const evaluation and runtime agree on every platform.

/// Whether `c` is an ASCII decimal digit.
#[inline]
#[must_use]
pub const fn is_integer(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Reads eight bytes as if they were a little-endian `u64`.
#[inline]
#[must_use]
pub const fn read_u64(chars: &[u8; 8]) -> u64 {
    u64::from_le_bytes(*chars)
}

/// Writes `val` as eight little-endian bytes.
#[inline]
pub const fn write_u64(chars: &mut [u8; 8], val: u64) {
    *chars = val.to_le_bytes();
}

/// Whether all eight bytes of `val` are ASCII digits.
///
/// Adding `0x46` pushes any byte above `b'9'` into the high bit, subtracting
/// `0x30` does the same for any byte below `b'0'`. Byte order does not matter.
#[inline]
#[must_use]
pub const fn is_made_of_eight_digits_fast(val: u64) -> bool {
    let above = val.wrapping_add(0x4646_4646_4646_4646);
    let below = val.wrapping_sub(0x3030_3030_3030_3030);
    (above | below) & 0x8080_8080_8080_8080 == 0
}

/// Converts eight ASCII digits, loaded little-endian, to their value.
///
/// Pairs of digits are combined first, then the two four-digit groups are
/// scaled and summed with two multiplications. The caller must have checked
/// the word with [`is_made_of_eight_digits_fast`].
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn parse_eight_digits_unrolled(val: u64) -> u32 {
    const MASK: u64 = 0x0000_00FF_0000_00FF;
    const MUL1: u64 = 0x000F_4240_0000_0064; // 100 + (1_000_000 << 32)
    const MUL2: u64 = 0x0000_2710_0000_0001; // 1 + (10_000 << 32)

    let mut val = val.wrapping_sub(0x3030_3030_3030_3030);
    val = val.wrapping_mul(10).wrapping_add(val >> 8);
    let lo = (val & MASK).wrapping_mul(MUL1);
    let hi = ((val >> 16) & MASK).wrapping_mul(MUL2);
    (lo.wrapping_add(hi) >> 32) as u32
}

/// Returns the next eight bytes of `chars` as a digit word, if they are all
/// digits.
#[inline]
pub(crate) fn eight_digits(chars: &[u8]) -> Option<u64> {
    let word = read_u64(chars.first_chunk::<8>()?);
    is_made_of_eight_digits_fast(word).then_some(word)
}
