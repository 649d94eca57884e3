//! Version 4 UUIDs from a caller-supplied random source

use rand::Rng;
use std::ops::RangeInclusive;

const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Accepted batch sizes for [`generate_many`].
pub const COUNT_RANGE: RangeInclusive<usize> = 1..=50;

/// Fill the v4 template: `x` is any hex digit, `y` is one of `8`, `9`, `a`, `b`.
pub fn generate_v4<R: Rng + ?Sized>(rng: &mut R) -> String {
    TEMPLATE
        .chars()
        .map(|c| match c {
            'x' => hex_digit(rng.gen_range(0..16)),
            'y' => hex_digit((rng.gen_range(0..16) & 0x3) | 0x8),
            other => other,
        })
        .collect()
}

/// Generate `count` UUIDs, clamped to [`COUNT_RANGE`].
pub fn generate_many<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<String> {
    let count = count.clamp(*COUNT_RANGE.start(), *COUNT_RANGE.end());
    (0..count).map(|_| generate_v4(rng)).collect()
}

/// Check the hyphenated lowercase v4 layout, version nibble and variant nibble.
pub fn is_v4(value: &str) -> bool {
    if value.len() != TEMPLATE.len() {
        return false;
    }

    value.chars().zip(TEMPLATE.chars()).all(|(c, t)| match t {
        '-' | '4' => c == t,
        'y' => matches!(c, '8' | '9' | 'a' | 'b'),
        _ => matches!(c, '0'..='9' | 'a'..='f'),
    })
}

fn hex_digit(value: u32) -> char {
    char::from_digit(value, 16).unwrap_or('0')
}
