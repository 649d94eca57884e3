//! Adjective + noun username generator

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const ADJECTIVES: [&str; 10] = [
    "Cool", "Swift", "Bright", "Bold", "Quick", "Smart", "Epic", "Wild", "Fast", "Dark",
];

const NOUNS: [&str; 10] = [
    "Tiger", "Wolf", "Eagle", "Dragon", "Phoenix", "Shadow", "Storm", "Flame", "Ninja", "Knight",
];

const SEPARATORS: [char; 2] = ['_', '-'];

pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=20;

/// Names produced per call.
pub const BATCH_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameOptions {
    pub max_length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for UsernameOptions {
    fn default() -> Self {
        Self {
            max_length: 8,
            include_numbers: true,
            include_symbols: false,
        }
    }
}

fn generate_one<R: Rng + ?Sized>(
    options: &UsernameOptions,
    max_length: usize,
    rng: &mut R,
) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Cool");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Tiger");

    let mut name = format!("{adjective}{noun}");

    if options.include_numbers {
        let digits = rng.gen_range(1..=3);
        for _ in 0..digits {
            name.push(char::from(b'0' + rng.gen_range(0..10u8)));
        }
    }

    if options.include_symbols && rng.gen_bool(0.5) {
        if let Some(separator) = SEPARATORS.choose(rng) {
            name.push(*separator);
        }
    }

    name.chars().take(max_length).collect()
}

/// Generate [`BATCH_SIZE`] names, each truncated to `max_length` (clamped to
/// [`LENGTH_RANGE`]).
pub fn generate_usernames<R: Rng + ?Sized>(
    options: &UsernameOptions,
    rng: &mut R,
) -> Vec<String> {
    let max_length = options
        .max_length
        .clamp(*LENGTH_RANGE.start(), *LENGTH_RANGE.end());
    (0..BATCH_SIZE)
        .map(|_| generate_one(options, max_length, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_batch_respects_max_length() {
        let mut rng = StdRng::seed_from_u64(5);
        let names = generate_usernames(&UsernameOptions::default(), &mut rng);
        assert_eq!(names.len(), BATCH_SIZE);
        assert!(names.iter().all(|n| n.chars().count() <= 8));
    }

    #[test]
    fn test_names_start_with_an_adjective() {
        let mut rng = StdRng::seed_from_u64(6);
        let options = UsernameOptions {
            max_length: 20,
            include_numbers: false,
            include_symbols: false,
        };
        for name in generate_usernames(&options, &mut rng) {
            assert!(ADJECTIVES.iter().any(|a| name.starts_with(a)), "{name}");
            assert!(NOUNS.iter().any(|n| name.ends_with(n)), "{name}");
        }
    }

    #[test]
    fn test_numbers_append_one_to_three_digits() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = UsernameOptions {
            max_length: 20,
            include_numbers: true,
            include_symbols: false,
        };
        for name in generate_usernames(&options, &mut rng) {
            let digits = name.chars().rev().take_while(char::is_ascii_digit).count();
            assert!((1..=3).contains(&digits), "{name}");
        }
    }

    #[test]
    fn test_symbols_only_from_separator_set() {
        let mut rng = StdRng::seed_from_u64(8);
        let options = UsernameOptions {
            max_length: 20,
            include_numbers: false,
            include_symbols: true,
        };
        for name in generate_usernames(&options, &mut rng) {
            assert!(name
                .chars()
                .all(|c| c.is_ascii_alphabetic() || SEPARATORS.contains(&c)));
        }
    }

    #[test]
    fn test_max_length_is_clamped() {
        let mut rng = StdRng::seed_from_u64(9);
        let options = UsernameOptions {
            max_length: 1,
            ..UsernameOptions::default()
        };
        let names = generate_usernames(&options, &mut rng);
        assert!(names.iter().all(|n| n.chars().count() == 4));
    }
}
