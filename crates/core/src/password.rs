//! Charset-pool password generation
//!
//! The random source is whatever the caller passes in. The strength label is
//! a length heuristic, not an entropy estimate.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Please select at least one character type")]
    EmptyCharset,
    #[error("Password length must be between 4 and 64, got {0}")]
    InvalidLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 12,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Weak => write!(f, "Weak"),
            Strength::Medium => write!(f, "Medium"),
            Strength::Strong => write!(f, "Strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: Strength,
}

/// Concatenate the enabled pools in a fixed order.
pub fn build_charset(options: &PasswordOptions) -> Vec<char> {
    [
        (options.lowercase, LOWERCASE),
        (options.uppercase, UPPERCASE),
        (options.numbers, NUMBERS),
        (options.symbols, SYMBOLS),
    ]
    .into_iter()
    .filter(|(enabled, _)| *enabled)
    .flat_map(|(_, pool)| pool.chars())
    .collect()
}

/// Sample the combined pool uniformly `options.length` times.
pub fn generate_password<R: Rng + ?Sized>(
    options: &PasswordOptions,
    rng: &mut R,
) -> Result<GeneratedPassword, PasswordError> {
    if !LENGTH_RANGE.contains(&options.length) {
        return Err(PasswordError::InvalidLength(options.length));
    }

    let charset = build_charset(options);
    if charset.is_empty() {
        return Err(PasswordError::EmptyCharset);
    }

    let password: String = (0..options.length)
        .map(|_| charset[rng.gen_range(0..charset.len())])
        .collect();
    let strength = strength(&password);

    Ok(GeneratedPassword { password, strength })
}

/// Weak below 8 characters, Medium below 12, Strong otherwise.
pub fn strength(password: &str) -> Strength {
    match password.chars().count() {
        0..=7 => Strength::Weak,
        8..=11 => Strength::Medium,
        _ => Strength::Strong,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_default_password_uses_default_pools() {
        let generated = generate_password(&PasswordOptions::default(), &mut rng()).unwrap();
        assert_eq!(generated.password.len(), 12);
        assert!(generated.password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(generated.strength, Strength::Strong);
    }

    #[test]
    fn test_numbers_only() {
        let options = PasswordOptions {
            length: 20,
            uppercase: false,
            lowercase: false,
            numbers: true,
            symbols: false,
        };
        let generated = generate_password(&options, &mut rng()).unwrap();
        assert!(generated.password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_symbols_only_draws_from_symbol_pool() {
        let options = PasswordOptions {
            length: 64,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: true,
        };
        let generated = generate_password(&options, &mut rng()).unwrap();
        assert!(generated.password.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn test_empty_charset_is_error() {
        let options = PasswordOptions {
            length: 12,
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
        };
        assert_eq!(
            generate_password(&options, &mut rng()).unwrap_err(),
            PasswordError::EmptyCharset
        );
    }

    #[test]
    fn test_length_out_of_range() {
        for length in [0, 3, 65] {
            let options = PasswordOptions {
                length,
                ..Default::default()
            };
            assert_eq!(
                generate_password(&options, &mut rng()).unwrap_err(),
                PasswordError::InvalidLength(length)
            );
        }
    }

    #[test]
    fn test_build_charset_order() {
        let options = PasswordOptions {
            symbols: true,
            ..Default::default()
        };
        let charset: String = build_charset(&options).into_iter().collect();
        assert_eq!(
            charset,
            format!("{LOWERCASE}{UPPERCASE}{NUMBERS}{SYMBOLS}")
        );
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(strength(""), Strength::Weak);
        assert_eq!(strength("1234567"), Strength::Weak);
        assert_eq!(strength("12345678"), Strength::Medium);
        assert_eq!(strength("12345678901"), Strength::Medium);
        assert_eq!(strength("123456789012"), Strength::Strong);
    }
}
