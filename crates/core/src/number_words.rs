//! Numbers spelled out in English words
//!
//! Integers are split into base-1000 chunks; each non-zero chunk is spelled
//! out and followed by its scale word. Fractional digits are read one by one
//! after "point".

use thiserror::Error;

/// Largest magnitude accepted by [`convert_number`].
pub const MAX_MAGNITUDE: u64 = 999_999_999_999_999;

const ONES: [&str; 20] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumberWordsError {
    #[error("Please enter a valid number")]
    InvalidNumber,
    #[error("Number too large (maximum: 999,999,999,999,999)")]
    TooLarge,
    #[error("Number too small (minimum: -999,999,999,999,999)")]
    TooSmall,
}

/// Spell out a number in the range 0..=999.
fn convert_hundreds(mut num: u64) -> String {
    let mut result = String::new();

    if num >= 100 {
        result.push_str(ONES[(num / 100) as usize]);
        result.push_str(" hundred");
        num %= 100;
        if num > 0 {
            result.push(' ');
        }
    }

    if num >= 20 {
        result.push_str(TENS[(num / 10) as usize]);
        num %= 10;
        if num > 0 {
            result.push('-');
            result.push_str(ONES[num as usize]);
        }
    } else if num > 0 {
        result.push_str(ONES[num as usize]);
    }

    result
}

fn unsigned_to_words(mut num: u64) -> String {
    if num == 0 {
        return "zero".to_string();
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut scale = 0;

    while num > 0 && scale < SCALES.len() {
        let chunk = num % 1000;
        if chunk != 0 {
            let words = convert_hundreds(chunk);
            if scale > 0 {
                chunks.push(format!("{words} {}", SCALES[scale]));
            } else {
                chunks.push(words);
            }
        }
        num /= 1000;
        scale += 1;
    }

    chunks.reverse();
    chunks.join(" ")
}

/// Spell out an integer. Magnitudes above [`MAX_MAGNITUDE`] are rejected.
pub fn number_to_words(num: i64) -> Result<String, NumberWordsError> {
    let magnitude = num.unsigned_abs();
    if magnitude > MAX_MAGNITUDE {
        return Err(if num < 0 {
            NumberWordsError::TooSmall
        } else {
            NumberWordsError::TooLarge
        });
    }

    if num < 0 {
        Ok(format!("negative {}", unsigned_to_words(magnitude)))
    } else {
        Ok(unsigned_to_words(magnitude))
    }
}

/// Parse a user-entered number (commas allowed) and spell it out.
pub fn convert_number(input: &str) -> Result<String, NumberWordsError> {
    let clean = input.replace(',', "");
    let clean = clean.trim();

    let value: f64 = clean.parse().map_err(|_| NumberWordsError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(NumberWordsError::InvalidNumber);
    }
    if value > MAX_MAGNITUDE as f64 {
        return Err(NumberWordsError::TooLarge);
    }
    if value < -(MAX_MAGNITUDE as f64) {
        return Err(NumberWordsError::TooSmall);
    }

    let integer = value.trunc();
    let integer_words = unsigned_to_words(integer.abs() as u64);
    let sign = if value < 0.0 { "negative " } else { "" };

    if value.fract() == 0.0 {
        return Ok(format!("{sign}{integer_words}"));
    }

    let fraction_words = fraction_digits(clean, value)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| DIGITS[d as usize])
        .collect::<Vec<_>>()
        .join(" ");

    Ok(format!("{sign}{integer_words} point {fraction_words}"))
}

/// Fractional digits as typed when the input is plain decimal notation,
/// otherwise as rendered from the parsed value.
fn fraction_digits(clean: &str, value: f64) -> String {
    let plain = clean
        .trim_start_matches(['-', '+'])
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.');

    if plain {
        if let Some((_, fraction)) = clean.split_once('.') {
            return fraction.to_string();
        }
    }

    let rendered = value.abs().to_string();
    rendered
        .split_once('.')
        .map(|(_, fraction)| fraction.to_string())
        .unwrap_or_default()
}

/// Insert `,` thousands separators into the integer part of a numeric string.
/// Characters other than digits, `.` and `-` are dropped first.
pub fn group_thousands(input: &str) -> String {
    let clean: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let (integer, fraction) = match clean.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (clean.as_str(), None),
    };

    let (sign, digits) = match integer.find(|c: char| c.is_ascii_digit()) {
        Some(pos) => integer.split_at(pos),
        None => (integer, ""),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 && c.is_ascii_digit() {
            grouped.push(',');
        }
        grouped.push(c);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // number_to_words tests
    // ============================================================================

    #[test]
    fn test_zero() {
        assert_eq!(number_to_words(0).unwrap(), "zero");
    }

    #[test]
    fn test_hundreds_with_hyphenated_tens() {
        assert_eq!(number_to_words(123).unwrap(), "one hundred twenty-three");
    }

    #[test]
    fn test_teens_are_irregular() {
        assert_eq!(number_to_words(13).unwrap(), "thirteen");
        assert_eq!(number_to_words(519).unwrap(), "five hundred nineteen");
    }

    #[test]
    fn test_round_tens_have_no_hyphen() {
        assert_eq!(number_to_words(40).unwrap(), "forty");
        assert_eq!(number_to_words(900).unwrap(), "nine hundred");
    }

    #[test]
    fn test_thousand() {
        assert_eq!(number_to_words(1000).unwrap(), "one thousand");
    }

    #[test]
    fn test_zero_chunks_are_skipped() {
        assert_eq!(number_to_words(1_000_001).unwrap(), "one million one");
        assert_eq!(
            number_to_words(2_000_300_000).unwrap(),
            "two billion three hundred thousand"
        );
    }

    #[test]
    fn test_negative() {
        assert_eq!(number_to_words(-100).unwrap(), "negative one hundred");
    }

    #[test]
    fn test_maximum() {
        assert_eq!(
            number_to_words(999_999_999_999_999).unwrap(),
            "nine hundred ninety-nine trillion nine hundred ninety-nine billion \
             nine hundred ninety-nine million nine hundred ninety-nine thousand \
             nine hundred ninety-nine"
        );
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        assert_eq!(
            number_to_words(1_000_000_000_000_000).unwrap_err(),
            NumberWordsError::TooLarge
        );
        assert_eq!(
            number_to_words(-1_000_000_000_000_000).unwrap_err(),
            NumberWordsError::TooSmall
        );
        assert_eq!(number_to_words(i64::MIN).unwrap_err(), NumberWordsError::TooSmall);
    }

    // ============================================================================
    // convert_number tests
    // ============================================================================

    #[test]
    fn test_convert_with_separators() {
        assert_eq!(
            convert_number(" 12,345 ").unwrap(),
            "twelve thousand three hundred forty-five"
        );
    }

    #[test]
    fn test_convert_decimal_reads_digits() {
        assert_eq!(convert_number("3.14").unwrap(), "three point one four");
        assert_eq!(convert_number("1.05").unwrap(), "one point zero five");
    }

    #[test]
    fn test_convert_negative_decimal_keeps_sign() {
        assert_eq!(convert_number("-0.5").unwrap(), "negative zero point five");
    }

    #[test]
    fn test_convert_whole_float_is_integer() {
        assert_eq!(convert_number("42.0").unwrap(), "forty-two");
    }

    #[test]
    fn test_convert_exponent_notation() {
        assert_eq!(convert_number("1e3").unwrap(), "one thousand");
        assert_eq!(convert_number("2.5e-1").unwrap(), "zero point two five");
    }

    #[test]
    fn test_convert_invalid() {
        assert_eq!(convert_number("abc").unwrap_err(), NumberWordsError::InvalidNumber);
        assert_eq!(convert_number("").unwrap_err(), NumberWordsError::InvalidNumber);
        assert_eq!(convert_number("NaN").unwrap_err(), NumberWordsError::InvalidNumber);
        assert_eq!(convert_number("inf").unwrap_err(), NumberWordsError::InvalidNumber);
    }

    #[test]
    fn test_convert_range() {
        assert_eq!(
            convert_number("1,000,000,000,000,000").unwrap_err(),
            NumberWordsError::TooLarge
        );
        assert_eq!(
            convert_number("-1,000,000,000,000,000").unwrap_err(),
            NumberWordsError::TooSmall
        );
        assert!(convert_number("999,999,999,999,999").is_ok());
    }

    // ============================================================================
    // group_thousands tests
    // ============================================================================

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("-1234.5678"), "-1,234.5678");
        assert_eq!(group_thousands("1,2,3,4"), "1,234");
    }
}
