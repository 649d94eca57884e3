//! Percent encoding compatible with `encodeURIComponent` / `decodeURIComponent`

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("Please enter a URL to process")]
    EmptyInput,
    #[error("Failed to decode URL - invalid encoding: {0}")]
    InvalidEncoding(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlMode {
    #[default]
    Encode,
    Decode,
}

/// Characters `encodeURIComponent` leaves alone on top of `A-Z a-z 0-9 - _ . ~`.
const EXTRA_UNRESERVED: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%2A", "*"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
];

pub fn encode_component(input: &str) -> String {
    let mut encoded = urlencoding::encode(input).into_owned();
    for (escaped, raw) in EXTRA_UNRESERVED {
        encoded = encoded.replace(escaped, raw);
    }
    encoded
}

/// Decode percent escapes. A `%` not followed by two hex digits, or escapes
/// that do not form valid UTF-8, are errors.
pub fn decode_component(input: &str) -> Result<String, UrlError> {
    let bytes = input.as_bytes();
    for (idx, byte) in bytes.iter().enumerate() {
        if *byte == b'%' {
            let valid = bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(UrlError::InvalidEncoding(format!(
                    "malformed escape at byte {idx}"
                )));
            }
        }
    }

    urlencoding::decode(input)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| UrlError::InvalidEncoding(e.to_string()))
}

/// Encode or decode `input`. Blank input is rejected.
pub fn process_url(input: &str, mode: UrlMode) -> Result<String, UrlError> {
    if input.trim().is_empty() {
        return Err(UrlError::EmptyInput);
    }

    match mode {
        UrlMode::Encode => Ok(encode_component(input)),
        UrlMode::Decode => decode_component(input),
    }
}
