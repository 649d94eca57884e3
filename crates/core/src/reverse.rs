//! Text reversal

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReverseError {
    #[error("Please enter text to reverse")]
    EmptyInput,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReverseMode {
    #[default]
    Characters,
    Words,
}

/// Reverse `input` by characters, or by words split on single spaces.
pub fn reverse_text(input: &str, mode: ReverseMode) -> Result<String, ReverseError> {
    if input.trim().is_empty() {
        return Err(ReverseError::EmptyInput);
    }

    Ok(match mode {
        ReverseMode::Characters => input.chars().rev().collect(),
        ReverseMode::Words => input.split(' ').rev().collect::<Vec<_>>().join(" "),
    })
}
