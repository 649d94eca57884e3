//! Case conversion
//!
//! Word detection follows the regex `\w` / `\s` split: a word character is
//! alphanumeric or `_`, and camel/pascal treat every word start and every
//! existing uppercase letter as a capital.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl CaseStyle {
    /// Every style, in display order.
    pub const ALL: [CaseStyle; 8] = [
        CaseStyle::Upper,
        CaseStyle::Lower,
        CaseStyle::Title,
        CaseStyle::Sentence,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
    ];

    /// Label written in the style itself.
    pub fn label(&self) -> &'static str {
        match self {
            CaseStyle::Upper => "UPPERCASE",
            CaseStyle::Lower => "lowercase",
            CaseStyle::Title => "Title Case",
            CaseStyle::Sentence => "Sentence case",
            CaseStyle::Camel => "camelCase",
            CaseStyle::Pascal => "PascalCase",
            CaseStyle::Snake => "snake_case",
            CaseStyle::Kebab => "kebab-case",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseConversion {
    pub style: CaseStyle,
    pub label: String,
    pub value: String,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convert `text` to the given case style.
pub fn convert_case(text: &str, style: CaseStyle) -> String {
    match style {
        CaseStyle::Upper => text.to_uppercase(),
        CaseStyle::Lower => text.to_lowercase(),
        CaseStyle::Title => title_case(text),
        CaseStyle::Sentence => sentence_case(text),
        CaseStyle::Camel => strip_whitespace(&capitalize_word_starts(text, true)),
        CaseStyle::Pascal => strip_whitespace(&capitalize_word_starts(text, false)),
        CaseStyle::Snake => join_whitespace_runs(&text.to_lowercase(), '_'),
        CaseStyle::Kebab => join_whitespace_runs(&text.to_lowercase(), '-'),
    }
}

/// Convert `text` to every style at once.
pub fn convert_all(text: &str) -> Vec<CaseConversion> {
    CaseStyle::ALL
        .iter()
        .map(|style| CaseConversion {
            style: *style,
            label: style.label().to_string(),
            value: convert_case(text, *style),
        })
        .collect()
}

/// Uppercase the first character of every token that starts at a word
/// character and lowercase the rest of the token. Tokens end at whitespace.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_token = false;

    for c in text.chars() {
        if c.is_whitespace() {
            in_token = false;
            result.push(c);
        } else if in_token {
            result.extend(c.to_lowercase());
        } else if is_word_char(c) {
            in_token = true;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Capitalize word starts and keep existing capitals. With `lower_first`
/// the very first character is lowercased instead.
fn capitalize_word_starts(text: &str, lower_first: bool) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev: Option<char> = None;

    for (idx, c) in text.chars().enumerate() {
        let word_start = is_word_char(c) && !prev.is_some_and(is_word_char);

        if idx == 0 && is_word_char(c) {
            if lower_first {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
        } else if word_start || c.is_uppercase() {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }

        prev = Some(c);
    }

    result
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

fn join_whitespace_runs(text: &str, separator: char) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                result.push(separator);
                in_run = true;
            }
        } else {
            result.push(c);
            in_run = false;
        }
    }

    result
}
