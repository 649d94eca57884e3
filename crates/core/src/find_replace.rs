//! Find and replace over free text
//!
//! All pattern construction goes through [`compile_pattern`], which returns a
//! typed error instead of swallowing malformed regexes. [`find_replace`] is the
//! degrading entry point: it never fails, but records the error so callers can
//! show an "invalid pattern" state.

use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FindReplaceError {
    #[error("Find pattern is empty")]
    EmptyPattern,
    #[error("Invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindOptions {
    pub case_sensitive: bool,
    pub whole_word: bool,
    pub use_regex: bool,
}

/// Strings wrapped around every match by [`highlight_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindReplaceOutcome {
    pub matches: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Build the search regex for `find` under the given options.
pub fn compile_pattern(find: &str, options: &FindOptions) -> Result<Regex, FindReplaceError> {
    if find.is_empty() {
        return Err(FindReplaceError::EmptyPattern);
    }

    let mut pattern = if options.use_regex {
        find.to_string()
    } else {
        regex::escape(find)
    };

    if options.whole_word {
        pattern = format!(r"\b(?:{pattern})\b");
    }

    RegexBuilder::new(&pattern)
        .case_insensitive(!options.case_sensitive)
        .build()
        .map_err(|e| FindReplaceError::InvalidPattern {
            pattern: find.to_string(),
            message: e.to_string(),
        })
}

/// Number of non-overlapping matches of `find` in `text`.
pub fn count_matches(
    text: &str,
    find: &str,
    options: &FindOptions,
) -> Result<usize, FindReplaceError> {
    let regex = compile_pattern(find, options)?;
    Ok(regex.find_iter(text).count())
}

/// Byte spans of every match, in order.
pub fn find_matches(
    text: &str,
    find: &str,
    options: &FindOptions,
) -> Result<Vec<MatchSpan>, FindReplaceError> {
    let regex = compile_pattern(find, options)?;
    Ok(regex
        .find_iter(text)
        .map(|m| MatchSpan {
            start: m.start(),
            end: m.end(),
            text: m.as_str().to_string(),
        })
        .collect())
}

/// Wrap every match of `find` in `marker`.
pub fn highlight_matches(
    text: &str,
    find: &str,
    options: &FindOptions,
    marker: &Marker,
) -> Result<String, FindReplaceError> {
    let regex = compile_pattern(find, options)?;
    let highlighted = regex.replace_all(text, |caps: &regex::Captures| {
        format!("{}{}{}", marker.open, &caps[0], marker.close)
    });
    Ok(highlighted.into_owned())
}

/// Replace every match of `find` with `replacement`.
///
/// In regex mode the replacement may reference groups (`$1`, `${name}`) and
/// the whole match (`$&`). In literal mode it is inserted verbatim.
pub fn replace_all(
    text: &str,
    find: &str,
    replacement: &str,
    options: &FindOptions,
) -> Result<String, FindReplaceError> {
    let regex = compile_pattern(find, options)?;
    Ok(replace_with(&regex, text, replacement, options.use_regex))
}

fn replace_with(regex: &Regex, text: &str, replacement: &str, expand: bool) -> String {
    if expand {
        let expanded = translate_replacement(replacement);
        regex.replace_all(text, expanded.as_str()).into_owned()
    } else {
        regex.replace_all(text, NoExpand(replacement)).into_owned()
    }
}

/// Count and replace in one pass, degrading to the original text and zero
/// matches when the pattern cannot be compiled.
pub fn find_replace(
    text: &str,
    find: &str,
    replacement: &str,
    options: &FindOptions,
) -> FindReplaceOutcome {
    if find.is_empty() || text.is_empty() {
        return FindReplaceOutcome {
            matches: 0,
            text: text.to_string(),
            error: None,
        };
    }

    match compile_pattern(find, options) {
        Ok(regex) => FindReplaceOutcome {
            matches: regex.find_iter(text).count(),
            text: replace_with(&regex, text, replacement, options.use_regex),
            error: None,
        },
        Err(e) => FindReplaceOutcome {
            matches: 0,
            text: text.to_string(),
            error: Some(e.to_string()),
        },
    }
}

/// Rewrite `$&` (whole match) into the `${0}` form understood by `regex`.
/// `$$` stays an escaped dollar.
fn translate_replacement(replacement: &str) -> String {
    let mut result = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                result.push_str("$$");
            }
            Some('&') => {
                chars.next();
                result.push_str("${0}");
            }
            _ => result.push('$'),
        }
    }

    result
}
