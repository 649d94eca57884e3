//! JSON pretty printing and minification
//!
//! Object key order follows the input (`serde_json` is built with
//! `preserve_order`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("Invalid JSON: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    #[default]
    Pretty,
    Minified,
}

pub fn parse_json(input: &str) -> Result<Value, JsonError> {
    serde_json::from_str(input).map_err(|e| JsonError::Invalid(e.to_string()))
}

/// Re-serialize `input` with two-space indentation or no whitespace.
pub fn format_json(input: &str, style: JsonStyle) -> Result<String, JsonError> {
    let value = parse_json(input)?;
    let rendered = match style {
        JsonStyle::Pretty => serde_json::to_string_pretty(&value),
        JsonStyle::Minified => serde_json::to_string(&value),
    };
    rendered.map_err(|e| JsonError::Invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"name":"John Doe","age":30,"address":{"city":"New York"},"hobbies":["reading","coding"]}"#;

    #[test]
    fn test_pretty_uses_two_spaces_and_keeps_key_order() {
        let pretty = format_json(SAMPLE, JsonStyle::Pretty).unwrap();
        assert!(pretty.starts_with("{\n  \"name\": \"John Doe\",\n  \"age\": 30,"));
        assert!(pretty.contains("\n    \"city\": \"New York\"\n"));
    }

    #[test]
    fn test_minify_removes_whitespace() {
        let input = "{\n  \"a\" : [1, 2,\n 3],\n  \"b\": null\n}";
        assert_eq!(
            format_json(input, JsonStyle::Minified).unwrap(),
            r#"{"a":[1,2,3],"b":null}"#
        );
    }

    #[test]
    fn test_minify_of_pretty_restores_compact_input() {
        let pretty = format_json(SAMPLE, JsonStyle::Pretty).unwrap();
        assert_eq!(format_json(&pretty, JsonStyle::Minified).unwrap(), SAMPLE);
    }

    #[test]
    fn test_invalid_json() {
        let err = format_json("{\"a\": }", JsonStyle::Pretty).unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON: "));
        assert!(format_json("", JsonStyle::Minified).is_err());
    }
}
