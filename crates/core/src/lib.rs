//! Core library for textkit
//!
//! This crate implements the **Functional Core** of the textkit application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The textkit project uses a two-crate architecture:
//!
//! - **`textkit_core`** (this crate): Pure transformation functions with zero I/O
//! - **`textkit`**: Input acquisition, rendering, clipboard and files (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no clock reads, no global RNG
//! - **Explicit randomness**: Generators take `&mut impl Rng` so tests can seed them
//! - **Explicit options**: Every tool receives a named options struct, never a string map
//!
//! # Module Organization
//!
//! Text transformations:
//!
//! - [`case`]: Case conversion (upper, lower, title, camel, pascal, snake, kebab, sentence)
//! - [`find_replace`]: Pattern compilation, match counting, highlighting and replacement
//! - [`diff`]: Positional and LCS line diffs
//! - [`list`]: Line list normalization, sorting, shuffling and reversal
//! - [`number_words`]: Numbers spelled out in English words
//! - [`reverse`]: Character and word reversal
//! - [`stats`]: Word, sentence and paragraph statistics
//!
//! Generators:
//!
//! - [`hash`]: Non-cryptographic string hashes plus MD5/SHA-256 checksums
//! - [`uuid`]: Version 4 UUIDs
//! - [`password`]: Charset pool passwords and a strength heuristic
//! - [`username`]: Adjective + noun usernames
//! - [`lorem`]: Lorem ipsum paragraphs
//! - [`qr`]: QR codes for the terminal and as PNG, SVG or JPEG
//!
//! Converters:
//!
//! - [`url`]: Percent encoding compatible with `encodeURIComponent`
//! - [`timestamp`]: Unix timestamps to and from ISO-8601 dates
//! - [`json`]: JSON pretty printing and minification
//! - [`age`]: Age in years, months and days
//! - [`color`]: Hex colors to RGB and HSL
//!
//! [`catalog`] lists every tool by its command name.
//!
//! # Example Usage
//!
//! ```rust
//! use textkit_core::case::{convert_case, CaseStyle};
//! use textkit_core::number_words::convert_number;
//!
//! assert_eq!(convert_case("hello world", CaseStyle::Snake), "hello_world");
//! assert_eq!(convert_number("1,000").unwrap(), "one thousand");
//! ```

pub mod age;
pub mod case;
pub mod catalog;
pub mod color;
pub mod diff;
pub mod find_replace;
pub mod hash;
pub mod json;
pub mod list;
pub mod lorem;
pub mod number_words;
pub mod password;
pub mod qr;
pub mod reverse;
pub mod stats;
pub mod timestamp;
pub mod url;
pub mod username;
pub mod uuid;
