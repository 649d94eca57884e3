//! Line list normalization and ordering

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    pub trim: bool,
    pub remove_empty: bool,
    pub remove_duplicates: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            trim: true,
            remove_empty: true,
            remove_duplicates: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListOperation {
    SortAscending,
    SortDescending,
    Shuffle,
    Reverse,
}

/// Split `input` into lines and apply the normalization steps in order:
/// trim, drop empty lines, drop duplicates (first occurrence wins).
pub fn normalize_items(input: &str, options: &ListOptions) -> Vec<String> {
    let mut items: Vec<String> = input
        .split('\n')
        .map(|line| {
            if options.trim {
                line.trim().to_string()
            } else {
                line.to_string()
            }
        })
        .collect();

    if options.remove_empty {
        items.retain(|item| !item.is_empty());
    }

    if options.remove_duplicates {
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(item.clone()));
    }

    items
}

/// Comparison key that ignores case and diacritics.
fn base_key(item: &str) -> String {
    item.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two items by their base letters only.
pub fn compare_base(a: &str, b: &str) -> Ordering {
    base_key(a).cmp(&base_key(b))
}

/// Stable ascending sort by base letters.
pub fn sort_ascending(items: &mut [String]) {
    items.sort_by_cached_key(|item| base_key(item));
}

/// Stable descending sort by base letters.
pub fn sort_descending(items: &mut [String]) {
    items.sort_by(|a, b| compare_base(b, a));
}

/// Run the normalization pipeline, then apply `operation`.
pub fn process_list<R: Rng + ?Sized>(
    input: &str,
    options: &ListOptions,
    operation: ListOperation,
    rng: &mut R,
) -> Vec<String> {
    let mut items = normalize_items(input, options);

    match operation {
        ListOperation::SortAscending => sort_ascending(&mut items),
        ListOperation::SortDescending => sort_descending(&mut items),
        ListOperation::Shuffle => items.shuffle(rng),
        ListOperation::Reverse => items.reverse(),
    }

    items
}
