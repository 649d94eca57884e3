//! Lorem ipsum placeholder text

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "at", "vero", "eos",
    "accusamus", "accusantium", "doloremque", "laudantium", "totam", "rem", "aperiam", "eaque",
    "ipsa", "quae", "ab", "illo", "inventore", "veritatis", "et", "quasi", "architecto",
    "beatae", "vitae", "dicta", "sunt", "explicabo",
];

const CLASSIC_OPENING: [&str; 5] = ["lorem", "ipsum", "dolor", "sit", "amet"];

pub const PARAGRAPH_RANGE: RangeInclusive<usize> = 1..=10;
pub const WORD_RANGE: RangeInclusive<usize> = 10..=200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoremOptions {
    pub paragraphs: usize,
    pub words_per_paragraph: usize,
    pub start_with_lorem: bool,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            paragraphs: 3,
            words_per_paragraph: 50,
            start_with_lorem: true,
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Generate paragraphs separated by a blank line. Counts outside
/// [`PARAGRAPH_RANGE`] / [`WORD_RANGE`] are clamped.
pub fn generate_lorem<R: Rng + ?Sized>(options: &LoremOptions, rng: &mut R) -> String {
    let paragraphs = options
        .paragraphs
        .clamp(*PARAGRAPH_RANGE.start(), *PARAGRAPH_RANGE.end());
    let words_per_paragraph = options
        .words_per_paragraph
        .clamp(*WORD_RANGE.start(), *WORD_RANGE.end());

    (0..paragraphs)
        .map(|index| {
            let mut words: Vec<&str> = if index == 0 && options.start_with_lorem {
                CLASSIC_OPENING.to_vec()
            } else {
                Vec::with_capacity(words_per_paragraph)
            };

            while words.len() < words_per_paragraph {
                if let Some(word) = WORDS.choose(rng) {
                    words.push(*word);
                }
            }

            let mut paragraph = capitalize(words[0]);
            for word in &words[1..] {
                paragraph.push(' ');
                paragraph.push_str(word);
            }
            paragraph.push('.');
            paragraph
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word_counts(text: &str) -> Vec<usize> {
        text.split("\n\n")
            .map(|p| p.split_whitespace().count())
            .collect()
    }

    #[test]
    fn test_default_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let text = generate_lorem(&LoremOptions::default(), &mut rng);
        assert_eq!(word_counts(&text), vec![50, 50, 50]);
        assert!(text.starts_with("Lorem ipsum dolor sit amet "));
    }

    #[test]
    fn test_every_paragraph_is_a_sentence() {
        let mut rng = StdRng::seed_from_u64(2);
        let options = LoremOptions {
            paragraphs: 4,
            words_per_paragraph: 12,
            start_with_lorem: false,
        };
        let text = generate_lorem(&options, &mut rng);
        for paragraph in text.split("\n\n") {
            assert!(paragraph.ends_with('.'));
            assert!(paragraph.chars().next().unwrap().is_uppercase());
            for word in paragraph.trim_end_matches('.').split(' ') {
                assert!(WORDS.contains(&word.to_lowercase().as_str()), "{word}");
            }
        }
    }

    #[test]
    fn test_counts_are_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        let options = LoremOptions {
            paragraphs: 0,
            words_per_paragraph: 500,
            start_with_lorem: true,
        };
        assert_eq!(word_counts(&generate_lorem(&options, &mut rng)), vec![200]);
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let options = LoremOptions::default();
        let a = generate_lorem(&options, &mut StdRng::seed_from_u64(9));
        let b = generate_lorem(&options, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
