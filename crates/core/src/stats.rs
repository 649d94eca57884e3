//! Word counter statistics

use serde::Serialize;

/// Average reading speed used for the reading time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub paragraphs: usize,
    pub sentences: usize,
    pub reading_time_minutes: usize,
}

/// Compute every statistic for `text`. Characters are Unicode scalar values.
pub fn text_stats(text: &str) -> TextStats {
    let blank = text.trim().is_empty();
    let words = if blank {
        0
    } else {
        text.split_whitespace().count()
    };

    TextStats {
        words,
        characters: text.chars().count(),
        characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
        paragraphs: if blank { 0 } else { count_paragraphs(text) },
        sentences: if blank { 0 } else { count_sentences(text) },
        reading_time_minutes: words.div_ceil(WORDS_PER_MINUTE).max(1),
    }
}

/// Groups of consecutive non-blank lines.
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;

    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            in_paragraph = true;
            count += 1;
        }
    }

    count
}

/// Non-blank pieces between runs of `.`, `!` and `?`.
fn count_sentences(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|piece| !piece.trim().is_empty())
        .count()
}

/// The copyable plain-text report.
pub fn format_report(stats: &TextStats) -> String {
    let plural = if stats.reading_time_minutes == 1 { "" } else { "s" };
    format!(
        "Text Statistics:\n\
         Words: {}\n\
         Characters: {}\n\
         Characters (no spaces): {}\n\
         Paragraphs: {}\n\
         Sentences: {}\n\
         Reading time: {} minute{plural}",
        stats.words,
        stats.characters,
        stats.characters_no_spaces,
        stats.paragraphs,
        stats.sentences,
        stats.reading_time_minutes,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        let stats = text_stats("");
        assert_eq!(
            stats,
            TextStats {
                reading_time_minutes: 1,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_whitespace_only_counts_characters() {
        let stats = text_stats("  \n ");
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 4);
        assert_eq!(stats.characters_no_spaces, 0);
        assert_eq!(stats.paragraphs, 0);
        assert_eq!(stats.sentences, 0);
    }

    #[test]
    fn test_basic_counts() {
        let text = "Hello world. How are you?\n\nSecond paragraph here!";
        let stats = text_stats(text);
        assert_eq!(stats.words, 8);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.sentences, 3);
        assert_eq!(stats.characters, text.chars().count());
        assert_eq!(stats.characters_no_spaces, 41);
    }

    #[test]
    fn test_paragraph_separator_may_contain_spaces() {
        assert_eq!(text_stats("one\n   \ntwo\nstill two").paragraphs, 2);
    }

    #[test]
    fn test_ellipsis_counts_once() {
        assert_eq!(text_stats("Wait... what?!").sentences, 2);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = "word ".repeat(201);
        assert_eq!(text_stats(&text).reading_time_minutes, 2);
        let text = "word ".repeat(200);
        assert_eq!(text_stats(&text).reading_time_minutes, 1);
    }

    #[test]
    fn test_report_pluralizes_minutes() {
        let report = format_report(&text_stats("a b c"));
        assert!(report.starts_with("Text Statistics:\nWords: 3\n"));
        assert!(report.ends_with("Reading time: 1 minute"));

        let report = format_report(&text_stats(&"w ".repeat(401)));
        assert!(report.ends_with("Reading time: 3 minutes"));
    }
}
