//! Line diffs between two texts
//!
//! [`DiffAlgorithm::Positional`] compares line `i` of each side and nothing
//! else. An inserted or deleted line therefore shifts every later line out of
//! alignment and shows up as a rewrite of the rest of the text. That is the
//! default behavior. [`DiffAlgorithm::Lcs`] aligns on the longest common
//! subsequence instead and is opt-in.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Positional,
    Lcs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Unchanged,
    Removed,
    Added,
}

/// One diff record. `line` is 1-based. Positional diffs share the index
/// between both sides; LCS diffs use the left line number for unchanged and
/// removed records and the right line number for added records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub line: usize,
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffSummary {
    pub fn from_lines(lines: &[DiffLine]) -> Self {
        lines.iter().fold(Self::default(), |mut summary, line| {
            match line.kind {
                DiffKind::Unchanged => summary.unchanged += 1,
                DiffKind::Added => summary.added += 1,
                DiffKind::Removed => summary.removed += 1,
            }
            summary
        })
    }

    pub fn is_identical(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiffOutput {
    pub algorithm: DiffAlgorithm,
    pub lines: Vec<DiffLine>,
    pub summary: DiffSummary,
}

/// Diff `left` against `right` with the chosen algorithm.
pub fn diff_texts(left: &str, right: &str, algorithm: DiffAlgorithm) -> DiffOutput {
    let lines = match algorithm {
        DiffAlgorithm::Positional => positional_diff(left, right),
        DiffAlgorithm::Lcs => lcs_diff(left, right),
    };
    let summary = DiffSummary::from_lines(&lines);

    DiffOutput {
        algorithm,
        lines,
        summary,
    }
}

/// Index-aligned diff. Equal lines produce one unchanged record; different
/// lines produce the removed left line followed by the added right line.
/// Empty and missing lines count as absent and never produce a record.
pub fn positional_diff(left: &str, right: &str) -> Vec<DiffLine> {
    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    let max_len = left_lines.len().max(right_lines.len());
    let mut result = Vec::with_capacity(max_len);

    for i in 0..max_len {
        let line = i + 1;
        let l = left_lines.get(i).copied().unwrap_or_default();
        let r = right_lines.get(i).copied().unwrap_or_default();

        if l == r {
            if !l.is_empty() {
                result.push(record(DiffKind::Unchanged, line, l));
            }
            continue;
        }
        if !l.is_empty() {
            result.push(record(DiffKind::Removed, line, l));
        }
        if !r.is_empty() {
            result.push(record(DiffKind::Added, line, r));
        }
    }

    result
}

/// Diff aligned on the longest common subsequence of lines. Within a changed
/// region removals come before additions.
pub fn lcs_diff(left: &str, right: &str) -> Vec<DiffLine> {
    let a: Vec<&str> = left.split('\n').collect();
    let b: Vec<&str> = right.split('\n').collect();
    let (n, m) = (a.len(), b.len());

    // table[i][j] = LCS length of a[i..] and b[j..]
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut result = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);

    while i < n && j < m {
        if a[i] == b[j] {
            result.push(record(DiffKind::Unchanged, i + 1, a[i]));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            result.push(record(DiffKind::Removed, i + 1, a[i]));
            i += 1;
        } else {
            result.push(record(DiffKind::Added, j + 1, b[j]));
            j += 1;
        }
    }
    for (offset, value) in a[i..].iter().enumerate() {
        result.push(record(DiffKind::Removed, i + offset + 1, value));
    }
    for (offset, value) in b[j..].iter().enumerate() {
        result.push(record(DiffKind::Added, j + offset + 1, value));
    }

    result
}

fn record(kind: DiffKind, line: usize, value: &str) -> DiffLine {
    DiffLine {
        kind,
        line,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(lines: &[DiffLine]) -> Vec<DiffKind> {
        lines.iter().map(|l| l.kind).collect()
    }

    // ============================================================================
    // positional_diff tests
    // ============================================================================

    #[test]
    fn test_positional_identical_texts() {
        let text = "one\ntwo\nthree";
        let lines = positional_diff(text, text);
        assert_eq!(lines.len(), 3);
        assert!(DiffSummary::from_lines(&lines).is_identical());
    }

    #[test]
    fn test_positional_changed_second_line() {
        let lines = positional_diff("a\nb", "a\nc");
        assert_eq!(
            lines,
            vec![
                record(DiffKind::Unchanged, 1, "a"),
                record(DiffKind::Removed, 2, "b"),
                record(DiffKind::Added, 2, "c"),
            ]
        );
    }

    #[test]
    fn test_positional_right_longer() {
        let lines = positional_diff("a", "a\nb");
        assert_eq!(
            lines,
            vec![record(DiffKind::Unchanged, 1, "a"), record(DiffKind::Added, 2, "b")]
        );
    }

    #[test]
    fn test_positional_left_longer() {
        let lines = positional_diff("a\nb", "a");
        assert_eq!(kinds(&lines), vec![DiffKind::Unchanged, DiffKind::Removed]);
    }

    #[test]
    fn test_positional_insertion_cascades() {
        // Inserting one line at the top misaligns everything after it.
        let lines = positional_diff("a\nb", "x\na\nb");
        let summary = DiffSummary::from_lines(&lines);
        assert_eq!(summary.unchanged, 0);
        assert_eq!(summary.removed, 2);
        assert_eq!(summary.added, 3);
    }

    #[test]
    fn test_positional_empty_texts() {
        assert!(positional_diff("", "").is_empty());
        assert_eq!(
            positional_diff("", "a"),
            vec![record(DiffKind::Added, 1, "a")]
        );
    }

    #[test]
    fn test_positional_trailing_newline_is_not_a_change() {
        let lines = positional_diff("a\nb\n", "a\nb");
        assert_eq!(
            lines,
            vec![record(DiffKind::Unchanged, 1, "a"), record(DiffKind::Unchanged, 2, "b")]
        );
        assert!(DiffSummary::from_lines(&lines).is_identical());

        let both = positional_diff("a\nb\n", "a\nb\n");
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn test_positional_blank_line_replaced() {
        let lines = positional_diff("a\n\nb", "a\nx\nb");
        assert_eq!(
            lines,
            vec![
                record(DiffKind::Unchanged, 1, "a"),
                record(DiffKind::Added, 2, "x"),
                record(DiffKind::Unchanged, 3, "b"),
            ]
        );
    }

    // ============================================================================
    // lcs_diff tests
    // ============================================================================

    #[test]
    fn test_lcs_insertion_does_not_cascade() {
        let lines = lcs_diff("a\nb", "x\na\nb");
        assert_eq!(
            lines,
            vec![
                record(DiffKind::Added, 1, "x"),
                record(DiffKind::Unchanged, 1, "a"),
                record(DiffKind::Unchanged, 2, "b"),
            ]
        );
    }

    #[test]
    fn test_lcs_replacement_lists_removal_first() {
        let lines = lcs_diff("a\nb\nc", "a\nx\nc");
        assert_eq!(
            kinds(&lines),
            vec![
                DiffKind::Unchanged,
                DiffKind::Removed,
                DiffKind::Added,
                DiffKind::Unchanged
            ]
        );
    }

    #[test]
    fn test_lcs_tails() {
        let lines = lcs_diff("a\nb\nc", "a");
        assert_eq!(
            lines,
            vec![
                record(DiffKind::Unchanged, 1, "a"),
                record(DiffKind::Removed, 2, "b"),
                record(DiffKind::Removed, 3, "c"),
            ]
        );
    }

    #[test]
    fn test_lcs_identical_texts() {
        let summary = diff_texts("x\ny", "x\ny", DiffAlgorithm::Lcs).summary;
        assert_eq!(summary.unchanged, 2);
        assert!(summary.is_identical());
    }

    #[test]
    fn test_diff_texts_defaults_to_positional() {
        let output = diff_texts("a\nb", "a\nc", DiffAlgorithm::default());
        assert_eq!(output.algorithm, DiffAlgorithm::Positional);
        assert_eq!(output.summary.removed, 1);
        assert_eq!(output.summary.added, 1);
        assert_eq!(output.summary.unchanged, 1);
    }
}
