//! Markdown normalization.
//!
//! This module rewrites a Markdown document into plain, whitespace-minimal
//! text. The pipeline is a fixed, ordered list of pure string passes composed
//! left-to-right; ordering matters because later passes assume earlier ones
//! already ran (tables must be extracted before pipes and dashes are
//! indistinguishable from body text, emphasis must go before inline
//! whitespace is collapsed, and so on):
//!
//! 1. table extraction (well-formed pipe tables become CSV blocks)
//! 2. heading-marker stripping
//! 3. emphasis stripping (`***` then `**` then `*`)
//! 4. horizontal-rule collapse
//! 5. blank-line collapse
//! 6. inline-whitespace collapse
//! 7. trim
//!
//! Malformed tables do not match the extraction pattern and simply pass
//! through into the later stripping passes. No pass can fail on valid UTF-8
//! input.

use regex::{Captures, Regex};

/// Normalizes a Markdown document into tokenless plain text.
///
/// Equivalent to [`convert_markdown`](crate::convert_markdown).
#[must_use]
pub fn normalize(text: &str) -> String {
    let result = extract_tables(text);
    let result = strip_headings(&result);
    let result = strip_emphasis(&result);
    let result = collapse_rules(&result);
    let result = collapse_blank_lines(&result);
    let result = collapse_inline_space(&result);
    result.trim().to_string()
}

/// Splits a pipe-delimited table row into trimmed, non-empty cells.
///
/// Splitting on `|` leaves empty artifacts at the edges of rows written with
/// leading/trailing pipes; filtering empties drops them.
fn split_cells(row: &str) -> Vec<&str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect()
}

/// Replaces every well-formed pipe table with a CSV block.
///
/// A well-formed table is a header row delimited by `|`, immediately
/// followed by a separator row of `|`, `-`, and whitespace, immediately
/// followed by one or more body rows delimited by `|`. When the last body
/// row carries a trailing newline the pattern consumes it, so the CSV block
/// joins directly onto the following line.
fn extract_tables(text: &str) -> String {
    let table = Regex::new(r"\|(.+)\|\n\|[-|\s]+\|\n((?:\|.+\|\n?)+)").unwrap();
    table
        .replace_all(text, |caps: &Captures| {
            let mut csv = vec![split_cells(&caps[1]).join(",")];
            for row in caps[2].trim().split('\n') {
                csv.push(split_cells(row).join(","));
            }
            csv.join("\n")
        })
        .into_owned()
}

/// Strips a leading run of 1-6 `#` characters plus following whitespace at
/// the start of any line.
fn strip_headings(text: &str) -> String {
    let heading = Regex::new(r"(?m)^#{1,6}\s+").unwrap();
    heading.replace_all(text, "").into_owned()
}

/// Unwraps emphasis markers: `***x***`, then `**x**`, then `*x*`.
///
/// The triple rule runs first so that bold-italic spans are unwrapped whole
/// instead of leaving residue for the double and single rules to mangle.
fn strip_emphasis(text: &str) -> String {
    let bold_italic = Regex::new(r"\*{3}([^*]+)\*{3}").unwrap();
    let bold = Regex::new(r"\*{2}([^*]+)\*{2}").unwrap();
    let italic = Regex::new(r"\*([^*]+)\*").unwrap();

    let result = bold_italic.replace_all(text, "$1").into_owned();
    let result = bold.replace_all(&result, "$1").into_owned();
    italic.replace_all(&result, "$1").into_owned()
}

/// Collapses a run of 3+ hyphens, together with the blank lines around it,
/// to a single newline.
fn collapse_rules(text: &str) -> String {
    let rule = Regex::new(r"\n*---+\n*").unwrap();
    rule.replace_all(text, "\n").into_owned()
}

/// Collapses runs of 2+ newlines to exactly one newline.
fn collapse_blank_lines(text: &str) -> String {
    let blank = Regex::new(r"\n{2,}").unwrap();
    blank.replace_all(text, "\n").into_owned()
}

/// Collapses runs of spaces and tabs to a single space.
fn collapse_inline_space(text: &str) -> String {
    let spaces = Regex::new(r"[ \t]+").unwrap();
    spaces.replace_all(text, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_table() {
        let input = "| A | B |\n|---|---|\n| 1 | 2 |\n";
        assert_eq!(extract_tables(input), "A,B\n1,2");
    }

    #[test]
    fn test_extract_table_multiple_rows() {
        let input = "| name | age |\n| --- | --- |\n| Alice | 30 |\n| Bob | 25 |\n";
        assert_eq!(extract_tables(input), "name,age\nAlice,30\nBob,25");
    }

    #[test]
    fn test_extract_table_consumes_trailing_newline() {
        // the trailing newline of the last body row is part of the match, so
        // the CSV block joins onto the following line
        let input = "| A |\n|---|\n| 1 |\nafter";
        assert_eq!(extract_tables(input), "A\n1after");
    }

    #[test]
    fn test_malformed_table_passes_through() {
        // no separator row, so the pattern does not match
        let input = "| A | B |\n| 1 | 2 |";
        assert_eq!(extract_tables(input), input);
    }

    #[test]
    fn test_table_surrounded_by_text() {
        let input = "before\n| A | B |\n|---|---|\n| 1 | 2 |\n\nafter";
        assert_eq!(extract_tables(input), "before\nA,B\n1,2\nafter");
    }

    #[test]
    fn test_split_cells_drops_edge_artifacts() {
        assert_eq!(split_cells(" A | B "), vec!["A", "B"]);
        assert_eq!(split_cells("| A | B |"), vec!["A", "B"]);
    }

    #[test]
    fn test_strip_headings() {
        assert_eq!(strip_headings("# Title"), "Title");
        assert_eq!(strip_headings("### Sub"), "Sub");
        assert_eq!(strip_headings("###### Deep"), "Deep");
        assert_eq!(strip_headings("a # not a heading"), "a # not a heading");
        assert_eq!(strip_headings("# One\ntext\n## Two"), "One\ntext\nTwo");
    }

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("**bold**"), "bold");
        assert_eq!(strip_emphasis("*it*"), "it");
        assert_eq!(strip_emphasis("***both***"), "both");
        assert_eq!(strip_emphasis("a **b** c *d*"), "a b c d");
        assert_eq!(strip_emphasis("no markers"), "no markers");
    }

    #[test]
    fn test_collapse_rules() {
        assert_eq!(collapse_rules("a\n\n---\n\nb"), "a\nb");
        assert_eq!(collapse_rules("a\n-----\nb"), "a\nb");
        assert_eq!(collapse_rules("a--b"), "a--b");
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\nb"), "a\nb");
        assert_eq!(collapse_blank_lines("a\nb"), "a\nb");
    }

    #[test]
    fn test_collapse_inline_space() {
        assert_eq!(collapse_inline_space("a   b\tc"), "a b c");
        assert_eq!(collapse_inline_space("a \t b"), "a b");
    }

    #[test]
    fn test_normalize_full_pipeline() {
        let input = "# Title\n\nSome **bold** and *italic* text.\n\n---\n\n| A | B |\n|---|---|\n| 1 | 2 |\n";
        assert_eq!(
            normalize(input),
            "Title\nSome bold and italic text.\nA,B\n1,2"
        );
    }

    #[test]
    fn test_normalize_whitespace_only_differences() {
        // runs collapse to single spaces/newlines; a single space touching an
        // interior newline is already collapsed and survives
        let input = "  hello\t\tworld  \n\n\n  again  ";
        assert_eq!(normalize(input), "hello world \n again");
    }
}
