//! Prose helpers shared by the rewriter and the lint pass.

use std::path::Path;

/// Split prose into sentence-like units.
///
/// A unit ends at `.`, `!` or `?` followed by whitespace. Units are trimmed,
/// internal whitespace runs collapse to one space, and empty units are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            push_sentence(&mut sentences, &current);
            current.clear();
        }
    }
    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let sentence = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if !sentence.is_empty() {
        out.push(sentence);
    }
}

/// First run of non-blank lines, joined with single spaces.
/// Leading blank lines are skipped rather than ending the paragraph.
pub fn lead_paragraph(lines: &[&str]) -> String {
    let mut buf: Vec<&str> = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            if buf.is_empty() {
                continue;
            }
            break;
        }
        buf.push(line.trim_end());
    }
    buf.join(" ").trim().to_string()
}

/// Human title from a file name: `team-sync_notes.md` → `Team Sync Notes`.
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let words: Vec<String> = stem
        .replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect();
    if words.is_empty() {
        "Untitled".to_string()
    } else {
        words.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// At most `max` characters of `s`, cut on a char boundary.
pub fn take_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_on_punctuation() {
        assert_eq!(
            split_sentences("First one. Second!  Third? fourth"),
            vec!["First one.", "Second!", "Third?", "fourth"]
        );
    }

    #[test]
    fn no_split_without_whitespace() {
        assert_eq!(split_sentences("v1.2 is out.Really"), vec!["v1.2 is out.Really"]);
    }

    #[test]
    fn sentences_collapse_newlines() {
        assert_eq!(
            split_sentences("A line\nthat wraps.\n\nNext"),
            vec!["A line that wraps.", "Next"]
        );
    }

    #[test]
    fn empty_prose() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  \n ").is_empty());
    }

    #[test]
    fn lead_paragraph_skips_leading_blanks() {
        let lines = ["", "  ", "First line  ", "second line", "", "other paragraph"];
        assert_eq!(lead_paragraph(&lines), "First line second line");
    }

    #[test]
    fn lead_paragraph_empty() {
        assert_eq!(lead_paragraph(&[]), "");
        assert_eq!(lead_paragraph(&["", ""]), "");
    }

    #[test]
    fn titles() {
        assert_eq!(title_from_path(Path::new("notes.md")), "Notes");
        assert_eq!(title_from_path(Path::new("a/team-sync_NOTES.md")), "Team Sync Notes");
        assert_eq!(title_from_path(Path::new("2026-01-05.md")), "2026 01 05");
        assert_eq!(title_from_path(Path::new("-_.md")), "Untitled");
    }

    #[test]
    fn take_chars_boundaries() {
        assert_eq!(take_chars("héllo", 2), "hé");
        assert_eq!(take_chars("abc", 10), "abc");
    }
}
