use crate::settings::{
    HIGHLIGHT_FALLBACK, HIGHLIGHT_KEYWORDS, HIGHLIGHT_MAX, HIGHLIGHT_SCAN_CHARS,
    SUMMARY_MAX_SENTENCES, TAGS_LINE,
};
use crate::text::{split_sentences, take_chars};

pub const SUMMARY_HEADING: &str = "## Summary";
pub const HIGHLIGHTS_HEADING: &str = "## Highlights";

const EMPTY_BULLET: &str = "- ";

pub fn title_line(title: &str) -> String {
    format!("# {}", title)
}

/// One bullet per lead-paragraph sentence, capped; a single-sentence
/// paragraph is kept whole.
pub fn summary_bullets(lead: &str) -> Vec<String> {
    if lead.is_empty() {
        return vec![EMPTY_BULLET.to_string()];
    }
    let sentences = split_sentences(lead);
    if sentences.len() <= 1 {
        return vec![format!("- {}", lead)];
    }
    sentences
        .iter()
        .take(SUMMARY_MAX_SENTENCES)
        .map(|s| format!("- {}", s))
        .collect()
}

/// Keyword-matching sentences from the head of the body, in document order.
pub fn highlight_bullets(body: &str) -> Vec<String> {
    let sentences = split_sentences(take_chars(body, HIGHLIGHT_SCAN_CHARS));

    let mut picked: Vec<&String> = sentences
        .iter()
        .filter(|s| mentions_keyword(s))
        .take(HIGHLIGHT_MAX)
        .collect();
    if picked.is_empty() {
        picked = sentences.iter().take(HIGHLIGHT_FALLBACK).collect();
    }
    if picked.is_empty() {
        return vec![EMPTY_BULLET.to_string()];
    }
    picked.into_iter().map(|s| format!("- **{}**", s)).collect()
}

fn mentions_keyword(sentence: &str) -> bool {
    let lower = sentence.to_lowercase();
    HIGHLIGHT_KEYWORDS.iter().any(|k| lower.contains(k))
}

pub fn summary_block(lead: &str) -> Vec<String> {
    section_block(SUMMARY_HEADING, summary_bullets(lead))
}

pub fn highlights_block(body: &str) -> Vec<String> {
    section_block(HIGHLIGHTS_HEADING, highlight_bullets(body))
}

pub fn tags_block() -> Vec<String> {
    vec![TAGS_LINE.to_string()]
}

fn section_block(heading: &str, bullets: Vec<String>) -> Vec<String> {
    let mut lines = Vec::with_capacity(bullets.len() + 2);
    lines.push(heading.to_string());
    lines.push(String::new());
    lines.extend(bullets);
    lines
}
