pub mod sections;

use std::path::Path;

use crate::parser::{self, lines::Line, structure::Structure};
use crate::text::{lead_paragraph, title_from_path};

#[derive(Debug, Clone)]
pub struct Rewrite {
    pub text: String,
    pub changed: bool,
    /// Structure found in the input, i.e. what was left alone.
    pub before: Structure,
}

impl Rewrite {
    /// Names of the pieces this rewrite added, in insertion order.
    pub fn inserted(&self) -> Vec<&'static str> {
        let s = &self.before;
        let mut out = Vec::new();
        if self.changed {
            if s.title.is_none() {
                out.push("title");
            }
            if !s.has_summary {
                out.push("summary");
            }
            if !s.has_highlights {
                out.push("highlights");
            }
            if !s.has_tags {
                out.push("tags");
            }
        }
        out
    }
}

/// Normalize one document.
///
/// `path` only feeds the synthesized title. Running the result back through
/// `rewrite` yields the same text: every block is skipped once present.
pub fn rewrite(path: &Path, text: &str) -> Rewrite {
    let raw: Vec<&str> = text.lines().collect();
    let (lines, before) = parser::parse(&raw);

    let mut out: Vec<String> = Vec::with_capacity(raw.len() + 16);
    let body_start = match before.title {
        Some(idx) => {
            out.extend(raw[..=idx].iter().map(|l| l.to_string()));
            idx + 1
        }
        None => {
            let first = lines.iter().position(|l| !l.is_blank()).unwrap_or(raw.len());
            out.extend(raw[..first].iter().map(|l| l.to_string()));
            out.push(sections::title_line(&title_from_path(path)));
            first
        }
    };
    let body = &raw[body_start..];

    let mut blocks: Vec<Vec<String>> = Vec::new();
    if !before.has_summary {
        blocks.push(sections::summary_block(&lead_paragraph(body)));
    }
    if !before.has_highlights {
        blocks.push(sections::highlights_block(&highlight_source(
            body,
            &lines[body_start..],
        )));
    }
    if !before.has_tags {
        blocks.push(sections::tags_block());
    }

    if blocks.is_empty() {
        if before.title.is_none() && !body.is_empty() {
            out.push(String::new());
        }
        out.extend(body.iter().map(|l| l.to_string()));
    } else {
        let skip = lines[body_start..]
            .iter()
            .take_while(|l| l.is_blank())
            .count();
        for block in blocks {
            out.push(String::new());
            out.extend(block);
        }
        let rest = &body[skip..];
        if !rest.is_empty() {
            out.push(String::new());
            out.extend(rest.iter().map(|l| l.to_string()));
        }
    }

    let mut new_text = out.join("\n").trim_end().to_string();
    new_text.push('\n');
    let changed = new_text != text;
    Rewrite {
        text: new_text,
        changed,
        before,
    }
}

/// Body text searched for highlights, with heading and tag lines left out.
fn highlight_source(body: &[&str], classified: &[Line]) -> String {
    body.iter()
        .zip(classified)
        .filter(|(_, line)| matches!(line, Line::Prose(_) | Line::Blank))
        .map(|(raw, _)| *raw)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
