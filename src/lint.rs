use std::path::PathBuf;
use std::sync::LazyLock;

use indicatif::ProgressBar;
use regex::Regex;
use tracing::{debug, info};

use crate::corpus;
use crate::error::Result;
use crate::settings::{
    Settings, EXCERPT_CHARS, LONG_LINE_CHARS, LONG_LINE_MAX_RECORDS, TYPO_TOKENS,
};
use crate::text::take_chars;

static TRAILING_WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongLine {
    /// 1-based.
    pub line: usize,
    pub chars: usize,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCheck {
    /// Text with trailing spaces and tabs removed from every line.
    pub text: String,
    pub trimmed: bool,
    pub typos: Vec<&'static str>,
    pub long_lines: Vec<LongLine>,
}

impl DocumentCheck {
    pub fn is_flagged(&self) -> bool {
        !self.typos.is_empty() || !self.long_lines.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFindings {
    pub path: String,
    pub typos: Vec<&'static str>,
    pub long_lines: Vec<LongLine>,
}

#[derive(Debug, Default)]
pub struct LintRun {
    pub checked: usize,
    pub trimmed: usize,
    pub flagged: Vec<FileFindings>,
    pub report: String,
    pub report_path: PathBuf,
}

pub fn strip_trailing_whitespace(text: &str) -> String {
    TRAILING_WS_RE.replace_all(text, "").into_owned()
}

/// Long lines and typo tokens, measured on the whitespace-trimmed text.
pub fn check_document(text: &str) -> DocumentCheck {
    let cleaned = strip_trailing_whitespace(text);
    let trimmed = cleaned != text;

    let long_lines = cleaned
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let chars = line.chars().count();
            (chars > LONG_LINE_CHARS).then(|| LongLine {
                line: idx + 1,
                chars,
                excerpt: take_chars(line, EXCERPT_CHARS).to_string(),
            })
        })
        .take(LONG_LINE_MAX_RECORDS)
        .collect();

    let lower = cleaned.to_lowercase();
    let typos = TYPO_TOKENS
        .iter()
        .copied()
        .filter(|t| lower.contains(t))
        .collect();

    DocumentCheck {
        text: cleaned,
        trimmed,
        typos,
        long_lines,
    }
}

/// Lint every document, writing back whitespace fixes, then write the report.
pub fn run(settings: &Settings) -> Result<LintRun> {
    let docs = corpus::discover(settings)?;
    info!(documents = docs.len(), "linting corpus");

    let pb = ProgressBar::new(docs.len() as u64);
    let mut trimmed = 0;
    let mut flagged = Vec::new();

    for rel in &docs {
        let path = settings.root.join(rel);
        let text = corpus::read_text(&path)?;
        let check = check_document(&text);

        if check.trimmed {
            corpus::write_atomic(&path, &check.text)?;
            trimmed += 1;
            debug!(doc = %rel.display(), "trailing whitespace removed");
        }
        if check.is_flagged() {
            debug!(doc = %rel.display(), typos = ?check.typos, long_lines = check.long_lines.len(), "flagged");
            flagged.push(FileFindings {
                path: corpus::display_rel(rel),
                typos: check.typos,
                long_lines: check.long_lines,
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = render_report(trimmed, &flagged);
    let report_path = settings.lint_report_path();
    corpus::write_atomic(&report_path, &report)?;
    info!(path = %report_path.display(), flagged = flagged.len(), "lint report written");

    Ok(LintRun {
        checked: docs.len(),
        trimmed,
        flagged,
        report,
        report_path,
    })
}

pub fn render_report(trimmed: usize, flagged: &[FileFindings]) -> String {
    let mut out = format!("Fixed trailing whitespace in {} files\n\n", trimmed);
    for file in flagged {
        out.push_str(&format!("File: {}\n", file.path));
        if !file.typos.is_empty() {
            out.push_str(&format!("  Possible typos: {}\n", file.typos.join(", ")));
        }
        if !file.long_lines.is_empty() {
            out.push_str("  Long lines (line, length, excerpt):\n");
            for l in &file.long_lines {
                out.push_str(&format!(
                    "    - {}: {} chars - \"{}...\"\n",
                    l.line, l.chars, l.excerpt
                ));
            }
        }
        out.push('\n');
    }
    out
}
