use std::sync::LazyLock;

use regex::Regex;

static SECTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{2,})\s*(.*)$").unwrap());
static TAGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^tags\s*:(.*)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Heading { level: u8, text: String },
    Tags(String),
    Prose(String),
    Blank,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        matches!(self, Line::Blank)
    }

    pub fn is_title(&self) -> bool {
        matches!(self, Line::Heading { level: 1, .. })
    }

    /// Section heading (depth two or more) whose text starts with `name`, ignoring case.
    pub fn is_section(&self, name: &str) -> bool {
        match self {
            Line::Heading { level, text } if *level >= 2 => text
                .get(..name.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(name)),
            _ => false,
        }
    }
}

/// Classify one raw line.
///
/// A title is `# ` after leading whitespace is stripped. Section headings and
/// tag lines are anchored to the raw line start, so indented `## x` is prose.
pub fn classify_line(raw: &str) -> Line {
    let stripped = raw.trim();
    if stripped.is_empty() {
        return Line::Blank;
    }

    if let Some(rest) = stripped.strip_prefix("# ") {
        return Line::Heading {
            level: 1,
            text: rest.trim().to_string(),
        };
    }

    if let Some(caps) = SECTION_RE.captures(raw) {
        return Line::Heading {
            level: caps[1].len().min(u8::MAX as usize) as u8,
            text: caps[2].trim().to_string(),
        };
    }

    if let Some(caps) = TAGS_RE.captures(raw) {
        return Line::Tags(caps[1].trim().to_string());
    }

    Line::Prose(stripped.to_string())
}

/// Classify every line; output is index-aligned with the input.
pub fn classify_lines(lines: &[&str]) -> Vec<Line> {
    lines.iter().map(|l| classify_line(l)).collect()
}
