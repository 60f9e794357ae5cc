use super::lines::Line;

/// What a document already has. Sections are only searched after the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    /// Index of the first top-level heading, `None` when absent.
    pub title: Option<usize>,
    pub has_summary: bool,
    pub has_highlights: bool,
    pub has_tags: bool,
}

impl Structure {
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.has_summary && self.has_highlights && self.has_tags
    }
}

pub fn detect(lines: &[Line]) -> Structure {
    let title = lines.iter().position(Line::is_title);
    let body = match title {
        Some(idx) => &lines[idx + 1..],
        None => lines,
    };

    Structure {
        title,
        has_summary: body.iter().any(|l| l.is_section("summary")),
        has_highlights: body.iter().any(|l| l.is_section("highlights")),
        has_tags: body.iter().any(|l| matches!(l, Line::Tags(_))),
    }
}
