use std::path::{Path, PathBuf};

pub const MARKDOWN_EXT: &str = "md";
pub const VCS_DIR: &str = ".git";
pub const BACKUP_DIR: &str = "md_backups";
pub const INDEX_FILE: &str = "README.md";
pub const INDEX_BACKUP_FILE: &str = "README.md.bak";
pub const LINT_REPORT_FILE: &str = "md_lint_report.txt";

pub const HIGHLIGHT_KEYWORDS: &[&str] = &[
    "event", "meet", "deadline", "important", "note", "meeting", "launch", "release",
];

pub const TYPO_TOKENS: &[&str] = &["teh", "adn", "recieve", "occurence", "adress", "enviroment"];

pub const TAGS_LINE: &str = "Tags: #journal";

pub const SUMMARY_MAX_SENTENCES: usize = 4;
pub const HIGHLIGHT_MAX: usize = 3;
pub const HIGHLIGHT_FALLBACK: usize = 2;
pub const HIGHLIGHT_SCAN_CHARS: usize = 1000;
pub const INDEX_MAX_HIGHLIGHTS: usize = 10;

pub const LONG_LINE_CHARS: usize = 200;
pub const LONG_LINE_MAX_RECORDS: usize = 5;
pub const EXCERPT_CHARS: usize = 120;

/// Where a run reads from and writes to.
#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    /// Write changes back (otherwise dry run).
    pub apply: bool,
}

impl Settings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            apply: false,
        }
    }

    pub fn with_apply(mut self, apply: bool) -> Self {
        self.apply = apply;
        self
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.root.join(BACKUP_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn lint_report_path(&self) -> PathBuf {
        self.root.join(LINT_REPORT_FILE)
    }

    /// True for the root-level index, which the rewriter must never touch.
    pub fn is_index(&self, rel: &Path) -> bool {
        rel == Path::new(INDEX_FILE)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(".")
    }
}
