use std::collections::BTreeMap;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use crate::corpus::{self, BackupStore};
use crate::error::Result;
use crate::parser::lines::{classify_line, Line};
use crate::rewrite::rewrite;
use crate::settings::{Settings, INDEX_BACKUP_FILE, INDEX_MAX_HIGHLIGHTS};

const NO_HIGHLIGHTS: &str = "- No highlights found yet. Run the formatter to extract them.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub path: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct IndexStats {
    pub total: usize,
    pub changed: usize,
    /// Top-level directory name → documents beneath it, sorted by name.
    pub dirs: Vec<(String, usize)>,
    pub highlights: Vec<Highlight>,
}

/// Outcome of one formatter run.
#[derive(Debug)]
pub struct FormatRun {
    pub total: usize,
    pub changed: Vec<PathBuf>,
    pub index_text: String,
    pub applied: bool,
}

/// Rewrite the whole corpus, then regenerate the index.
///
/// In dry-run mode nothing is written; the returned run still reports what
/// would change and carries the index text that would be written.
pub fn run(settings: &Settings) -> Result<FormatRun> {
    let docs = corpus::discover(settings)?;
    info!(documents = docs.len(), apply = settings.apply, "formatting corpus");

    let backups = if settings.apply {
        Some(BackupStore::open(settings.backup_dir())?)
    } else {
        None
    };

    let pb = progress_bar(docs.len());
    let mut changed = Vec::new();
    let mut highlights: Vec<Highlight> = Vec::new();

    for rel in &docs {
        let path = settings.root.join(rel);
        let text = corpus::read_text(&path)?;
        let result = rewrite(rel, &text);

        if result.changed {
            debug!(doc = %rel.display(), inserted = ?result.inserted(), "document changed");
            if let Some(store) = &backups {
                store.save(rel, &text)?;
                corpus::write_atomic(&path, &result.text)?;
            }
            changed.push(rel.clone());
        } else {
            debug!(doc = %rel.display(), "document unchanged");
        }

        if highlights.len() < INDEX_MAX_HIGHLIGHTS {
            let shown = corpus::display_rel(rel);
            for item in extract_highlights(&result.text) {
                if highlights.len() >= INDEX_MAX_HIGHLIGHTS {
                    break;
                }
                highlights.push(Highlight {
                    path: shown.clone(),
                    text: item,
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let stats = IndexStats {
        total: docs.len(),
        changed: changed.len(),
        dirs: dir_counts(corpus::top_level_dirs(&settings.root)?, &docs),
        highlights,
    };
    let index_text = render_index(&stats);

    if let Some(store) = &backups {
        let index_path = settings.index_path();
        if index_path.is_file() {
            store.copy_in(&index_path, INDEX_BACKUP_FILE)?;
        }
        corpus::write_atomic(&index_path, &index_text)?;
        info!(path = %index_path.display(), "index written");
    }

    Ok(FormatRun {
        total: docs.len(),
        changed,
        index_text,
        applied: settings.apply,
    })
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb
}

fn dir_counts(dirs: Vec<String>, docs: &[PathBuf]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = dirs.into_iter().map(|d| (d, 0)).collect();
    for top in docs.iter().filter_map(|d| corpus::top_level_of(d)) {
        if let Some(count) = counts.get_mut(&top) {
            *count += 1;
        }
    }
    counts.into_iter().collect()
}

/// Bullet texts of the first Highlights section, stripped of bullet and
/// emphasis markers. The section ends at the next heading of any depth.
pub fn extract_highlights(text: &str) -> Vec<String> {
    let mut lines = text.lines();
    if !lines.by_ref().any(|l| classify_line(l).is_section("highlights")) {
        return Vec::new();
    }

    let mut out = Vec::new();
    for line in lines {
        if matches!(classify_line(line), Line::Heading { .. }) {
            break;
        }
        let trimmed = line.trim();
        if !trimmed.starts_with('-') {
            continue;
        }
        let item = trimmed
            .trim_start_matches(['-', ' '])
            .trim()
            .trim_matches(['*', '_'])
            .trim();
        if !item.is_empty() {
            out.push(item.to_string());
        }
    }
    out
}

pub fn render_index(stats: &IndexStats) -> String {
    let mut out = String::new();
    out.push_str("# Journal — Organized\n\n");
    out.push_str(
        "A curated and readable view of the personal journal entries and study notes. \
         This README was auto-generated during formatting.\n\n",
    );

    out.push_str("## Quick stats\n\n");
    out.push_str(&format!("- **Total Markdown files:** {}\n", stats.total));
    out.push_str(&format!("- **Files updated in this run:** {}\n\n", stats.changed));

    out.push_str("## Organization\n\n");
    for (dir, count) in &stats.dirs {
        out.push_str(&format!("- **{}/** — {} markdown files\n", dir, count));
    }
    out.push('\n');

    out.push_str("## Featured highlights\n\n");
    if stats.highlights.is_empty() {
        out.push_str(NO_HIGHLIGHTS);
        out.push('\n');
    } else {
        for h in &stats.highlights {
            out.push_str(&format!("- **{}** — [{}]({})\n", h.text, h.path, h.path));
        }
    }
    out.push('\n');

    out.push_str("## Formatting rules applied\n\n");
    out.push_str("- H1 header added if missing\n");
    out.push_str("- `## Summary` and `## Highlights` sections added\n");
    out.push_str("- `Tags: #journal` appended when missing\n");
    out.push_str("- Original files backed up under `md_backups/`\n");
    out
}
