//! Filesystem side of a run: finding documents, reading them, and replacing
//! them safely.

use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::{Error, Result};
use crate::settings::{Settings, BACKUP_DIR, MARKDOWN_EXT, VCS_DIR};

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && matches!(entry.file_name().to_str(), Some(VCS_DIR) | Some(BACKUP_DIR))
}

/// Relative paths of every markdown document under the root, sorted, with
/// the index document left out.
pub fn discover(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut docs = Vec::new();
    let walker = WalkDir::new(&settings.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !is_skipped_dir(e));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(MARKDOWN_EXT) {
            continue;
        }
        let rel = path
            .strip_prefix(&settings.root)
            .unwrap_or(path)
            .to_path_buf();
        if settings.is_index(&rel) {
            continue;
        }
        docs.push(rel);
    }

    debug!(count = docs.len(), root = %settings.root.display(), "discovered documents");
    Ok(docs)
}

/// Names of the root's immediate subdirectories, minus VCS metadata and backups.
pub fn top_level_dirs(root: &Path) -> Result<Vec<String>> {
    let mut dirs = Vec::new();
    let entries = fs::read_dir(root).map_err(|e| Error::io(root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(root, e))?;
        let is_dir = entry
            .file_type()
            .map_err(|e| Error::io(entry.path(), e))?
            .is_dir();
        if !is_dir {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == VCS_DIR || name == BACKUP_DIR {
            continue;
        }
        dirs.push(name);
    }
    dirs.sort();
    Ok(dirs)
}

/// First component of a relative path when the document sits in a subdirectory.
pub fn top_level_of(rel: &Path) -> Option<String> {
    let mut components = rel.components();
    let first = components.next()?;
    components.next()?;
    match first {
        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Relative path with `/` separators, as written into generated documents.
pub fn display_rel(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}

/// Replace `path` via a sibling temp file and rename, keeping existing permissions.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(tmp.path(), e))?;

    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(|e| Error::io(path, e))?;
    }

    tmp.persist(path).map_err(|source| Error::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Archive of pre-rewrite originals. Written to, never read back.
pub struct BackupStore {
    dir: PathBuf,
}

impl BackupStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        Ok(Self { dir })
    }

    /// Store `text` at the document's relative path inside the archive.
    pub fn save(&self, rel: &Path, text: &str) -> Result<PathBuf> {
        let target = self.dir.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        write_atomic(&target, text)?;
        Ok(target)
    }

    /// Copy an existing file into the archive root under `name`.
    pub fn copy_in(&self, src: &Path, name: &str) -> Result<PathBuf> {
        let target = self.dir.join(name);
        fs::copy(src, &target).map_err(|e| Error::io(src, e))?;
        Ok(target)
    }
}
