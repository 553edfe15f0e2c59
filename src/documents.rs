//! Markdown document discovery.
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Extension (without the dot) that marks an input document.
pub const MARKDOWN_EXTENSION: &str = "md";

/// A loaded input document, keyed by its file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub stem: String,
    pub content: String,
}

/// Load every `*.md` file directly inside `dir`, sorted by file name.
///
/// A missing directory is not an error: it simply has no documents. A file
/// name that is not valid UTF-8 is rejected before any document is returned.
pub fn discover_documents(dir: &Path) -> Result<Vec<Document>> {
    if !dir.is_dir() {
        tracing::info!(dir = %dir.display(), "input directory missing; nothing to load");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let entry = entry.with_context(|| format!("read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_markdown = path
            .extension()
            .is_some_and(|ext| ext == MARKDOWN_EXTENSION);
        if is_markdown && path.is_file() {
            paths.push(path);
        }
    }
    // One parent directory, so path order is file-name order.
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        // Stems name the outputs; a lossy conversion could map two inputs to one file.
        let stem = path
            .file_stem()
            .and_then(OsStr::to_str)
            .map(str::to_string)
            .with_context(|| format!("non-UTF-8 file name {}", path.display()))?;
        let content =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        documents.push(Document { stem, content });
    }
    Ok(documents)
}
