//! Small text file helpers used by the `file-demo` binary.
//!
//! Each helper opens its own handle and drops it before returning, so no
//! file stays open between calls.
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileOpError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileOpError {
    fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Create or truncate `path` and write `text` verbatim.
pub fn write_text(path: &Path, text: &str) -> Result<(), FileOpError> {
    let mut file = File::create(path).map_err(|e| FileOpError::io("write", path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| FileOpError::io("write", path, e))
}

/// Read the whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String, FileOpError> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FileOpError::NotFound {
            path: path.to_path_buf(),
        },
        _ => FileOpError::io("read", path, e),
    })?;
    let mut text = String::new();
    file.read_to_string(&mut text)
        .map_err(|e| FileOpError::io("read", path, e))?;
    Ok(text)
}

/// Append `text`, optionally preceded by a newline. Creates the file if needed.
pub fn append_text(path: &Path, text: &str, add_newline: bool) -> Result<(), FileOpError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| FileOpError::io("append", path, e))?;
    if add_newline {
        file.write_all(b"\n")
            .map_err(|e| FileOpError::io("append", path, e))?;
    }
    file.write_all(text.as_bytes())
        .map_err(|e| FileOpError::io("append", path, e))
}
