use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::options::SaveOptions;
use crate::error::{MenuError, Result};
use crate::model::Document;
use crate::serializer;

/// Write every file of `document` back to the path it was loaded from.
///
/// Each file is replaced atomically, so a failed write leaves the previous
/// contents in place. Returns the paths that were written. Nothing is written
/// if any file has no path.
pub fn save(document: &Document, options: &SaveOptions) -> Result<Vec<PathBuf>> {
    let rendered = serializer::render_files(document);

    let mut targets = Vec::with_capacity(rendered.len());
    for (file, text) in &rendered {
        let source = document
            .file(*file)
            .ok_or(MenuError::NoSourcePath { file: *file })?;
        let path = source
            .path()
            .ok_or(MenuError::NoSourcePath { file: *file })?;
        if options.skip_unchanged && on_disk(path, text) {
            debug!(path = %path.display(), "unchanged, not written");
            continue;
        }
        targets.push((path, text));
    }

    let mut written = Vec::with_capacity(targets.len());
    for (path, text) in targets {
        write_atomic(path, text)?;
        debug!(path = %path.display(), bytes = text.len(), "saved menu file");
        written.push(path.to_path_buf());
    }
    Ok(written)
}

/// Whether `path` already holds exactly `text`. Unreadable files count as
/// different so they get written.
fn on_disk(path: &Path, text: &str) -> bool {
    fs::read(path).is_ok_and(|bytes| bytes == text.as_bytes())
}

/// Replace `path` with `contents` via a temporary file in the same directory
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| MenuError::io(path, e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| MenuError::io(path, e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| MenuError::io(path, e))?;
    temp.persist(path).map_err(|e| MenuError::io(path, e.error))?;
    Ok(())
}
