use std::path::{Path, PathBuf};

use tracing::debug;

use super::file_loader;
use super::options::{DuplicatePolicy, LoadOptions};
use crate::base::FileId;
use crate::error::{MenuError, Result};
use crate::model::Document;

/// Loads menu definition files into a [`Document`]
#[derive(Debug, Clone, Default)]
pub struct MenuLoader {
    options: LoadOptions,
}

impl MenuLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoadOptions) -> Self {
        Self { options }
    }

    pub fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.options.duplicates = policy;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.options.recursive = recursive;
        self
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load a single file into a new document
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Document> {
        let mut document = Document::new();
        self.load_file_into(&mut document, path)?;
        Ok(document)
    }

    /// Add a single file to an existing document.
    ///
    /// On error the document is left as it was.
    pub fn load_file_into(&self, document: &mut Document, path: impl AsRef<Path>) -> Result<FileId> {
        let path = path.as_ref();
        let text = file_loader::load_file(path)?;
        let file = document
            .attach(Some(path.to_path_buf()), text, self.options.duplicates)
            .map_err(|e| annotate(path, e))?;
        debug!(path = %path.display(), file = %file, "loaded menu file");
        Ok(file)
    }

    /// Load every file matching `pattern` into a new document, in path order.
    ///
    /// The first failing file aborts the load.
    pub fn load_all(&self, pattern: impl AsRef<Path>) -> Result<Document> {
        let mut document = Document::new();
        self.load_all_into(&mut document, pattern)?;
        Ok(document)
    }

    /// Add every file matching `pattern` to an existing document.
    ///
    /// Files loaded before a failing one stay in the document.
    pub fn load_all_into(
        &self,
        document: &mut Document,
        pattern: impl AsRef<Path>,
    ) -> Result<Vec<FileId>> {
        let paths = self.matching_paths(pattern.as_ref())?;
        debug!(
            pattern = %pattern.as_ref().display(),
            files = paths.len(),
            "loading menu files"
        );
        paths
            .iter()
            .map(|path| self.load_file_into(document, path))
            .collect()
    }

    /// Paths `pattern` resolves to, sorted
    pub fn matching_paths(&self, pattern: &Path) -> Result<Vec<PathBuf>> {
        let (dir, glob) = file_loader::split_pattern(pattern)?;
        let matcher = file_loader::glob_to_regex(&glob)?;
        file_loader::collect_file_paths(&dir, &matcher, self.options.recursive)
    }
}

/// Attach the file path to errors raised while reading its content
fn annotate(path: &Path, error: MenuError) -> MenuError {
    match error {
        MenuError::AlreadyLoaded { .. } | MenuError::Io { .. } => error,
        other => MenuError::in_file(path, other),
    }
}
