//! Helpers for building documents and menu directories in tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use ufomenu::Document;

/// Parse in-memory text, failing the test on error
pub fn document(text: &str) -> Document {
    match Document::parse_str(text) {
        Ok(doc) => doc,
        Err(e) => panic!("fixture failed to parse: {e}"),
    }
}

/// A temporary directory holding `files` as `(name, text)` pairs
pub fn menu_dir(files: &[(&str, &str)]) -> (TempDir, Vec<PathBuf>) {
    let temp = TempDir::new().unwrap();
    let paths = files
        .iter()
        .map(|(name, text)| {
            let path = temp.path().join(name);
            fs::write(&path, text).unwrap();
            path
        })
        .collect();
    (temp, paths)
}

/// Names of all menus in document order
pub fn menu_names(doc: &Document) -> Vec<String> {
    doc.menus().map(|m| m.name().to_string()).collect()
}
