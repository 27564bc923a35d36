//! File discovery and reading for menu definition files.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::base::constants::DEFAULT_MENU_PATTERN;
use crate::error::{MenuError, Result};

/// Read a file as UTF-8 text
pub fn load_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MenuError::io(path, e))
}

/// Split a pattern such as `base/ufos/menu_*.ufo` into the directory to
/// search and the file name glob.
///
/// A pattern naming an existing directory matches the default
/// `menu_*.ufo` files inside it. Wildcards are only allowed in the file
/// name.
pub fn split_pattern(pattern: &Path) -> Result<(PathBuf, String)> {
    if pattern.is_dir() {
        return Ok((pattern.to_path_buf(), DEFAULT_MENU_PATTERN.to_string()));
    }

    let name = pattern
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| pattern_error(pattern, "missing file name"))?;
    let dir = match pattern.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if dir.to_string_lossy().contains(['*', '?']) {
        return Err(pattern_error(pattern, "wildcards are only supported in the file name"));
    }
    Ok((dir, name.to_string()))
}

/// Compile a file name glob (`*` and `?` wildcards) into an anchored regex
pub fn glob_to_regex(glob: &str) -> Result<Regex> {
    let mut source = String::with_capacity(glob.len() + 8);
    source.push('^');
    for c in glob.chars() {
        match c {
            '*' => source.push_str(".*"),
            '?' => source.push('.'),
            c => source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    source.push('$');
    Regex::new(&source).map_err(|e| MenuError::Pattern {
        pattern: glob.to_string(),
        message: e.to_string(),
    })
}

/// Collect files under `dir` whose name matches `matcher`, sorted by path
pub fn collect_file_paths(dir: &Path, matcher: &Regex, recursive: bool) -> Result<Vec<PathBuf>> {
    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop"));
            MenuError::io(path, source)
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.is_match(name));
        if matches {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

fn pattern_error(pattern: &Path, message: &str) -> MenuError {
    MenuError::Pattern {
        pattern: pattern.display().to_string(),
        message: message.to_string(),
    }
}
