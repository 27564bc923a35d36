//! Error types for loading, querying, editing and saving menu files.
//!
//! Load-time errors ([`MenuError::Lex`], [`MenuError::Parse`],
//! [`MenuError::DuplicateName`]) abort the whole file. Query and mutation
//! errors are local to the failing call and leave the document untouched.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`MenuError`].
pub type Result<T> = std::result::Result<T, MenuError>;

/// What kind of entry a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Menu,
    Node,
    Param,
    File,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Node => "node",
            Self::Param => "parameter",
            Self::File => "file",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for all menu operations.
#[derive(Error, Debug)]
pub enum MenuError {
    // ============ Load-time errors ============
    /// Malformed token (unterminated literal or comment, stray character)
    #[error("lex error at offset {offset} (line {line}): {message}")]
    Lex {
        message: String,
        offset: usize,
        line: usize,
    },

    /// Grammar violation at a block boundary
    #[error("parse error at offset {offset} (line {line}): expected {expected}, found {found}")]
    Parse {
        expected: String,
        found: String,
        offset: usize,
        line: usize,
    },

    /// Two menus or two nodes with the same name in one scope
    #[error("duplicate name '{name}' in {scope}")]
    DuplicateName { scope: String, name: String },

    /// Load-time error annotated with the file it came from
    #[error("{}: {source}", path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<MenuError>,
    },

    /// The same path was loaded twice into one document
    #[error("file '{}' is already loaded", path.display())]
    AlreadyLoaded { path: PathBuf },

    // ============ Query / mutation errors ============
    /// Lookup of a missing menu, node or parameter
    #[error("{kind} '{name}' not found")]
    NotFound { kind: EntryKind, name: String },

    /// Typed accessor applied to a literal of the wrong shape
    #[error("parameter '{key}' has value {literal}, expected {expected}")]
    MalformedValue {
        key: String,
        literal: String,
        expected: &'static str,
    },

    /// Rename target collides with an existing key on the same entry
    #[error("parameter '{key}' already exists on '{owner}'")]
    DuplicateKey { key: String, owner: String },

    /// Key or name that cannot be written back as a bare word
    #[error("'{name}' is not a valid {kind} name")]
    InvalidName { kind: EntryKind, name: String },

    // ============ I/O errors ============
    /// Underlying file read/write failure
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid file name pattern given to the loader
    #[error("invalid file pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// Document content that was not loaded from disk cannot be saved
    #[error("{file} has no source path to save to")]
    NoSourcePath { file: crate::base::FileId },
}

impl MenuError {
    pub(crate) fn not_found(kind: EntryKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn in_file(path: impl Into<PathBuf>, source: MenuError) -> Self {
        Self::InFile {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// The error with any file annotation removed
    pub fn root_cause(&self) -> &MenuError {
        match self {
            Self::InFile { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Check whether this error aborts loading (as opposed to a failed query)
    pub fn is_load_error(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::Lex { .. } | Self::Parse { .. } | Self::DuplicateName { .. }
        )
    }
}
