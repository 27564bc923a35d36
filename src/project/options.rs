//! Load and save options

/// What to do when a loaded file defines a menu that is already known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Reject the file with [`MenuError::DuplicateName`](crate::MenuError::DuplicateName)
    #[default]
    Strict,
    /// Keep both definitions; lookups by name resolve to the later one
    LastWins,
}

/// Options for [`MenuLoader`](super::MenuLoader)
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Handling of menus defined in more than one file
    pub duplicates: DuplicatePolicy,
    /// Descend into subdirectories when matching a pattern
    pub recursive: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            duplicates: DuplicatePolicy::Strict,
            recursive: false,
        }
    }
}

/// Options for [`save`](super::save)
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Leave files whose contents on disk already equal the rendered text
    /// untouched
    pub skip_unchanged: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            skip_unchanged: true,
        }
    }
}
