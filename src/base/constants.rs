//! Naming conventions of menu definition files.

/// File name pattern used when a directory is given to the loader
/// (`menu_<topic>.ufo`).
pub const DEFAULT_MENU_PATTERN: &str = "menu_*.ufo";

/// Keyword opening a top-level menu block.
pub const MENU_KEYWORD: &str = "menu";

/// Indentation added for one nesting level when layout cannot be inferred.
pub const INDENT_UNIT: &str = "\t";

/// Parameter holding the top-left corner of a menu or node.
pub const POS_KEY: &str = "pos";

/// Parameter holding the width/height of a menu or node.
pub const SIZE_KEY: &str = "size";
