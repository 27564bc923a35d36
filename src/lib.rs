//! # ufomenu
//!
//! Lossless reading, editing and writing of UFO menu definition files.
//!
//! Menu files declare `menu name { ... }` blocks holding `key value`
//! parameters and `behaviour name { ... }` nodes. A [`Document`] loaded
//! from them can be queried and edited, then saved with every untouched
//! byte (comments, blank lines, indentation) preserved.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project     → MenuLoader (glob, walkdir), atomic save (tempfile)
//!   ↓
//! serializer  → span copy for pristine entries, rebuild for edited ones
//!   ↓
//! model       → Document / Menu / Node / Parameter / Value
//!   ↓
//! parser      → Logos lexer, recursive-descent parser, rowan CST, typed AST
//!   ↓
//! base        → FileId, LineIndex, TextRange, naming constants
//! ```
//!
//! ## Example
//!
//! ```
//! use ufomenu::{Document, ParamOwner};
//!
//! let mut doc = Document::parse_str("menu main {\n\tsize \"100 50\"\n}\n")?;
//! doc.menu_mut("main")?.set_pos(10, 20)?;
//! assert_eq!(doc.render(), "menu main {\n\tsize \"100 50\"\n\tpos \"10 20\"\n}\n");
//! # Ok::<(), ufomenu::MenuError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → model → serializer → project)
// ============================================================================

/// Foundation types: FileId, LineIndex, TextRange, constants
pub mod base;

/// Error type shared by every operation
pub mod error;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Editable model lowered from the syntax tree
pub mod model;

/// Writer that turns the model back into text
pub mod serializer;

/// Loading from and saving to disk
pub mod project;

// ============================================================================
// CONVENIENCE RE-EXPORTS
// ============================================================================

pub use base::FileId;
pub use error::{EntryKind, MenuError, Result};
pub use model::{Document, Item, Menu, Node, ParamOwner, Parameter, Scalar, Value};
pub use project::{DuplicatePolicy, LoadOptions, MenuLoader, SaveOptions};
