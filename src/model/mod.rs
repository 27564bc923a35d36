//! Editable document model.
//!
//! The model is lowered from the syntax tree once per file and is the only
//! thing edited afterwards. Every entry keeps the trivia in front of it and,
//! while unedited, the byte span it was parsed from; the serializer copies
//! pristine spans verbatim and rebuilds edited entries from their pieces.
//!
//! ## Architecture
//!
//! ```text
//! Document ── files: [SourceText]        (path, loaded text, trailing trivia)
//!    │
//!    └─ menus: [Menu] + name index
//!          │
//!          └─ Body: [Item]               (params and nodes in source order)
//!                 ├─ Param(Parameter)    key, raw literal, lazy typed Value
//!                 └─ Node(Node)
//!                       └─ Body: [Item]  (parameters only)
//! ```

mod body;
mod document;
mod layout;
mod lower;
mod menu;
mod node;
mod owner;
mod param;
mod value;

pub use body::{Body, Item};
pub use document::{Document, SourceText};
pub use menu::Menu;
pub use node::Node;
pub use owner::ParamOwner;
pub use param::Parameter;
pub use value::{Scalar, Value, is_bare_word, is_valid_literal, unquote};

#[cfg(test)]
mod tests;
