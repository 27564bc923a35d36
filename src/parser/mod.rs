//! Rowan-based lossless parser for menu definition files
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! The CST preserves all whitespace and comments. The editable document
//! model is lowered from the typed AST layer on top of it.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind and byte spans
//!     ↓
//! Parser → GreenNode tree (lossless)
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! Model → Document / Menu / Node / Parameter
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod lexer;
mod syntax_kind;

pub use ast::*;
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, is_node_body, parse};
pub use syntax_kind::{MenuLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
