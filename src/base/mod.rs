//! Foundation types for the menu toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Index of a loaded source file inside a [`Document`](crate::Document)
//! - [`TextRange`], [`TextSize`] - Source spans (byte offsets)
//! - [`LineIndex`], [`Position`] - Offset to line/column conversion for diagnostics
//! - File naming constants
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod file_id;
mod position;

pub use file_id::FileId;
pub use position::{LineIndex, Position};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
