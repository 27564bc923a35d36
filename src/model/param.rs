//! Parameters: `key value` entries with a lazily parsed value.

use std::cell::OnceCell;

use smol_str::SmolStr;
use text_size::TextRange;

use super::value::{Value, unquote};
use crate::error::{MenuError, Result};

/// A `key value` entry of a menu or node.
///
/// The literal is kept exactly as written; [`Parameter::value`] parses it on
/// first access. A parameter loaded from disk remembers its span and is
/// written back byte-for-byte until it is edited.
#[derive(Debug, Clone)]
pub struct Parameter {
    leading: String,
    key: SmolStr,
    separator: String,
    raw: String,
    typed: OnceCell<Value>,
    span: Option<TextRange>,
}

impl Parameter {
    pub(crate) fn from_source(
        leading: String,
        key: SmolStr,
        separator: String,
        raw: String,
        span: TextRange,
    ) -> Self {
        Self {
            leading,
            key,
            separator,
            raw,
            typed: OnceCell::new(),
            span: Some(span),
        }
    }

    pub(crate) fn new(leading: String, key: SmolStr, raw: String) -> Self {
        Self {
            leading,
            key,
            separator: " ".to_string(),
            raw,
            typed: OnceCell::new(),
            span: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Literal as written, quotes and braces included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Literal with surrounding quotes removed
    pub fn text(&self) -> &str {
        unquote(&self.raw).unwrap_or(&self.raw)
    }

    pub fn value(&self) -> &Value {
        self.typed.get_or_init(|| Value::parse(&self.raw))
    }

    /// Read the literal as an integer pair such as `"50 113"`
    pub fn as_pair(&self) -> Result<(i32, i32)> {
        self.value().as_pair().ok_or_else(|| MenuError::MalformedValue {
            key: self.key.to_string(),
            literal: self.raw.clone(),
            expected: "two integers",
        })
    }

    /// Byte range in the source file, `None` once edited or if never loaded
    pub fn span(&self) -> Option<TextRange> {
        self.span
    }

    pub fn is_pristine(&self) -> bool {
        self.span.is_some()
    }

    pub(crate) fn leading(&self) -> &str {
        &self.leading
    }

    pub(crate) fn separator(&self) -> &str {
        &self.separator
    }

    pub(crate) fn set_leading(&mut self, leading: String) {
        self.leading = leading;
    }

    pub(crate) fn set_raw(&mut self, raw: String) {
        self.raw = raw;
        self.typed = OnceCell::new();
        self.span = None;
    }

    pub(crate) fn set_key(&mut self, key: SmolStr) {
        self.key = key;
        self.span = None;
    }

    pub(crate) fn detach(&mut self) {
        self.span = None;
    }
}
