//! Parameter access shared by menus and nodes.

use smol_str::SmolStr;
use tracing::trace;

use super::body::Body;
use super::param::Parameter;
use super::value::{Value, is_bare_word, is_valid_literal};
use crate::base::constants::{POS_KEY, SIZE_KEY};
use crate::error::{EntryKind, MenuError, Result};
use crate::parser::is_node_body;

/// An entry that carries parameters: a [`Menu`](super::Menu) or a
/// [`Node`](super::Node).
///
/// Keys are not required to be unique; lookups and updates act on the first
/// parameter with a given key.
pub trait ParamOwner {
    /// Name used in error messages
    fn owner_name(&self) -> &str;

    fn body(&self) -> &Body;

    #[doc(hidden)]
    fn body_mut(&mut self) -> &mut Body;

    /// Whether `name { ... }` inside this entry can open a node
    #[doc(hidden)]
    fn holds_nodes(&self) -> bool {
        false
    }

    /// Parameters in source order
    fn params(&self) -> impl Iterator<Item = &Parameter> {
        self.body().params()
    }

    fn exists_param(&self, key: &str) -> bool {
        self.body().param(key).is_some()
    }

    fn get_param(&self, key: &str) -> Result<&Parameter> {
        self.body()
            .param(key)
            .ok_or_else(|| MenuError::not_found(EntryKind::Param, key))
    }

    /// Typed value of a parameter
    fn param_value(&self, key: &str) -> Result<&Value> {
        self.get_param(key).map(Parameter::value)
    }

    /// Set the literal of `key`, appending the parameter if it is missing.
    ///
    /// `literal` is written as given and must be a single word, a quoted
    /// string or a braced block. Only this parameter's text changes.
    ///
    /// On a menu a braced block made only of `key value` pairs is refused,
    /// as the file would read it back as a node.
    fn update_param(&mut self, key: &str, literal: &str) -> Result<()> {
        if !is_valid_literal(literal) {
            return Err(MenuError::MalformedValue {
                key: key.to_string(),
                literal: literal.to_string(),
                expected: "a word, a quoted string or a braced block",
            });
        }
        if self.holds_nodes() && is_node_body(literal) {
            return Err(MenuError::MalformedValue {
                key: key.to_string(),
                literal: literal.to_string(),
                expected: "a braced block that is not a node body",
            });
        }
        trace!(owner = self.owner_name(), key, literal, "update parameter");
        if let Some(param) = self.body_mut().param_mut(key) {
            param.set_raw(literal.to_string());
            return Ok(());
        }
        if !is_bare_word(key) {
            return Err(MenuError::InvalidName {
                kind: EntryKind::Param,
                name: key.to_string(),
            });
        }
        self.body_mut()
            .append_param(SmolStr::new(key), literal.to_string());
        Ok(())
    }

    /// Format `value` and store it under `key`
    fn set_value(&mut self, key: &str, value: impl Into<Value>) -> Result<()>
    where
        Self: Sized,
    {
        let literal = value.into().to_literal();
        self.update_param(key, &literal)
    }

    /// Change a key, keeping the parameter's position and literal.
    /// Renaming a key to itself changes nothing.
    fn rename_param(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.exists_param(old) {
            return Err(MenuError::not_found(EntryKind::Param, old));
        }
        if old == new {
            return Ok(());
        }
        if self.exists_param(new) {
            return Err(MenuError::DuplicateKey {
                key: new.to_string(),
                owner: self.owner_name().to_string(),
            });
        }
        if !is_bare_word(new) {
            return Err(MenuError::InvalidName {
                kind: EntryKind::Param,
                name: new.to_string(),
            });
        }
        trace!(owner = self.owner_name(), old, new, "rename parameter");
        if let Some(param) = self.body_mut().param_mut(old) {
            param.set_key(SmolStr::new(new));
        }
        Ok(())
    }

    /// Remove the first parameter with `key`, returning it
    fn remove_param(&mut self, key: &str) -> Result<Parameter> {
        trace!(owner = self.owner_name(), key, "remove parameter");
        self.body_mut()
            .remove_param(key)
            .ok_or_else(|| MenuError::not_found(EntryKind::Param, key))
    }

    fn pos(&self) -> Result<(i32, i32)> {
        self.get_param(POS_KEY)?.as_pair()
    }

    fn size(&self) -> Result<(i32, i32)> {
        self.get_param(SIZE_KEY)?.as_pair()
    }

    fn set_pos(&mut self, x: i32, y: i32) -> Result<()> {
        self.update_param(POS_KEY, &Value::pair(x, y).to_literal())
    }

    fn set_size(&mut self, width: i32, height: i32) -> Result<()> {
        self.update_param(SIZE_KEY, &Value::pair(width, height).to_literal())
    }
}
