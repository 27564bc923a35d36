//! Top-level menu blocks and the node operations on them.

use smol_str::SmolStr;
use text_size::TextRange;
use tracing::trace;

use super::body::Body;
use super::node::Node;
use super::owner::ParamOwner;
use super::value::is_bare_word;
use crate::base::FileId;
use crate::base::constants::MENU_KEYWORD;
use crate::error::{EntryKind, MenuError, Result};

/// A top-level `menu name { ... }` block.
///
/// Owns its nodes in source order; node names are unique within a menu.
#[derive(Debug, Clone)]
pub struct Menu {
    leading: String,
    keyword: SmolStr,
    keyword_gap: String,
    name: SmolStr,
    name_gap: String,
    body: Body,
    file: FileId,
    span: Option<TextRange>,
}

/// Source pieces of a menu header, as lowered from the syntax tree
pub(crate) struct MenuHeader {
    pub leading: String,
    pub keyword: SmolStr,
    pub keyword_gap: String,
    pub name: SmolStr,
    pub name_gap: String,
}

impl Menu {
    pub(crate) fn from_source(header: MenuHeader, body: Body, file: FileId, span: TextRange) -> Self {
        Self {
            leading: header.leading,
            keyword: header.keyword,
            keyword_gap: header.keyword_gap,
            name: header.name,
            name_gap: header.name_gap,
            body,
            file,
            span: Some(span),
        }
    }

    pub(crate) fn new(name: SmolStr, file: FileId, leading: String, line_break: &str) -> Self {
        Self {
            leading,
            keyword: SmolStr::new_static(MENU_KEYWORD),
            keyword_gap: " ".to_string(),
            name,
            name_gap: " ".to_string(),
            body: Body::empty(line_break.to_string()),
            file,
            span: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// File this menu is written back to
    pub fn file(&self) -> FileId {
        self.file
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn span(&self) -> Option<TextRange> {
        self.span
    }

    pub fn is_pristine(&self) -> bool {
        self.span.is_some() && self.body.is_pristine()
    }

    // =========================================================================
    // Nodes
    // =========================================================================

    /// Nodes in source order
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.body.nodes()
    }

    pub fn child(&self, name: &str) -> Result<&Node> {
        self.body
            .node(name)
            .ok_or_else(|| MenuError::not_found(EntryKind::Node, name))
    }

    pub fn child_mut(&mut self, name: &str) -> Result<&mut Node> {
        self.body
            .node_mut(name)
            .ok_or_else(|| MenuError::not_found(EntryKind::Node, name))
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.body.has_node(name)
    }

    /// Append an empty node after the existing items.
    ///
    /// An empty `behaviour` creates a bare `name { }` node.
    pub fn add_node(&mut self, behaviour: &str, name: &str) -> Result<&mut Node> {
        let behaviour = if behaviour.is_empty() {
            None
        } else {
            Some(valid_name(EntryKind::Node, behaviour)?)
        };
        let name = valid_name(EntryKind::Node, name)?;
        let node = Node::new(behaviour, name, self.name.clone());
        self.insert_node(node)
    }

    /// Append an existing node, for example one removed from another menu.
    ///
    /// The node is re-indented and written out from its pieces.
    pub fn insert_node(&mut self, mut node: Node) -> Result<&mut Node> {
        if self.body.has_node(node.name()) {
            return Err(self.duplicate(node.name()));
        }
        trace!(menu = %self.name, node = node.name(), "insert node");
        let name = SmolStr::new(node.name());
        node.detach();
        node.set_menu(self.name.clone());
        self.body.push_node(node);
        self.child_mut(&name)
    }

    pub fn remove_node(&mut self, name: &str) -> Result<Node> {
        trace!(menu = %self.name, node = name, "remove node");
        self.body
            .remove_node(name)
            .ok_or_else(|| MenuError::not_found(EntryKind::Node, name))
    }

    pub fn rename_node(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.body.has_node(old) {
            return Err(MenuError::not_found(EntryKind::Node, old));
        }
        if self.body.has_node(new) {
            return Err(self.duplicate(new));
        }
        let new = valid_name(EntryKind::Node, new)?;
        trace!(menu = %self.name, old, new = %new, "rename node");
        self.body.rename_node(old, new);
        Ok(())
    }

    /// Copy node `source` under `name`, appended after the existing items
    pub fn clone_node(&mut self, source: &str, name: &str) -> Result<&mut Node> {
        let mut copy = self.child(source)?.clone();
        copy.set_name(valid_name(EntryKind::Node, name)?);
        self.insert_node(copy)
    }

    /// Topmost node whose rectangle contains `(x, y)`.
    ///
    /// Later nodes are drawn over earlier ones, so the last match wins.
    pub fn node_at(&self, x: i32, y: i32) -> Option<&Node> {
        self.children().filter(|n| n.contains(x, y)).last()
    }

    // =========================================================================
    // Crate internal
    // =========================================================================

    pub(crate) fn leading(&self) -> &str {
        &self.leading
    }

    pub(crate) fn keyword(&self) -> &str {
        &self.keyword
    }

    pub(crate) fn keyword_gap(&self) -> &str {
        &self.keyword_gap
    }

    pub(crate) fn name_gap(&self) -> &str {
        &self.name_gap
    }

    pub(crate) fn set_name(&mut self, name: SmolStr) {
        for node in self.body.nodes_mut() {
            node.set_menu(name.clone());
        }
        self.name = name;
        self.span = None;
    }

    fn duplicate(&self, name: &str) -> MenuError {
        MenuError::DuplicateName {
            scope: format!("menu '{}'", self.name),
            name: name.to_string(),
        }
    }
}

impl ParamOwner for Menu {
    fn owner_name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn holds_nodes(&self) -> bool {
        true
    }
}

pub(crate) fn valid_name(kind: EntryKind, name: &str) -> Result<SmolStr> {
    if is_bare_word(name) {
        Ok(SmolStr::new(name))
    } else {
        Err(MenuError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}
