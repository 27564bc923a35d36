//! Braced bodies shared by menus and nodes.
//!
//! Items keep their source order; inserted entries borrow the layout of
//! their neighbours.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::layout;
use super::node::Node;
use super::param::Parameter;

/// An entry of a braced body, in source order
#[derive(Debug, Clone)]
pub enum Item {
    Param(Parameter),
    Node(Node),
}

impl Item {
    pub(crate) fn leading(&self) -> &str {
        match self {
            Item::Param(p) => p.leading(),
            Item::Node(n) => n.leading(),
        }
    }

    pub fn is_pristine(&self) -> bool {
        match self {
            Item::Param(p) => p.is_pristine(),
            Item::Node(n) => n.is_pristine(),
        }
    }
}

/// Contents of a `{ ... }` block: parameters and nodes interleaved as in
/// the source, plus the trivia before the closing brace.
#[derive(Debug, Clone, Default)]
pub struct Body {
    items: Vec<Item>,
    trailing: String,
    /// Node name -> position in `items`
    nodes: FxHashMap<SmolStr, usize>,
    /// Set once an item was inserted or removed
    reshaped: bool,
}

impl Body {
    pub(crate) fn from_items(items: Vec<Item>, trailing: String) -> Self {
        let mut body = Self {
            items,
            trailing,
            nodes: FxHashMap::default(),
            reshaped: false,
        };
        body.reindex();
        body
    }

    pub(crate) fn empty(trailing: String) -> Self {
        Self::from_items(Vec::new(), trailing)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn params(&self) -> impl Iterator<Item = &Parameter> {
        self.items.iter().filter_map(|item| match item {
            Item::Param(p) => Some(p),
            Item::Node(_) => None,
        })
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.items.iter().filter_map(|item| match item {
            Item::Node(n) => Some(n),
            Item::Param(_) => None,
        })
    }

    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.items.iter_mut().filter_map(|item| match item {
            Item::Node(n) => Some(n),
            Item::Param(_) => None,
        })
    }

    /// First parameter with `key`
    pub fn param(&self, key: &str) -> Option<&Parameter> {
        self.params().find(|p| p.key() == key)
    }

    pub(crate) fn param_mut(&mut self, key: &str) -> Option<&mut Parameter> {
        self.items.iter_mut().find_map(|item| match item {
            Item::Param(p) if p.key() == key => Some(p),
            _ => None,
        })
    }

    pub fn node(&self, name: &str) -> Option<&Node> {
        match self.items.get(*self.nodes.get(name)?) {
            Some(Item::Node(n)) => Some(n),
            _ => None,
        }
    }

    pub(crate) fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        let index = *self.nodes.get(name)?;
        match self.items.get_mut(index) {
            Some(Item::Node(n)) => Some(n),
            _ => None,
        }
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Unedited since load: no item added or removed and every item pristine
    pub fn is_pristine(&self) -> bool {
        !self.reshaped && self.items.iter().all(Item::is_pristine)
    }

    pub(crate) fn trailing(&self) -> &str {
        &self.trailing
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    /// Append a parameter after the last existing parameter, before any node
    pub(crate) fn append_param(&mut self, key: SmolStr, raw: String) {
        let index = self
            .items
            .iter()
            .rposition(|item| matches!(item, Item::Param(_)))
            .map_or(0, |i| i + 1);
        let leading = match index.checked_sub(1).and_then(|i| self.items.get(i)) {
            Some(previous) => layout::leading_like(previous.leading()),
            None => self.leading_for_end_or_first(),
        };
        let leading = self.keep_line_comment(index, leading);
        self.items
            .insert(index, Item::Param(Parameter::new(leading, key, raw)));
        self.reshaped = true;
        self.reindex();
    }

    pub(crate) fn remove_param(&mut self, key: &str) -> Option<Parameter> {
        let index = self
            .items
            .iter()
            .position(|item| matches!(item, Item::Param(p) if p.key() == key))?;
        self.reshaped = true;
        let removed = match self.items.remove(index) {
            Item::Param(p) => Some(p),
            Item::Node(_) => None,
        };
        self.reindex();
        removed
    }

    /// Append a node after every existing item, re-indenting it to match
    pub(crate) fn push_node(&mut self, mut node: Node) {
        let leading = match self.items.last() {
            Some(last) => layout::leading_like(last.leading()),
            None => self.leading_for_end_or_first(),
        };
        let leading = self.keep_line_comment(self.items.len(), leading);
        node.set_leading(leading);
        self.items.push(Item::Node(node));
        self.reshaped = true;
        self.reindex();
    }

    pub(crate) fn remove_node(&mut self, name: &str) -> Option<Node> {
        let index = *self.nodes.get(name)?;
        self.reshaped = true;
        let removed = match self.items.remove(index) {
            Item::Node(n) => Some(n),
            Item::Param(_) => None,
        };
        self.reindex();
        removed
    }

    /// Rename a node in place; the caller checks for collisions
    pub(crate) fn rename_node(&mut self, old: &str, new: SmolStr) -> bool {
        let Some(index) = self.nodes.remove(old) else {
            return false;
        };
        if let Some(Item::Node(n)) = self.items.get_mut(index) {
            n.set_name(new.clone());
        }
        self.nodes.insert(new, index);
        true
    }

    /// Forget all source spans so everything is rebuilt from its pieces
    pub(crate) fn detach(&mut self) {
        for item in &mut self.items {
            match item {
                Item::Param(p) => p.detach(),
                Item::Node(n) => n.detach(),
            }
        }
    }

    /// Prefix `leading` with the `// comment` ending the line before an
    /// insertion at `index`, so the comment stays beside the entry it
    /// annotates instead of moving after the inserted one.
    fn keep_line_comment(&mut self, index: usize, leading: String) -> String {
        let following = match self.items.get(index) {
            Some(item) => item.leading(),
            None => self.trailing.as_str(),
        };
        let Some(end) = layout::line_comment_end(following) else {
            return leading;
        };
        let comment = following[..end].to_string();
        let rest = following[end..].to_string();
        match self.items.get_mut(index) {
            Some(Item::Param(p)) => p.set_leading(rest),
            Some(Item::Node(n)) => n.set_leading(rest),
            None => self.trailing = rest,
        }
        format!("{comment}{leading}")
    }

    fn leading_for_end_or_first(&mut self) -> String {
        if let Some(first) = self.items.first() {
            return layout::leading_like(first.leading());
        }
        if self.trailing.is_empty() {
            self.trailing = " ".to_string();
        }
        layout::leading_in_empty(&self.trailing)
    }

    fn reindex(&mut self) {
        self.nodes.clear();
        for (index, item) in self.items.iter().enumerate() {
            if let Item::Node(n) = item {
                self.nodes.insert(SmolStr::new(n.name()), index);
            }
        }
    }
}
