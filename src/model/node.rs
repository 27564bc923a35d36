//! Nodes, the UI elements of a menu.

use smol_str::SmolStr;
use text_size::TextRange;

use super::body::Body;
use super::layout;
use super::owner::ParamOwner;

/// A UI element inside a menu: `behaviour name { params }`.
///
/// Nodes do not nest. A node knows the name of its owning menu, kept in
/// sync when the menu is renamed.
#[derive(Debug, Clone)]
pub struct Node {
    leading: String,
    behaviour: Option<SmolStr>,
    behaviour_gap: String,
    name: SmolStr,
    name_gap: String,
    body: Body,
    menu: SmolStr,
    span: Option<TextRange>,
}

/// Source pieces of a node header, as lowered from the syntax tree
pub(crate) struct NodeHeader {
    pub leading: String,
    pub behaviour: Option<SmolStr>,
    pub behaviour_gap: String,
    pub name: SmolStr,
    pub name_gap: String,
}

impl Node {
    pub(crate) fn from_source(
        header: NodeHeader,
        body: Body,
        menu: SmolStr,
        span: TextRange,
    ) -> Self {
        Self {
            leading: header.leading,
            behaviour: header.behaviour,
            behaviour_gap: header.behaviour_gap,
            name: header.name,
            name_gap: header.name_gap,
            body,
            menu,
            span: Some(span),
        }
    }

    /// Fresh node with an empty body; indentation is fixed up on insertion
    pub(crate) fn new(behaviour: Option<SmolStr>, name: SmolStr, menu: SmolStr) -> Self {
        Self {
            leading: String::new(),
            behaviour_gap: if behaviour.is_some() { " " } else { "" }.to_string(),
            behaviour,
            name,
            name_gap: " ".to_string(),
            body: Body::empty(" ".to_string()),
            menu,
            span: None,
        }
    }

    /// Behaviour tag such as `button` or `text`, `None` for bare nodes
    pub fn behaviour(&self) -> Option<&str> {
        self.behaviour.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the owning menu
    pub fn menu_name(&self) -> &str {
        &self.menu
    }

    /// `menu.node` path, the form used by menu scripts to address a node
    pub fn path(&self) -> String {
        format!("{}.{}", self.menu, self.name)
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

    /// Check whether `(x, y)` lies inside the rectangle given by `pos` and
    /// `size`. Nodes without a well-formed rectangle contain nothing.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        match (self.pos(), self.size()) {
            (Ok((px, py)), Ok((w, h))) => {
                x >= px && y >= py && x < px.saturating_add(w) && y < py.saturating_add(h)
            }
            _ => false,
        }
    }

    // =========================================================================
    // Crate internal
    // =========================================================================

    pub(crate) fn leading(&self) -> &str {
        &self.leading
    }

    pub(crate) fn behaviour_gap(&self) -> &str {
        &self.behaviour_gap
    }

    pub(crate) fn name_gap(&self) -> &str {
        &self.name_gap
    }

    pub(crate) fn set_leading(&mut self, leading: String) {
        // An empty `{ }` body of a fresh node follows the node's own indentation
        if self.span.is_none()
            && self.body.items().is_empty()
            && self.body.trailing().trim().is_empty()
        {
            self.body = Body::empty(layout::closing_for(&leading));
        }
        self.leading = leading;
    }

    pub(crate) fn set_name(&mut self, name: SmolStr) {
        self.name = name;
        self.span = None;
    }

    pub(crate) fn set_menu(&mut self, menu: SmolStr) {
        self.menu = menu;
    }

    pub(crate) fn detach(&mut self) {
        self.span = None;
        self.body.detach();
    }
}

impl ParamOwner for Node {
    fn owner_name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
