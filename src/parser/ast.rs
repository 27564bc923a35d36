//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for menu syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! The editable document model is lowered from these wrappers.

use super::syntax_kind::SyntaxKind;
use super::{SyntaxElement, SyntaxNode, SyntaxToken};

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Direct WORD tokens of a node, in order
fn words(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(SyntaxElement::into_token)
        .filter(|t| t.kind() == SyntaxKind::WORD)
}

// ============================================================================
// Root
// ============================================================================

ast_node!(SourceFile, SOURCE_FILE);

impl SourceFile {
    pub fn menus(&self) -> impl Iterator<Item = MenuDecl> + '_ {
        self.0.children().filter_map(MenuDecl::cast)
    }
}

// ============================================================================
// Menu
// ============================================================================

ast_node!(MenuDecl, MENU);

impl MenuDecl {
    /// The `menu` keyword
    pub fn keyword(&self) -> Option<SyntaxToken> {
        words(&self.0).next()
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        words(&self.0).nth(1)
    }

    pub fn body(&self) -> Option<BodyDecl> {
        self.0.children().find_map(BodyDecl::cast)
    }
}

// ============================================================================
// Node
// ============================================================================

ast_node!(NodeDecl, NODE);

impl NodeDecl {
    /// Behaviour tag, absent for `name { ... }` nodes
    pub fn behaviour(&self) -> Option<SyntaxToken> {
        let mut words = words(&self.0);
        let first = words.next();
        words.next().and(first)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        words(&self.0).last()
    }

    pub fn body(&self) -> Option<BodyDecl> {
        self.0.children().find_map(BodyDecl::cast)
    }
}

// ============================================================================
// Body
// ============================================================================

ast_node!(BodyDecl, BODY);

/// An element of a body: an item or the trivia between items
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BodyElement {
    Param(ParamDecl),
    Node(NodeDecl),
    Trivia(SyntaxToken),
}

impl BodyDecl {
    /// Items and trivia between the braces, in source order
    pub fn elements(&self) -> impl Iterator<Item = BodyElement> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|element| match element {
                rowan::NodeOrToken::Node(node) => match node.kind() {
                    SyntaxKind::PARAM => Some(BodyElement::Param(ParamDecl(node))),
                    SyntaxKind::NODE => Some(BodyElement::Node(NodeDecl(node))),
                    _ => None,
                },
                rowan::NodeOrToken::Token(token) if token.kind().is_trivia() => {
                    Some(BodyElement::Trivia(token))
                }
                rowan::NodeOrToken::Token(_) => None,
            })
    }

    pub fn params(&self) -> impl Iterator<Item = ParamDecl> + '_ {
        self.0.children().filter_map(ParamDecl::cast)
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeDecl> + '_ {
        self.0.children().filter_map(NodeDecl::cast)
    }

    pub fn l_brace(&self) -> Option<SyntaxToken> {
        self.0.first_token().filter(|t| t.kind() == SyntaxKind::L_BRACE)
    }

    pub fn r_brace(&self) -> Option<SyntaxToken> {
        self.0.last_token().filter(|t| t.kind() == SyntaxKind::R_BRACE)
    }
}

// ============================================================================
// Parameter
// ============================================================================

ast_node!(ParamDecl, PARAM);

impl ParamDecl {
    pub fn key(&self) -> Option<SyntaxToken> {
        words(&self.0).next()
    }

    pub fn value(&self) -> Option<ValueDecl> {
        self.0.children().find_map(ValueDecl::cast)
    }
}

ast_node!(ValueDecl, VALUE);

impl ValueDecl {
    /// Literal exactly as written, quotes and braces included
    pub fn raw(&self) -> String {
        self.0.text().to_string()
    }

    pub fn is_string(&self) -> bool {
        self.0
            .first_token()
            .is_some_and(|t| t.kind() == SyntaxKind::STRING)
    }

    pub fn is_braced(&self) -> bool {
        self.0.first_child().is_some_and(|n| n.kind() == SyntaxKind::BRACED)
    }
}
