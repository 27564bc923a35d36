//! Lowering from the syntax tree to the editable model.
//!
//! Trivia in front of an entry becomes that entry's leading text; trivia
//! before a closing brace or at the end of the file is kept on the
//! enclosing body or file. Together with the recorded spans this is enough
//! to write every byte back unchanged.

use std::mem;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use text_size::{TextRange, TextSize};

use super::body::{Body, Item};
use super::menu::{Menu, MenuHeader};
use super::node::{Node, NodeHeader};
use super::param::Parameter;
use crate::base::FileId;
use crate::error::{MenuError, Result};
use crate::parser::{
    AstNode, BodyDecl, BodyElement, MenuDecl, NodeDecl, ParamDecl, SourceFile, SyntaxToken,
    parse,
};

/// Menus of one file plus the trivia after the last menu
pub(crate) struct LoweredFile {
    pub menus: Vec<Menu>,
    pub trailing: String,
}

/// Parse `text` and build its menus.
///
/// Menu names must be unique within the file and node names unique within
/// their menu.
pub(crate) fn lower_file(text: &str, file: FileId) -> Result<LoweredFile> {
    let parse = parse(text)?;
    let root = SourceFile::cast(parse.syntax()).ok_or_else(|| malformed(text, 0, "file"))?;
    let lowerer = Lowerer { text, file };

    let mut menus = Vec::new();
    let mut seen = FxHashSet::default();
    let mut pending = String::new();
    for element in root.syntax().children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(token) => pending.push_str(token.text()),
            rowan::NodeOrToken::Node(node) => {
                let Some(decl) = MenuDecl::cast(node) else {
                    continue;
                };
                let menu = lowerer.menu(&decl, mem::take(&mut pending))?;
                if !seen.insert(SmolStr::new(menu.name())) {
                    return Err(MenuError::DuplicateName {
                        scope: "file".to_string(),
                        name: menu.name().to_string(),
                    });
                }
                menus.push(menu);
            }
        }
    }

    Ok(LoweredFile {
        menus,
        trailing: pending,
    })
}

struct Lowerer<'a> {
    text: &'a str,
    file: FileId,
}

impl Lowerer<'_> {
    fn menu(&self, decl: &MenuDecl, leading: String) -> Result<Menu> {
        let range = decl.syntax().text_range();
        let keyword = self.token(decl.keyword(), range, "`menu`")?;
        let name = self.token(decl.name(), range, "menu name")?;
        let body = decl
            .body()
            .ok_or_else(|| self.missing(range, "menu body"))?;

        let header = MenuHeader {
            leading,
            keyword: SmolStr::new(keyword.text()),
            keyword_gap: self.between(keyword.text_range().end(), name.text_range().start()),
            name: SmolStr::new(name.text()),
            name_gap: self.between(name.text_range().end(), body.syntax().text_range().start()),
        };
        let body = self.body(&body, &header.name)?;
        Ok(Menu::from_source(header, body, self.file, range))
    }

    fn node(&self, decl: &NodeDecl, leading: String, menu: &SmolStr) -> Result<Node> {
        let range = decl.syntax().text_range();
        let name = self.token(decl.name(), range, "node name")?;
        let body = decl
            .body()
            .ok_or_else(|| self.missing(range, "node body"))?;
        let behaviour = decl.behaviour();

        let header = NodeHeader {
            leading,
            behaviour_gap: match &behaviour {
                Some(b) => self.between(b.text_range().end(), name.text_range().start()),
                None => String::new(),
            },
            behaviour: behaviour.map(|b| SmolStr::new(b.text())),
            name: SmolStr::new(name.text()),
            name_gap: self.between(name.text_range().end(), body.syntax().text_range().start()),
        };
        let body = self.body(&body, menu)?;
        Ok(Node::from_source(header, body, menu.clone(), range))
    }

    fn body(&self, decl: &BodyDecl, menu: &SmolStr) -> Result<Body> {
        let mut items = Vec::new();
        let mut seen = FxHashSet::default();
        let mut pending = String::new();
        for element in decl.elements() {
            match element {
                BodyElement::Trivia(token) => pending.push_str(token.text()),
                BodyElement::Param(param) => {
                    items.push(Item::Param(self.param(&param, mem::take(&mut pending))?));
                }
                BodyElement::Node(node) => {
                    let node = self.node(&node, mem::take(&mut pending), menu)?;
                    if !seen.insert(SmolStr::new(node.name())) {
                        return Err(MenuError::DuplicateName {
                            scope: format!("menu '{}'", menu),
                            name: node.name().to_string(),
                        });
                    }
                    items.push(Item::Node(node));
                }
            }
        }
        Ok(Body::from_items(items, pending))
    }

    fn param(&self, decl: &ParamDecl, leading: String) -> Result<Parameter> {
        let range = decl.syntax().text_range();
        let key = self.token(decl.key(), range, "parameter key")?;
        let value = decl
            .value()
            .ok_or_else(|| self.missing(range, "parameter value"))?;
        let value_range = value.syntax().text_range();
        Ok(Parameter::from_source(
            leading,
            SmolStr::new(key.text()),
            self.between(key.text_range().end(), value_range.start()),
            value.raw(),
            range,
        ))
    }

    fn token(&self, token: Option<SyntaxToken>, range: TextRange, what: &str) -> Result<SyntaxToken> {
        token.ok_or_else(|| self.missing(range, what))
    }

    fn between(&self, start: TextSize, end: TextSize) -> String {
        self.text
            .get(usize::from(start)..usize::from(end))
            .unwrap_or_default()
            .to_string()
    }

    fn missing(&self, range: TextRange, what: &str) -> MenuError {
        malformed(self.text, usize::from(range.start()), what)
    }
}

fn malformed(text: &str, offset: usize, expected: &str) -> MenuError {
    MenuError::Parse {
        expected: expected.to_string(),
        found: "incomplete syntax tree".to_string(),
        offset,
        line: text[..offset.min(text.len())].matches('\n').count() + 1,
    }
}
