//! Recursive descent parser for menu definition files
//!
//! Builds a rowan GreenNode tree from tokens. The tree is lossless: every
//! token, trivia included, is attached somewhere, so the tree text equals the
//! input. Unlike an IDE parser there is no error recovery; the first grammar
//! violation aborts the parse.

use super::lexer::{Lexer, Token, line_of, tokenize};
use super::syntax_kind::SyntaxKind;
use crate::base::constants::MENU_KEYWORD;
use crate::error::{MenuError, Result};
use rowan::{GreenNode, GreenNodeBuilder};

/// Parse result containing the green tree
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }
}

/// Parse menu source text into a CST
pub fn parse(input: &str) -> Result<Parse> {
    let tokens = Lexer::new(input).collect::<Result<Vec<_>>>()?;
    let mut parser = Parser::new(input, &tokens);
    parser.parse_source_file()?;
    Ok(parser.finish())
}

/// The parser state
struct Parser<'a> {
    input: &'a str,
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, tokens: &'a [Token<'a>]) -> Self {
        Self {
            input,
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().map(|t| t.kind) == Some(kind)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Kinds of the non-trivia tokens from the n-th one ahead
    fn kinds_from(&self, n: usize) -> impl Iterator<Item = SyntaxKind> + '_ {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .map(|t| t.kind)
            .filter(|k| !k.is_trivia())
            .skip(n)
    }

    /// Kind of the n-th non-trivia token ahead, `None` past the end
    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.kinds_from(n).next()
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> Result<()> {
        if self.at(kind) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(kind.describe()))
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&self, expected: impl Into<String>) -> MenuError {
        let (found, offset) = match self.current() {
            Some(token) if token.kind.is_literal() => (
                format!("{} `{}`", token.kind.describe(), token.text),
                u32::from(token.offset) as usize,
            ),
            Some(token) => (
                token.kind.describe().to_string(),
                u32::from(token.offset) as usize,
            ),
            None => ("end of file".to_string(), self.input.len()),
        };
        MenuError::Parse {
            expected: expected.into(),
            found,
            offset,
            line: line_of(self.input, offset),
        }
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = Menu*
    fn parse_source_file(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::SOURCE_FILE);
        loop {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            self.parse_menu()?;
        }
        self.finish_node();
        Ok(())
    }

    /// Menu = 'menu' WORD MenuBody
    fn parse_menu(&mut self) -> Result<()> {
        let is_menu = self
            .current()
            .map(|t| t.kind == SyntaxKind::WORD && t.text == MENU_KEYWORD)
            .unwrap_or(false);
        if !is_menu {
            return Err(self.error(format!("`{}`", MENU_KEYWORD)));
        }

        self.start_node(SyntaxKind::MENU);
        self.bump();
        self.skip_trivia();
        self.expect_name("menu name")?;
        self.skip_trivia();
        self.parse_body(true)?;
        self.finish_node();
        Ok(())
    }

    /// Node = WORD? WORD NodeBody
    fn parse_node(&mut self, has_behaviour: bool) -> Result<()> {
        self.start_node(SyntaxKind::NODE);
        if has_behaviour {
            self.bump();
            self.skip_trivia();
        }
        self.expect_name("node name")?;
        self.skip_trivia();
        self.parse_body(false)?;
        self.finish_node();
        Ok(())
    }

    /// MenuBody = '{' (Param | Node)* '}'
    /// NodeBody = '{' Param* '}'
    ///
    /// Trivia between items is attached to the body, never to an item.
    /// Inside a menu `name { ... }` is a node without behaviour when the
    /// block holds only `key value` pairs, and a parameter with a braced
    /// value (an event handler such as `init { cmd "a"; }`) otherwise.
    /// Inside a node the same shape is always a parameter.
    fn parse_body(&mut self, allow_nodes: bool) -> Result<()> {
        if !self.at(SyntaxKind::L_BRACE) {
            return Err(self.error(SyntaxKind::L_BRACE.describe()));
        }
        self.start_node(SyntaxKind::BODY);
        self.bump();

        loop {
            self.skip_trivia();
            match self.current().map(|t| t.kind) {
                Some(SyntaxKind::R_BRACE) => break,
                Some(SyntaxKind::WORD) => {
                    let bare_node = allow_nodes && holds_params(&mut self.kinds_from(1));
                    let is_node = self.nth(1).is_some_and(SyntaxKind::is_literal)
                        && self.nth(2) == Some(SyntaxKind::L_BRACE);
                    if allow_nodes && (is_node || bare_node) {
                        self.parse_node(is_node)?;
                    } else if is_node {
                        // Points the error at the name that would open a nested node
                        self.bump_until_nth(1);
                        return Err(self.error("`}` or parameter (nodes do not nest)"));
                    } else {
                        self.parse_param()?;
                    }
                }
                _ => {
                    let expected = if allow_nodes {
                        "`}`, parameter or node"
                    } else {
                        "`}` or parameter"
                    };
                    return Err(self.error(expected));
                }
            }
        }

        self.expect(SyntaxKind::R_BRACE)?;
        self.finish_node();
        Ok(())
    }

    /// Param = WORD Value
    fn parse_param(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::PARAM);
        self.bump(); // key
        self.skip_trivia();
        self.parse_value()?;
        self.finish_node();
        Ok(())
    }

    /// Value = WORD | STRING | Braced
    fn parse_value(&mut self) -> Result<()> {
        match self.current().map(|t| t.kind) {
            Some(SyntaxKind::WORD | SyntaxKind::STRING) => {
                self.start_node(SyntaxKind::VALUE);
                self.bump();
                self.finish_node();
                Ok(())
            }
            Some(SyntaxKind::L_BRACE) => {
                self.start_node(SyntaxKind::VALUE);
                self.parse_braced()?;
                self.finish_node();
                Ok(())
            }
            _ => Err(self.error("parameter value")),
        }
    }

    /// Braced = '{' (any token | Braced)* '}'
    fn parse_braced(&mut self) -> Result<()> {
        self.start_node(SyntaxKind::BRACED);
        self.bump(); // {
        loop {
            match self.current().map(|t| t.kind) {
                Some(SyntaxKind::R_BRACE) => break,
                Some(SyntaxKind::L_BRACE) => self.parse_braced()?,
                Some(_) => self.bump(),
                None => return Err(self.error(SyntaxKind::R_BRACE.describe())),
            }
        }
        self.bump(); // }
        self.finish_node();
        Ok(())
    }

    fn expect_name(&mut self, what: &str) -> Result<()> {
        if self.at(SyntaxKind::WORD) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(what))
        }
    }

    /// Advance the cursor (without building) so errors point at a later token
    fn bump_until_nth(&mut self, n: usize) {
        let mut seen = 0;
        while let Some(token) = self.current() {
            if !token.kind.is_trivia() {
                if seen == n {
                    break;
                }
                seen += 1;
            }
            self.pos += 1;
        }
    }
}

/// Whether `text` is a braced block of `key value` pairs, the shape of a
/// node body. At menu level `name` followed by such a block reads as a node.
pub fn is_node_body(text: &str) -> bool {
    match tokenize(text) {
        Ok(tokens) => {
            let mut kinds = tokens.iter().map(|t| t.kind).filter(|k| !k.is_trivia());
            holds_params(&mut kinds) && kinds.next().is_none()
        }
        Err(_) => false,
    }
}

/// Consume a `{ ... }` block from `kinds`, reporting whether it holds only
/// `key value` pairs. Values may be braced blocks of any content.
fn holds_params(kinds: &mut impl Iterator<Item = SyntaxKind>) -> bool {
    if kinds.next() != Some(SyntaxKind::L_BRACE) {
        return false;
    }
    loop {
        match kinds.next() {
            Some(SyntaxKind::R_BRACE) => return true,
            Some(SyntaxKind::WORD) => {}
            _ => return false,
        }
        match kinds.next() {
            Some(SyntaxKind::WORD | SyntaxKind::STRING) => {}
            Some(SyntaxKind::L_BRACE) => {
                if !skip_block(kinds) {
                    return false;
                }
            }
            _ => return false,
        }
    }
}

/// Skip to the brace closing an already opened block
fn skip_block(kinds: &mut impl Iterator<Item = SyntaxKind>) -> bool {
    let mut depth = 1usize;
    for kind in kinds {
        match kind {
            SyntaxKind::L_BRACE => depth += 1,
            SyntaxKind::R_BRACE => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
