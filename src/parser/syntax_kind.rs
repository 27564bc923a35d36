//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of a menu definition file.

/// All syntax kinds (tokens and nodes) of the menu language
///
/// Tokens are leaf nodes (words, strings, braces, trivia).
/// Nodes are composite (menus, nodes, parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,     // spaces and tabs
    NEWLINE,            // \n or \r\n
    LINE_COMMENT,       // // ...
    BLOCK_COMMENT,      // /* ... */

    // =========================================================================
    // LITERALS
    // =========================================================================
    WORD,               // bare token: keyword, name, key, number
    STRING,             // "quoted literal"

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    MENU,               // menu <name> BODY
    NODE,               // <behaviour> <name> BODY
    BODY,               // { ... }
    PARAM,              // <key> VALUE
    VALUE,              // WORD | STRING | BRACED
    BRACED,             // { any balanced tokens } used as a parameter value

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace, line break or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::NEWLINE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this token can stand as a parameter value
    pub fn is_literal(self) -> bool {
        matches!(self, Self::WORD | Self::STRING)
    }

    /// Human readable description used in parse errors
    pub fn describe(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::NEWLINE => "line break",
            Self::LINE_COMMENT | Self::BLOCK_COMMENT => "comment",
            Self::WORD => "word",
            Self::STRING => "string literal",
            Self::L_BRACE => "`{`",
            Self::R_BRACE => "`}`",
            Self::SOURCE_FILE => "file",
            Self::MENU => "menu",
            Self::NODE => "node",
            Self::BODY => "block",
            Self::PARAM => "parameter",
            Self::VALUE | Self::BRACED => "value",
            Self::__LAST => "<invalid>",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MenuLanguage {}

impl rowan::Language for MenuLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<MenuLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<MenuLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<MenuLanguage>;
