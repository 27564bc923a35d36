//! Logos-based lexer for menu definition files
//!
//! Every byte of the input ends up in exactly one token, trivia included,
//! so the token stream can be replayed to rebuild the original text.

use super::syntax_kind::SyntaxKind;
use crate::base::LineIndex;
use crate::error::{MenuError, Result};
use logos::Logos;
use rowan::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    /// Byte span of this token in the original text
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
///
/// Lazy and non-restartable: once an error is yielded the lexer is fused.
pub struct Lexer<'a> {
    input: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            inner: LogosToken::lexer(input),
            failed: false,
        }
    }

    fn error(&mut self, message: impl Into<String>, offset: usize) -> MenuError {
        self.failed = true;
        MenuError::Lex {
            message: message.into(),
            offset,
            line: line_of(self.input, offset),
        }
    }
}

impl Lexer<'_> {
    /// Extend a word over a `/` that ends it (`pics/`).
    ///
    /// The word pattern only takes a slash followed by another word
    /// character, so a closing one is left over here.
    fn take_closing_slash(&mut self) {
        let rest = self.inner.remainder();
        if rest.starts_with('/') && !rest[1..].starts_with(['/', '*']) {
            self.inner.bump(1);
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let start = self.inner.span().start;

        let kind = match logos_token {
            Ok(LogosToken::UnterminatedString) => {
                return Some(Err(self.error("unterminated string literal", start)));
            }
            Ok(LogosToken::UnterminatedComment) => {
                return Some(Err(self.error("unterminated block comment", start)));
            }
            Ok(LogosToken::Word) => {
                self.take_closing_slash();
                SyntaxKind::WORD
            }
            Ok(t) => t.kind(),
            Err(()) => {
                let found = text.chars().next().unwrap_or('\0');
                return Some(Err(
                    self.error(format!("unexpected character {:?}", found), start)
                ));
            }
        };

        let end = self.inner.span().end;
        Some(Ok(Token {
            kind,
            text: &self.input[start..end],
            offset: TextSize::new(start as u32),
        }))
    }
}

/// Tokenize an entire string, failing on the first lexical error
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>> {
    Lexer::new(input).collect()
}

/// 1-based line number of a byte offset
pub(crate) fn line_of(input: &str, offset: usize) -> usize {
    LineIndex::new(input).position(offset.min(input.len())).line + 1
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\x0C]+")]
    #[token("\r")]
    #[token("\u{FEFF}")]
    Whitespace,

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r#""[^"]*"#)]
    UnterminatedString,

    #[regex(r#"([^\s{}"/\x{FEFF}]|/[^\s{}"/*\x{FEFF}])+"#)]
    Word,

    /// A slash that does not open a comment and has no word before it
    #[token("/")]
    Slash,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,
}

impl LogosToken {
    fn kind(self) -> SyntaxKind {
        match self {
            Self::Whitespace => SyntaxKind::WHITESPACE,
            Self::Newline => SyntaxKind::NEWLINE,
            Self::LineComment => SyntaxKind::LINE_COMMENT,
            Self::BlockComment | Self::UnterminatedComment => SyntaxKind::BLOCK_COMMENT,
            Self::String | Self::UnterminatedString => SyntaxKind::STRING,
            Self::Word | Self::Slash => SyntaxKind::WORD,
            Self::LBrace => SyntaxKind::L_BRACE,
            Self::RBrace => SyntaxKind::R_BRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lexer_menu_header() {
        assert_eq!(
            kinds("menu main {"),
            vec![
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::L_BRACE,
            ]
        );
    }

    #[test]
    fn test_lexer_string_is_single_token() {
        let tokens = tokenize("pos \"10  20\"").unwrap();
        assert_eq!(tokens[2].kind, SyntaxKind::STRING);
        assert_eq!(tokens[2].text, "\"10  20\"");
        assert_eq!(tokens[2].range(), TextRange::new(4.into(), 12.into()));
    }

    #[test]
    fn test_lexer_newlines_and_comments() {
        assert_eq!(
            kinds("a // note\r\n/* x\n y */b"),
            vec![
                SyntaxKind::WORD,
                SyntaxKind::WHITESPACE,
                SyntaxKind::LINE_COMMENT,
                SyntaxKind::NEWLINE,
                SyntaxKind::BLOCK_COMMENT,
                SyntaxKind::WORD,
            ]
        );
    }

    #[test]
    fn test_lexer_word_with_slashes() {
        let tokens = tokenize("image pics/menu/bg").unwrap();
        assert_eq!(tokens[2].kind, SyntaxKind::WORD);
        assert_eq!(tokens[2].text, "pics/menu/bg");
    }

    #[rstest]
    #[case("image pics/", &["image", " ", "pics/"])]
    #[case("string / }", &["string", " ", "/", " ", "}"])]
    #[case("a/b/{", &["a/b/", "{"])]
    #[case("/root/ x", &["/root/", " ", "x"])]
    #[case("pics/ // note", &["pics/", " ", "// note"])]
    #[case("pics// note", &["pics", "// note"])]
    #[case("a/* c */", &["a", "/* c */"])]
    fn test_lexer_slash_words(#[case] input: &str, #[case] expected: &[&str]) {
        let texts: Vec<&str> = tokenize(input).unwrap().iter().map(|t| t.text).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_lexer_lone_slash_is_word() {
        assert_eq!(
            kinds("/ /"),
            vec![SyntaxKind::WORD, SyntaxKind::WHITESPACE, SyntaxKind::WORD]
        );
    }

    #[test]
    fn test_lexer_byte_order_mark_is_trivia() {
        let tokens = tokenize("\u{FEFF}menu m { }").unwrap();
        assert_eq!(tokens[0].kind, SyntaxKind::WHITESPACE);
        assert_eq!(tokens[0].text, "\u{FEFF}");
        assert_eq!(tokens[1].kind, SyntaxKind::WORD);
        assert_eq!(tokens[1].text, "menu");
    }

    #[test]
    fn test_lexer_unterminated_string() {
        let err = tokenize("menu a {\n\tstring \"oops\n}").unwrap_err();
        match err {
            MenuError::Lex { offset, line, .. } => {
                assert_eq!(offset, 17);
                assert_eq!(line, 2);
            }
            other => panic!("expected lex error, got {other:?}"),
        }
    }

    #[test]
    fn test_lexer_is_fused_after_error() {
        let mut lexer = Lexer::new("\"open");
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_lexer_tokens_cover_input() {
        let input = "menu m {\n\t// c\n\tpos \"1 2\" }\n";
        let rebuilt: String = tokenize(input).unwrap().iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, input);
    }
}
