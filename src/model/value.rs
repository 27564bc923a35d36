//! Typed view of parameter literals.
//!
//! On disk a value is a bare word (`ul`, `42`), a quoted string
//! (`"_Video options"`, `"50 113"`) or a braced handler block. [`Value`]
//! classifies a literal and formats a typed value back into the on-disk
//! form, so callers never hand-build quoted strings.

use std::fmt;

use smol_str::SmolStr;

use crate::parser::{SyntaxKind, tokenize};

/// A single scalar value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Bare number: `42`, `-3`, `0.5`
    Number(f64),
    /// Bare word: `ul`, `true`, `*cvar:foo`
    Word(SmolStr),
    /// Quoted text, stored without its quotes
    Text(String),
}

/// Typed view of a parameter literal
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Literal kept verbatim (braced handler blocks)
    Raw(String),
    Scalar(Scalar),
    /// Quoted, whitespace separated numbers: `"50 113"`
    Tuple(Vec<f64>),
}

impl Value {
    /// Classify an on-disk literal
    pub fn parse(literal: &str) -> Value {
        if literal.starts_with('{') {
            return Value::Raw(literal.to_string());
        }
        if let Some(inner) = unquote(literal) {
            let parts: Vec<&str> = inner.split_whitespace().collect();
            if parts.len() >= 2 {
                let numbers: Option<Vec<f64>> = parts.iter().map(|p| parse_number(p)).collect();
                if let Some(numbers) = numbers {
                    return Value::Tuple(numbers);
                }
            }
            return Value::Scalar(Scalar::Text(inner.to_string()));
        }
        match parse_number(literal) {
            Some(n) => Value::Scalar(Scalar::Number(n)),
            None => Value::Scalar(Scalar::Word(SmolStr::new(literal))),
        }
    }

    /// Two-element integer tuple, the shape of `pos` and `size`
    pub fn pair(a: i32, b: i32) -> Value {
        Value::Tuple(vec![f64::from(a), f64::from(b)])
    }

    pub fn number(n: impl Into<f64>) -> Value {
        Value::Scalar(Scalar::Number(n.into()))
    }

    pub fn word(word: impl Into<SmolStr>) -> Value {
        Value::Scalar(Scalar::Word(word.into()))
    }

    pub fn text(text: impl Into<String>) -> Value {
        Value::Scalar(Scalar::Text(text.into()))
    }

    /// Format into the on-disk literal.
    ///
    /// Tuples are quoted with single spaces, numbers and valid bare words are
    /// written bare, everything else is quoted.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Raw(raw) => raw.clone(),
            Value::Scalar(Scalar::Number(n)) => format_number(*n),
            Value::Scalar(Scalar::Word(w)) if is_bare_word(w) => w.to_string(),
            Value::Scalar(Scalar::Word(w)) => format!("\"{}\"", w),
            Value::Scalar(Scalar::Text(t)) => format!("\"{}\"", t),
            Value::Tuple(items) => {
                let parts: Vec<String> = items.iter().map(|n| format_number(*n)).collect();
                format!("\"{}\"", parts.join(" "))
            }
        }
    }

    /// Integer pair view of a two-element tuple
    pub fn as_pair(&self) -> Option<(i32, i32)> {
        match self {
            Value::Tuple(items) if items.len() == 2 => {
                Some((as_int(items[0])?, as_int(items[1])?))
            }
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Scalar(Scalar::Number(n)) => Some(*n),
            Value::Scalar(Scalar::Text(t)) => parse_number(t.trim()),
            _ => None,
        }
    }

    /// Word or text content, without quotes
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Word(w)) => Some(w.as_str()),
            Value::Scalar(Scalar::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl From<(i32, i32)> for Value {
    fn from((a, b): (i32, i32)) -> Self {
        Value::pair(a, b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::number(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::number(n)
    }
}

impl From<Vec<f64>> for Value {
    fn from(items: Vec<f64>) -> Self {
        Value::Tuple(items)
    }
}

/// Content of a `"..."` literal, `None` if not quoted
pub fn unquote(literal: &str) -> Option<&str> {
    literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
}

/// Check that `text` lexes back as a single bare word.
///
/// Keys, behaviours and names must satisfy this to be written unquoted.
pub fn is_bare_word(text: &str) -> bool {
    match tokenize(text) {
        Ok(tokens) => tokens.len() == 1 && tokens[0].kind == SyntaxKind::WORD,
        Err(_) => false,
    }
}

/// Check that `literal` lexes back as exactly one parameter value: a bare
/// word, a quoted string, or a balanced braced block.
pub fn is_valid_literal(literal: &str) -> bool {
    let Ok(tokens) = tokenize(literal) else {
        return false;
    };
    match tokens.as_slice() {
        [single] => single.kind.is_literal(),
        [first, .., last]
            if first.kind == SyntaxKind::L_BRACE && last.kind == SyntaxKind::R_BRACE =>
        {
            let mut depth = 0usize;
            for (i, token) in tokens.iter().enumerate() {
                match token.kind {
                    SyntaxKind::L_BRACE => depth += 1,
                    SyntaxKind::R_BRACE => {
                        depth = match depth.checked_sub(1) {
                            Some(d) => d,
                            None => return false,
                        };
                        if depth == 0 && i + 1 != tokens.len() {
                            return false;
                        }
                    }
                    _ => {}
                }
            }
            depth == 0
        }
        _ => false,
    }
}

fn parse_number(text: &str) -> Option<f64> {
    let first = text.chars().next()?;
    if !(first.is_ascii_digit() || matches!(first, '-' | '+' | '.')) {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn as_int(n: f64) -> Option<i32> {
    if n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
        Some(n as i32)
    } else {
        None
    }
}
