//! Whitespace inference for inserted entries.
//!
//! New parameters and nodes copy the indentation of their neighbours so an
//! edited file still looks hand-written. Nothing here touches existing
//! trivia.

use crate::base::constants::INDENT_UNIT;

/// Line break style used by `sample`, `\n` if it has none
pub(crate) fn line_break(sample: &str) -> &'static str {
    if sample.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Whitespace after the last line break of `trivia`, `None` on a single line
pub(crate) fn indent_of(trivia: &str) -> Option<&str> {
    let start = trivia.rfind('\n')? + 1;
    let rest = &trivia[start..];
    let end = rest
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Leading trivia for an item placed next to a sibling with `neighbour`
/// leading trivia.
///
/// Comments attached to the neighbour are not copied, only its line break
/// and indentation.
pub(crate) fn leading_like(neighbour: &str) -> String {
    match indent_of(neighbour) {
        Some(indent) => format!("{}{}", line_break(neighbour), indent),
        None => " ".to_string(),
    }
}

/// End of a `// comment` that `trivia` opens on the line it starts on,
/// before the line break. `None` if the first line holds no such comment.
pub(crate) fn line_comment_end(trivia: &str) -> Option<usize> {
    let line = &trivia[..trivia.find('\n')?];
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.trim_start_matches([' ', '\t'])
        .starts_with("//")
        .then_some(line.len())
}

/// Leading trivia for the first item of a body whose closing brace is
/// preceded by `trailing`.
pub(crate) fn leading_in_empty(trailing: &str) -> String {
    match indent_of(trailing) {
        Some(indent) => format!("{}{}{}", line_break(trailing), indent, INDENT_UNIT),
        None => " ".to_string(),
    }
}

/// Trivia before the closing brace of a fresh block opened after `leading`
pub(crate) fn closing_for(leading: &str) -> String {
    match indent_of(leading) {
        Some(indent) => format!("{}{}", line_break(leading), indent),
        None => " ".to_string(),
    }
}
