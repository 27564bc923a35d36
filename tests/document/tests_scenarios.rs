#![allow(clippy::unwrap_used, clippy::expect_used)]

use ufomenu::{MenuError, ParamOwner, Value};

use crate::helpers::menu_helpers::document;
use crate::helpers::source_fixtures::{NODE_A, ORIGIN_ONLY};

#[test]
fn test_get_param_returns_typed_tuple() {
    let doc = document(NODE_A);
    let node = doc.menu("m").unwrap().child("node_a").unwrap();
    assert_eq!(node.param_value("pos").unwrap(), &Value::pair(10, 20));
    assert_eq!(node.pos().unwrap(), (10, 20));
}

#[test]
fn test_update_param_keeps_surroundings() {
    let mut doc = document(NODE_A);
    doc.menu_mut("m")
        .unwrap()
        .child_mut("node_a")
        .unwrap()
        .update_param("pos", "\"15 20\"")
        .unwrap();
    assert_eq!(doc.render(), "menu m { node_a { pos \"15 20\" } }");
}

#[test]
fn test_rename_only_param() {
    let mut doc = document(ORIGIN_ONLY);
    let menu = doc.menu_mut("m").unwrap();
    menu.rename_param("origin", "pos").unwrap();
    assert!(!menu.exists_param("origin"));
    assert_eq!(menu.get_param("pos").unwrap().raw(), "\"0 0\"");
    assert_eq!(doc.render(), "menu m {\n\tpos \"0 0\"\n}\n");
}

#[test]
fn test_unterminated_literal_is_lex_error() {
    let err = ufomenu::Document::parse_str("menu m {\n\tstring \"_oops\n}\n").unwrap_err();
    match err {
        MenuError::Lex { offset, line, .. } => {
            assert_eq!(offset, 17);
            assert_eq!(line, 2);
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn test_unbalanced_braces_is_parse_error() {
    let err = ufomenu::Document::parse_str("menu m {\n\ttext t {\n\t\tpos \"1 1\"\n}\n").unwrap_err();
    assert!(matches!(err, MenuError::Parse { .. }), "{err:?}");
    assert!(err.is_load_error());
}

#[test]
fn test_stray_closing_brace_is_parse_error() {
    let err = ufomenu::Document::parse_str("menu m { }\n}\n").unwrap_err();
    match err {
        MenuError::Parse { found, line, .. } => {
            assert_eq!(found, "`}`");
            assert_eq!(line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_typed_read_of_wrong_shape() {
    let doc = document("menu m { size \"wide\" }");
    let err = doc.menu("m").unwrap().size().unwrap_err();
    match err {
        MenuError::MalformedValue { key, literal, .. } => {
            assert_eq!(key, "size");
            assert_eq!(literal, "\"wide\"");
        }
        other => panic!("expected malformed value, got {other:?}"),
    }
}
