#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Property-based tests over generated menu files.
//!
//! Files are built from a small generator that mixes menus, nodes with and
//! without behaviours, words, quoted literals, comments and assorted
//! whitespace.

use proptest::prelude::*;
use ufomenu::{Document, ParamOwner};

fn gap() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        " ",
        "  ",
        "\t",
        "\n",
        "\n\t",
        "\n\t\t",
        "\r\n\t",
        "\n\n\t",
        " // note\n\t",
        "\n/* block\n comment */ ",
    ])
    .prop_map(str::to_string)
}

fn word() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

fn literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z0-9_*:]{1,6}",
        "\"[a-zA-Z0-9_ ]{0,10}\"",
        (-500i32..500, -500i32..500).prop_map(|(x, y)| format!("\"{x} {y}\"")),
    ]
}

fn param() -> impl Strategy<Value = String> {
    (gap(), word(), gap(), literal()).prop_map(|(g1, key, g2, lit)| format!("{g1}{key}{g2}{lit}"))
}

fn node(index: usize) -> impl Strategy<Value = String> {
    (
        gap(),
        prop::option::of((word(), gap())),
        gap(),
        prop::collection::vec(param(), 0..4),
        gap(),
    )
        .prop_map(move |(lead, behaviour, name_gap, params, close)| {
            let behaviour = behaviour
                .map(|(b, g)| format!("{b}{g}"))
                .unwrap_or_default();
            format!(
                "{lead}{behaviour}n{index}{name_gap}{{{}{close}}}",
                params.concat()
            )
        })
}

fn menu(index: usize) -> impl Strategy<Value = String> {
    (
        gap(),
        gap(),
        prop::collection::vec(param(), 0..3),
        (0usize..4).prop_flat_map(|count| {
            (0..count).map(node).collect::<Vec<_>>()
        }),
        gap(),
    )
        .prop_map(move |(lead, name_gap, params, nodes, close)| {
            format!(
                "{lead}menu m{index}{name_gap}{{{}{}{close}}}",
                params.concat(),
                nodes.concat()
            )
        })
}

fn menu_file() -> impl Strategy<Value = String> {
    (0usize..4).prop_flat_map(|count| {
        ((0..count).map(menu).collect::<Vec<_>>(), gap())
            .prop_map(|(menus, tail)| format!("{}{tail}", menus.concat()))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_untouched_round_trip(text in menu_file()) {
        let doc = Document::parse_str(&text).unwrap();
        prop_assert_eq!(doc.render(), text);
    }

    #[test]
    fn prop_lookup_matches_iteration(text in menu_file()) {
        let doc = Document::parse_str(&text).unwrap();
        for menu in doc.menus() {
            prop_assert_eq!(doc.menu(menu.name()).unwrap().name(), menu.name());
            for node in menu.children() {
                prop_assert_eq!(menu.child(node.name()).unwrap().name(), node.name());
                prop_assert_eq!(node.menu_name(), menu.name());
            }
        }
    }

    #[test]
    fn prop_set_pos_reparses(text in menu_file(), x in -1000i32..1000, y in -1000i32..1000) {
        let mut doc = Document::parse_str(&text).unwrap();
        let target = doc.nodes().map(|(_, n)| n.path()).next();
        if let Some(path) = target {
            doc.node_by_path_mut(&path).unwrap().set_pos(x, y).unwrap();
            let rendered = doc.render();
            let reparsed = Document::parse_str(&rendered).unwrap();
            prop_assert_eq!(reparsed.node_by_path(&path).unwrap().pos().unwrap(), (x, y));
            prop_assert_eq!(reparsed.render(), rendered);
        }
    }

    #[test]
    fn prop_remove_node_keeps_index(text in menu_file()) {
        let mut doc = Document::parse_str(&text).unwrap();
        let target = doc
            .nodes()
            .map(|(m, n)| (m.name().to_string(), n.name().to_string()))
            .next();
        if let Some((menu_name, node_name)) = target {
            let menu = doc.menu_mut(&menu_name).unwrap();
            menu.remove_node(&node_name).unwrap();
            prop_assert!(menu.child(&node_name).is_err());
            let remaining: Vec<String> = menu.children().map(|n| n.name().to_string()).collect();
            for name in &remaining {
                prop_assert!(menu.child(name).is_ok());
            }
            let reparsed = Document::parse_str(&doc.render()).unwrap();
            prop_assert_eq!(reparsed.menu(&menu_name).unwrap().children().count(), remaining.len());
        }
    }
}
