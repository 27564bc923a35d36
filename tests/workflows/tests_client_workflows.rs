//! Batch edits written against the public API the way maintenance scripts
//! use it: key migration, moving a panel, and tallying behaviours.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ufomenu::{Document, MenuLoader, ParamOwner, Result};

use crate::helpers::menu_helpers::{document, menu_dir};
use crate::helpers::source_fixtures::{LEGACY_PANELS, MAIN_MENU};

/// Rename `origin` to `pos` on every menu and node that still has it
fn migrate_origin(doc: &mut Document) -> Result<usize> {
    let mut renamed = 0;
    let menus: Vec<String> = doc.menus().map(|m| m.name().to_string()).collect();
    for name in menus {
        let menu = doc.menu_mut(&name)?;
        if menu.exists_param("origin") {
            menu.rename_param("origin", "pos")?;
            renamed += 1;
        }
        let nodes: Vec<String> = menu.children().map(|n| n.name().to_string()).collect();
        for node in nodes {
            let node = menu.child_mut(&node)?;
            if node.exists_param("origin") {
                node.rename_param("origin", "pos")?;
                renamed += 1;
            }
        }
    }
    Ok(renamed)
}

/// Move every node of `menu` by `(dx, dy)`
fn shift_panel(doc: &mut Document, menu: &str, dx: i32, dy: i32) -> Result<()> {
    let menu = doc.menu_mut(menu)?;
    let nodes: Vec<String> = menu.children().map(|n| n.name().to_string()).collect();
    for name in nodes {
        let node = menu.child_mut(&name)?;
        if let Ok((x, y)) = node.pos() {
            node.set_pos(x + dx, y + dy)?;
        }
    }
    Ok(())
}

#[test]
fn test_migrate_origin_to_pos() {
    let mut doc = document(LEGACY_PANELS);
    assert_eq!(migrate_origin(&mut doc).unwrap(), 4);
    assert_eq!(doc.render(), LEGACY_PANELS.replace("origin", "pos"));
    assert_eq!(migrate_origin(&mut doc).unwrap(), 0);
}

#[test]
fn test_shift_panel_moves_nodes_only() {
    let mut doc = document(MAIN_MENU);
    shift_panel(&mut doc, "main", -12, 10).unwrap();
    let expected = MAIN_MENU
        .replace("pos \"312 50\"", "pos \"300 60\"")
        .replace("pos \"412 300\"", "pos \"400 310\"")
        .replace("pos \"412 350\"", "pos \"400 360\"");
    assert_eq!(doc.render(), expected);
    assert_eq!(doc.menu("main").unwrap().pos().unwrap(), (0, 0));
}

#[test]
fn test_behaviour_tally() {
    let doc = document(MAIN_MENU);
    let counts = doc.behaviour_counts();
    let tally: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(tally, vec![("text", 1), ("button", 2)]);
}

#[test]
fn test_migrate_across_files_and_save() {
    let (dir, paths) = menu_dir(&[
        ("menu_legacy.ufo", LEGACY_PANELS),
        ("menu_main.ufo", MAIN_MENU),
    ]);
    let mut doc = MenuLoader::new().load_all(dir.path()).unwrap();
    migrate_origin(&mut doc).unwrap();
    let written = doc.save().unwrap();
    assert_eq!(written, vec![paths[0].clone()]);
    assert_eq!(
        std::fs::read_to_string(&paths[0]).unwrap(),
        LEGACY_PANELS.replace("origin", "pos")
    );
    assert_eq!(std::fs::read_to_string(&paths[1]).unwrap(), MAIN_MENU);
}
