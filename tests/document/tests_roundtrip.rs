#![allow(clippy::unwrap_used, clippy::expect_used)]

use ufomenu::ParamOwner;

use crate::helpers::menu_helpers::document;
use crate::helpers::source_fixtures::{LEGACY_PANELS, MAIN_MENU};

#[test]
fn test_untouched_fixtures_round_trip() {
    for text in [MAIN_MENU, LEGACY_PANELS] {
        assert_eq!(document(text).render(), text);
    }
}

#[test]
fn test_render_is_stable_after_edit() {
    let mut doc = document(MAIN_MENU);
    doc.node_by_path_mut("main.start")
        .unwrap()
        .set_size(220, 32)
        .unwrap();
    let once = doc.render();
    let reparsed = document(&once);
    assert_eq!(reparsed.render(), once);
    assert_eq!(
        reparsed.node_by_path("main.start").unwrap().size().unwrap(),
        (220, 32)
    );
}

#[test]
fn test_edit_changes_only_its_line() {
    let mut doc = document(MAIN_MENU);
    doc.node_by_path_mut("main.quit")
        .unwrap()
        .update_param("string", "\"_Exit\"")
        .unwrap();
    let before: Vec<&str> = MAIN_MENU.lines().collect();
    let rendered = doc.render();
    let after: Vec<&str> = rendered.lines().collect();
    assert_eq!(before.len(), after.len());
    let changed: Vec<usize> = (0..before.len())
        .filter(|&i| before[i] != after[i])
        .collect();
    assert_eq!(changed.len(), 1);
    assert_eq!(after[changed[0]], "\t\tstring \"_Exit\"");
}

#[test]
fn test_comments_survive_structural_edits() {
    let mut doc = document(MAIN_MENU);
    let menu = doc.menu_mut("main").unwrap();
    menu.remove_node("start").unwrap();
    menu.add_node("button", "options").unwrap();
    let rendered = doc.render();
    assert!(rendered.starts_with("// ==================\n// MAIN MENU\n"));
    assert!(rendered.contains("\t/* title block */\n\ttext title {"));
    assert!(rendered.contains("\tbutton options {\n\t}"));
    assert!(!rendered.contains("button start"));
}
