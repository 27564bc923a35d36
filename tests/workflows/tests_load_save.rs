#![allow(clippy::unwrap_used, clippy::expect_used)]

use ufomenu::{Document, DuplicatePolicy, MenuError, MenuLoader, ParamOwner};

use crate::helpers::menu_helpers::{menu_dir, menu_names};
use crate::helpers::source_fixtures::{MAIN_MENU, SHARED_FIRST, SHARED_SECOND};

#[test]
fn test_load_all_duplicate_strict_by_default() {
    let (dir, _) = menu_dir(&[
        ("menu_a.ufo", SHARED_FIRST),
        ("menu_b.ufo", SHARED_SECOND),
    ]);
    let err = Document::load_all(dir.path().join("menu_*.ufo")).unwrap_err();
    match err {
        MenuError::InFile { path, source } => {
            assert!(path.ends_with("menu_b.ufo"));
            assert!(matches!(*source, MenuError::DuplicateName { .. }));
        }
        other => panic!("expected duplicate in second file, got {other:?}"),
    }
}

#[test]
fn test_load_all_duplicate_last_wins() {
    let (dir, paths) = menu_dir(&[
        ("menu_a.ufo", SHARED_FIRST),
        ("menu_b.ufo", SHARED_SECOND),
    ]);
    let doc = MenuLoader::new()
        .duplicates(DuplicatePolicy::LastWins)
        .load_all(dir.path())
        .unwrap();

    let shared = doc.menu("shared").unwrap();
    assert!(shared.has_child("from_second"));
    assert_eq!(doc.file_id(&paths[1]), Some(shared.file()));
    assert_eq!(menu_names(&doc), vec!["shared", "shared"]);

    // Nothing from the first file is lost
    let nodes: Vec<String> = doc.nodes().map(|(_, n)| n.name().to_string()).collect();
    assert_eq!(nodes, vec!["from_first", "from_second"]);
    assert_eq!(doc.render_file(doc.file_id(&paths[0]).unwrap()).unwrap(), SHARED_FIRST);
}

#[test]
fn test_edit_then_save_then_reload() {
    let (dir, paths) = menu_dir(&[("menu_main.ufo", MAIN_MENU)]);
    let mut doc = Document::load_file(&paths[0]).unwrap();
    doc.menu_mut("main")
        .unwrap()
        .child_mut("title")
        .unwrap()
        .update_param("string", "\"_UFO:AI\"")
        .unwrap();
    doc.menu_mut("main")
        .unwrap()
        .add_node("button", "credits")
        .unwrap()
        .set_pos(412, 400)
        .unwrap();
    assert_eq!(doc.save().unwrap(), vec![paths[0].clone()]);

    let reloaded = MenuLoader::new().load_all(dir.path()).unwrap();
    assert_eq!(reloaded.render(), doc.render());
    let credits = reloaded.node_by_path("main.credits").unwrap();
    assert_eq!(credits.behaviour(), Some("button"));
    assert_eq!(credits.pos().unwrap(), (412, 400));
    assert_eq!(
        reloaded
            .node_by_path("main.title")
            .unwrap()
            .get_param("string")
            .unwrap()
            .text(),
        "_UFO:AI"
    );
}

#[test]
fn test_add_menu_to_loaded_file() {
    let (_dir, paths) = menu_dir(&[("menu_main.ufo", MAIN_MENU)]);
    let mut doc = Document::load_file(&paths[0]).unwrap();
    let file = doc.menu("main").unwrap().file();
    doc.add_menu("popup", file).unwrap().set_size(100, 50).unwrap();
    doc.save().unwrap();

    let saved = std::fs::read_to_string(&paths[0]).unwrap();
    assert!(saved.starts_with(MAIN_MENU.trim_end()));
    assert!(saved.ends_with("}\n\nmenu popup {\n\tsize \"100 50\"\n}\n"));
    assert_eq!(
        Document::load_file(&paths[0]).unwrap().menu("popup").unwrap().size().unwrap(),
        (100, 50)
    );
}
