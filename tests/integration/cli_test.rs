//! Integration tests driving the command layer end to end.

use favhub_core::error::ErrorKind;

use crate::helpers::{names, TestApp, SAMPLE_TREE};

#[test]
fn test_add_and_list_in_nested_folder() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    app.run(&[
        "--in", "Scripts", "add", "link", "--name", "Lint", "--url", "https://lint.example",
    ])
    .unwrap();
    app.run(&["--in", "Scripts", "list"]).unwrap();
    app.run(&["-f", "json", "--in", "Scripts", "list"]).unwrap();

    assert_eq!(names(app.stored_tree()[1].children()), ["Hooks", "Lint"]);
}

#[test]
fn test_add_duplicate_folder_fails() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let err = app.run(&["add", "folder", "--name", "Daily"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[test]
fn test_move_many_and_reorder() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    app.run(&["move", "--index", "0", "--index", "3", "--into", "1"])
        .unwrap();
    assert_eq!(names(&app.stored_tree()), ["Scripts", "Daily"]);
    assert_eq!(
        names(app.stored_tree()[0].children()),
        ["Hooks", "GitHub", "News"]
    );

    app.run(&["--in", "Scripts", "reorder", "2", "0"]).unwrap();
    assert_eq!(
        names(app.stored_tree()[0].children()),
        ["News", "Hooks", "GitHub"]
    );

    app.run(&["--in", "Scripts", "move", "--index", "0", "--crumb", "-1"])
        .unwrap();
    assert_eq!(names(&app.stored_tree()), ["Scripts", "Daily", "News"]);
}

#[test]
fn test_move_into_link_fails() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let err = app
        .run(&["move", "--index", "1", "--into", "0"])
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidMove);
    assert_eq!(app.stored_raw().as_deref(), Some(SAMPLE_TREE));
}

#[test]
fn test_click_and_delete_via_search() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    app.run(&["click", "0", "--search", "legit"]).unwrap();
    assert_eq!(app.stored_tree()[1].children()[0].click_count(), 1);

    app.run(&["delete", "0", "--search", "hooks", "--yes"]).unwrap();
    assert!(app.stored_tree()[1].children().is_empty());
}

#[test]
fn test_edit_keeps_click_count() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    app.run(&["edit", "3", "--name", "Headlines", "--description", "morning"])
        .unwrap();
    let news = &app.stored_tree()[3];
    assert_eq!(news.name(), "Headlines");
    assert_eq!(news.description(), Some("morning"));
    assert_eq!(news.click_count(), 2);
}

#[test]
fn test_export_and_import_files() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let out = app.dir.path().join("backup.json");
    let out_arg = out.to_string_lossy().into_owned();
    app.run(&["export", "--output", out_arg.as_str()]).unwrap();

    let other = TestApp::new();
    other.run(&["import", out_arg.as_str()]).unwrap();
    assert_eq!(other.stored_tree(), app.stored_tree());

    let bad = app.dir.path().join("bad.json");
    std::fs::write(&bad, r#"{"foo": 1}"#).unwrap();
    let bad_arg = bad.to_string_lossy().into_owned();
    let err = other.run(&["import", bad_arg.as_str()]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Import);
}

#[test]
fn test_unknown_folder_in_path_fails() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let err = app.run(&["--in", "Missing", "list"]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}
