//! Integration tests for import and export.

use favhub_core::error::ErrorKind;
use favhub_core::events::ViewEvent;
use favhub_service::ViewSession;
use favhub_storage::exchange::parse_import;

use crate::helpers::{names, TestApp, SAMPLE_TREE};

#[test]
fn test_export_then_import_reproduces_tree() {
    let source = TestApp::with_tree(SAMPLE_TREE);
    let (service, _) = source.service();
    let export = service.export().unwrap();
    assert!(export.file_name.starts_with("favorites-"));
    assert!(export.file_name.ends_with(".json"));
    assert!(export.body.contains("\n  {"));

    let target = TestApp::new();
    let (mut imported, sink) = target.service();
    let mut session = ViewSession::at_path(vec!["Daily".to_string()]);
    let count = imported.import_json(&mut session, &export.body).unwrap();

    assert_eq!(count, 5);
    assert_eq!(imported.roots(), service.roots());
    assert_eq!(target.stored_tree(), parse_import(SAMPLE_TREE).unwrap());
    assert!(session.current_path().is_empty());
    assert_eq!(sink.notices()[0].message, "Import successful");
}

#[test]
fn test_import_of_object_is_rejected() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, sink) = app.service();
    let mut session = ViewSession::new();

    let err = service.import_json(&mut session, r#"{"foo": 1}"#).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Import);
    assert_eq!(names(service.roots()), ["GitHub", "Scripts", "Daily", "News"]);
    assert_eq!(app.stored_raw().as_deref(), Some(SAMPLE_TREE));
    assert!(matches!(
        sink.view_events().as_slice(),
        [ViewEvent::Rejected { .. }]
    ));
}

#[test]
fn test_import_of_malformed_nodes_is_rejected() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, _) = app.service();
    let mut session = ViewSession::new();

    let err = service
        .import_json(&mut session, r#"[{"type": "link", "name": "no url"}]"#)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Import);
    assert_eq!(service.roots().len(), 4);
}
