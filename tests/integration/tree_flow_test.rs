//! Integration tests for browsing, searching, and reorganizing a stored tree.

use favhub_core::error::ErrorKind;
use favhub_core::events::ViewEvent;
use favhub_entity::node::{FolderDraft, LinkDraft, NodeDraft};
use favhub_service::drag::DropTarget;
use favhub_service::manager::DropOutcome;
use favhub_service::moves::Destination;
use favhub_service::ViewSession;
use favhub_storage::gateway::LoadSource;

use crate::helpers::{names, TestApp, SAMPLE_TREE};

#[test]
fn test_first_start_seeds_defaults_without_saving() {
    let app = TestApp::new();
    let (service, _) = app.service();

    assert_eq!(service.load_source(), LoadSource::Seeded);
    assert_eq!(names(service.roots()), ["Daily"]);
    assert!(app.stored_raw().is_none());
}

#[test]
fn test_corrupt_state_recovers_with_defaults() {
    let app = TestApp::with_tree("{not json");
    let (service, _) = app.service();
    assert_eq!(service.load_source(), LoadSource::Recovered);
    assert_eq!(names(service.roots()), ["Daily"]);
}

#[test]
fn test_display_order_follows_clicks() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, _) = app.service();
    let session = ViewSession::new();

    let order = |service: &favhub_service::BookmarkService| -> Vec<String> {
        service
            .current_items(&session)
            .unwrap()
            .iter()
            .map(|item| item.node.name().to_string())
            .collect()
    };
    assert_eq!(order(&service), ["Scripts", "Daily", "News", "GitHub"]);

    for _ in 0..3 {
        service.record_click(&session, 0).unwrap();
    }
    assert_eq!(order(&service), ["Scripts", "Daily", "GitHub", "News"]);

    let stored = app.stored_tree();
    assert_eq!(stored[0].click_count(), 3);
    assert_eq!(names(&stored), ["GitHub", "Scripts", "Daily", "News"]);
}

#[test]
fn test_search_reports_paths() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (service, _) = app.service();
    let mut session = ViewSession::new();
    session.set_search("git");

    let results = service.search_results(&session);
    let found: Vec<(&str, &str)> = results
        .iter()
        .map(|r| (r.node.name(), r.path.as_str()))
        .collect();
    assert_eq!(found, [("GitHub", ""), ("Hooks", "Scripts")]);
}

#[test]
fn test_add_into_folder_without_children() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, sink) = app.service();
    let mut session = ViewSession::new();
    session.open_folder("Daily");

    service
        .add_node(
            &mut session,
            NodeDraft::Link(LinkDraft {
                name: "Mail".to_string(),
                url: "https://mail.example".to_string(),
                ..LinkDraft::default()
            }),
        )
        .unwrap();

    let stored = app.stored_tree();
    assert_eq!(names(stored[2].children()), ["Mail"]);
    assert_eq!(sink.notices()[0].message, "Added \"Mail\"");

    let raw = app.stored_raw().unwrap();
    assert_eq!(raw.matches("clickCount").count(), 1);
}

#[test]
fn test_navigation_into_missing_folder_errors() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, _) = app.service();
    let mut session = ViewSession::at_path(vec!["Nowhere".to_string()]);

    let err = service.current_items(&session).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = service
        .add_node(
            &mut session,
            NodeDraft::Folder(FolderDraft {
                name: "Lost".to_string(),
                description: None,
            }),
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(app.stored_raw().as_deref(), Some(SAMPLE_TREE));
}

#[test]
fn test_batch_move_then_back_up() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, sink) = app.service();
    let mut session = ViewSession::new();

    session.selection_mut().add(0);
    session.selection_mut().add(3);
    let report = service
        .move_selected(&mut session, Destination::Folder(2))
        .unwrap()
        .unwrap();
    assert_eq!(report.moved, ["GitHub", "News"]);
    assert_eq!(names(&app.stored_tree()), ["Scripts", "Daily"]);
    assert_eq!(names(app.stored_tree()[1].children()), ["GitHub", "News"]);

    session.open_folder("Daily");
    let report = service.move_to_parent(&mut session, 1).unwrap().unwrap();
    assert_eq!(report.destination, "Home");
    assert_eq!(names(&app.stored_tree()), ["Scripts", "Daily", "News"]);

    let messages: Vec<String> = sink.notices().into_iter().map(|n| n.message).collect();
    assert_eq!(
        messages,
        [
            "Moved 2 items to \"Daily\"".to_string(),
            "Moved \"News\" to \"Home\"".to_string()
        ]
    );
}

#[test]
fn test_drag_through_breadcrumb() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, _) = app.service();
    let mut session = ViewSession::at_path(vec!["Scripts".to_string()]);

    service.begin_drag(&mut session, 0).unwrap();
    assert_eq!(
        service.drop(&mut session, DropTarget::Breadcrumb(0)).unwrap(),
        DropOutcome::Nothing
    );

    service.begin_drag(&mut session, 0).unwrap();
    let outcome = service
        .drop(&mut session, DropTarget::Breadcrumb(-1))
        .unwrap();
    assert!(matches!(outcome, DropOutcome::Moved(_)));
    assert_eq!(
        names(&app.stored_tree()),
        ["GitHub", "Scripts", "Daily", "News", "Hooks"]
    );
    assert!(app.stored_tree()[1].children().is_empty());
}

#[test]
fn test_rejected_move_publishes_notice_and_keeps_state() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, sink) = app.service();
    let mut session = ViewSession::new();

    let err = service.move_to_folder(&mut session, 0, 3).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidMove);
    assert!(matches!(
        sink.view_events().as_slice(),
        [ViewEvent::Rejected { .. }]
    ));
    assert_eq!(app.stored_raw().as_deref(), Some(SAMPLE_TREE));
}

#[test]
fn test_edit_from_search_persists() {
    let app = TestApp::with_tree(SAMPLE_TREE);
    let (mut service, _) = app.service();
    let mut session = ViewSession::new();
    session.set_search("legit");

    let record = service.search_record(&session, 0).unwrap();
    service
        .update_node(
            &mut session,
            record.id,
            NodeDraft::Link(LinkDraft {
                name: "Git hooks".to_string(),
                url: "https://hooks.example".to_string(),
                description: Some("pre-commit".to_string()),
                icon: None,
            }),
        )
        .unwrap();

    let stored = app.stored_tree();
    let hooks = &stored[1].children()[0];
    assert_eq!(hooks.name(), "Git hooks");
    assert_eq!(hooks.description(), Some("pre-commit"));
}
