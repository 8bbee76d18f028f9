//! Import/export of the whole tree as human-readable JSON.

use chrono::NaiveDate;
use serde_json::Value;

use favhub_core::error::{AppError, ErrorKind};
use favhub_core::result::AppResult;
use favhub_entity::node::Node;

/// Serialize the tree as 2-space indented JSON.
pub fn export_json(roots: &[Node]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(roots)?)
}

/// File name offered for an export made on `date`.
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}.json", date.format("%Y-%m-%d"))
}

/// Parse an import payload.
///
/// The payload must be a JSON array of nodes; anything else is rejected
/// with an import error and no partial result.
pub fn parse_import(text: &str) -> AppResult<Vec<Node>> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        AppError::with_source(ErrorKind::Import, format!("Import failed: {e}"), e)
    })?;

    if !value.is_array() {
        return Err(AppError::import("Invalid data format: expected an array"));
    }

    serde_json::from_value(value).map_err(|e| {
        AppError::with_source(ErrorKind::Import, format!("Import failed: {e}"), e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use favhub_entity::node::{Folder, Link};

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(
            export_file_name("favorites", date),
            "favorites-2026-03-07.json"
        );
    }

    #[test]
    fn test_export_is_indented() {
        let text = export_json(&[Node::Link(Link::new("a", "https://a"))]).unwrap();
        assert!(text.contains("\n  {"));
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut folder = Folder::new("Scripts", Some("shell".to_string()));
        let mut link = Link::new("Tool", "https://tool");
        link.click_count = 9;
        link.icon = Some("https://tool/icon.png".to_string());
        folder.children_mut().push(Node::Link(link));
        let tree = vec![Node::Folder(folder), Node::Folder(Folder::new("Empty", None))];

        let text = export_json(&tree).unwrap();
        let back = parse_import(&text).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_object_payload_rejected() {
        let err = parse_import(r#"{"foo": 1}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Import);
    }

    #[test]
    fn test_unparsable_payload_rejected() {
        let err = parse_import("[{").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Import);
    }

    #[test]
    fn test_array_of_garbage_rejected() {
        let err = parse_import(r#"[{"type": "widget"}]"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Import);
    }
}
