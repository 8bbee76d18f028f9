//! Recursive keyword search over the whole tree.

use favhub_entity::node::Node;
use favhub_entity::search::SearchRecord;

/// Find every node whose text contains `keyword`, case-insensitively.
///
/// Results are in depth-first pre-order. A matching folder is reported
/// and its children are still searched.
pub fn search(roots: &[Node], keyword: &str, delimiter: &str) -> Vec<SearchRecord> {
    let needle = keyword.to_lowercase();
    let mut results = Vec::new();
    let mut segments = Vec::new();
    search_recursive(roots, &needle, delimiter, &mut segments, &mut results);
    results
}

fn search_recursive(
    items: &[Node],
    needle: &str,
    delimiter: &str,
    segments: &mut Vec<String>,
    results: &mut Vec<SearchRecord>,
) {
    for node in items {
        if node.matches(needle) {
            results.push(SearchRecord::new(node, segments, delimiter));
        }
        if let Node::Folder(folder) = node {
            segments.push(folder.name.clone());
            search_recursive(folder.children(), needle, delimiter, segments, results);
            segments.pop();
        }
    }
}
