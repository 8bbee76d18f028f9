//! Display order of a folder's contents.

use std::cmp::Reverse;

use favhub_entity::node::Node;
use favhub_entity::view::DisplayItem;

/// Order `children` for browsing without touching storage order.
///
/// Folders come first in source order; links follow by descending click
/// count, ties keeping source order.
pub fn display_order(children: &[Node]) -> Vec<DisplayItem<'_>> {
    let mut items: Vec<DisplayItem<'_>> = children
        .iter()
        .enumerate()
        .map(|(original_index, node)| DisplayItem {
            original_index,
            node,
        })
        .collect();

    // `sort_by_key` is stable.
    items.sort_by_key(|item| (!item.node.is_folder(), Reverse(item.node.click_count())));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use favhub_entity::node::{Folder, Link};

    fn link(name: &str, clicks: u64) -> Node {
        let mut link = Link::new(name, format!("https://{name}"));
        link.click_count = clicks;
        Node::Link(link)
    }

    fn names(items: &[DisplayItem<'_>]) -> Vec<String> {
        items.iter().map(|i| i.node.name().to_string()).collect()
    }

    #[test]
    fn test_folders_first_then_links_by_clicks() {
        let children = vec![
            link("LinkA", 3),
            Node::Folder(Folder::new("FolderX", None)),
            link("LinkB", 5),
        ];
        let items = display_order(&children);
        assert_eq!(names(&items), ["FolderX", "LinkB", "LinkA"]);
        assert_eq!(
            items.iter().map(|i| i.original_index).collect::<Vec<_>>(),
            [1, 2, 0]
        );
    }

    #[test]
    fn test_ties_and_folders_keep_source_order() {
        let children = vec![
            link("a", 0),
            Node::Folder(Folder::new("F2", None)),
            link("b", 2),
            Node::Folder(Folder::new("F1", None)),
            link("c", 0),
            link("d", 2),
        ];
        assert_eq!(
            names(&display_order(&children)),
            ["F2", "F1", "b", "d", "a", "c"]
        );
    }

    #[test]
    fn test_clicked_link_moves_ahead_of_unclicked() {
        let mut children = vec![
            link("first", 0),
            link("second", 0),
            Node::Folder(Folder::new("Folder", None)),
        ];
        assert_eq!(
            names(&display_order(&children)),
            ["Folder", "first", "second"]
        );

        children[1].as_link_mut().unwrap().click_count += 1;
        assert_eq!(
            names(&display_order(&children)),
            ["Folder", "second", "first"]
        );
        assert_eq!(children[1].name(), "second");
    }
}
