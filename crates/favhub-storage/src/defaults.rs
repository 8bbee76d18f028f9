//! The built-in tree used on first start or when stored state is corrupt.

use favhub_entity::node::{Folder, Link, Node};

fn seeded_link(name: &str, url: &str, description: &str) -> Node {
    let mut link = Link::new(name, url);
    link.description = Some(description.to_string());
    Node::Link(link)
}

/// One folder of everyday sites with a few seeded links.
pub fn default_tree() -> Vec<Node> {
    let mut daily = Folder::new(
        "Daily",
        Some("Sites and tools visited every day".to_string()),
    );
    daily.children = Some(vec![
        seeded_link(
            "Canva",
            "https://www.canva.com/",
            "Online graphic design platform",
        ),
        seeded_link(
            "Gemini",
            "https://gemini.google.com/app",
            "Google AI assistant",
        ),
        seeded_link("Claude", "https://claude.ai/new", "Anthropic AI assistant"),
    ]);
    vec![Node::Folder(daily)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tree_shape() {
        let tree = default_tree();
        assert_eq!(tree.len(), 1);
        assert!(tree[0].is_folder_named("Daily"));
        assert_eq!(tree[0].children().len(), 3);
        assert!(tree[0].children().iter().all(|n| !n.is_folder()));
    }

    #[test]
    fn test_default_tree_ids_are_fresh() {
        assert_ne!(default_tree()[0].id(), default_tree()[0].id());
    }
}
