//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use favhub_entity::node::Node;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{table}");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize + std::fmt::Debug>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            println!("{item:#?}");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

/// Render nodes as an indented outline, folders marked with a trailing `/`.
pub fn outline(nodes: &[Node]) -> String {
    let mut lines = Vec::new();
    outline_into(nodes, 0, &mut lines);
    lines.join("\n")
}

fn outline_into(nodes: &[Node], depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    for node in nodes {
        match node {
            Node::Folder(folder) => {
                lines.push(format!("{indent}{}/", folder.name));
                outline_into(folder.children(), depth + 1, lines);
            }
            Node::Link(link) if link.click_count > 0 => {
                lines.push(format!(
                    "{indent}{}  <{}>  ({} clicks)",
                    link.name, link.url, link.click_count
                ));
            }
            Node::Link(link) => lines.push(format!("{indent}{}  <{}>", link.name, link.url)),
        }
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use favhub_entity::node::{Folder, Link};

    #[test]
    fn test_outline_indents_children() {
        let mut clicked = Link::new("Claude", "https://claude.ai/new");
        clicked.click_count = 3;
        let mut folder = Folder::new("Daily", None);
        folder.children_mut().push(clicked.into());
        let nodes = vec![
            Node::from(folder),
            Node::from(Link::new("GitHub", "https://github.com")),
        ];

        assert_eq!(
            outline(&nodes),
            "Daily/\n  Claude  <https://claude.ai/new>  (3 clicks)\nGitHub  <https://github.com>"
        );
    }
}
