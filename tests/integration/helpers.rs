//! Shared test helpers for integration tests.

use clap::Parser;
use tempfile::TempDir;

use favhub_cli::Cli;
use favhub_core::config::AppConfig;
use favhub_core::error::AppError;
use favhub_core::traits::StateStore;
use favhub_entity::node::Node;
use favhub_service::events::RecordingSink;
use favhub_service::BookmarkService;
use favhub_storage::providers::LocalStateStore;

/// Test application context backed by a temporary data directory
pub struct TestApp {
    /// Holds the data directory alive for the test's duration
    pub dir: TempDir,
    /// Application config pointing at `dir`
    pub config: AppConfig,
}

impl TestApp {
    /// Create an app with nothing stored yet
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig::default();
        config.storage.provider = "local".to_string();
        config.storage.data_root = dir.path().to_string_lossy().into_owned();
        Self { dir, config }
    }

    /// Create an app whose stored state is `json`
    pub fn with_tree(json: &str) -> Self {
        let app = Self::new();
        app.state_store()
            .set(&app.config.storage.state_key, json)
            .expect("Failed to seed state");
        app
    }

    fn state_store(&self) -> LocalStateStore {
        LocalStateStore::new(self.dir.path()).expect("Failed to open state store")
    }

    /// Open a fresh service over the stored state
    pub fn service(&self) -> (BookmarkService, RecordingSink) {
        let sink = RecordingSink::new();
        let service = BookmarkService::from_config(&self.config, Box::new(sink.clone()))
            .expect("Failed to open service");
        (service, sink)
    }

    /// Raw stored value, if any
    pub fn stored_raw(&self) -> Option<String> {
        self.state_store()
            .get(&self.config.storage.state_key)
            .expect("Failed to read state")
    }

    /// The stored tree, parsed
    pub fn stored_tree(&self) -> Vec<Node> {
        let raw = self.stored_raw().expect("Nothing stored");
        serde_json::from_str(&raw).expect("Stored state is not a tree")
    }

    /// Run one CLI invocation against this app's config
    pub fn run(&self, args: &[&str]) -> Result<(), AppError> {
        let argv = std::iter::once("favhub").chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).expect("Invalid test arguments");
        cli.execute(&self.config)
    }
}

/// Names of a node sequence, in order
pub fn names(nodes: &[Node]) -> Vec<&str> {
    nodes.iter().map(Node::name).collect()
}

/// A tree used by several tests:
///
/// ```text
/// GitHub            link
/// Scripts/          folder
///   Hooks           link, "legit tool"
/// Daily/            folder
/// News              link, 2 clicks
/// ```
pub const SAMPLE_TREE: &str = r#"[
    {"type": "link", "name": "GitHub", "url": "https://github.com"},
    {"type": "folder", "name": "Scripts", "children": [
        {"type": "link", "name": "Hooks", "url": "https://hooks.example", "description": "legit tool"}
    ]},
    {"type": "folder", "name": "Daily"},
    {"type": "link", "name": "News", "url": "https://news.example", "clickCount": 2}
]"#;
