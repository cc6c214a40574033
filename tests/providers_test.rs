//! Integration tests for the built-in node providers, driven through the
//! registry the way the front end uses them.

use std::sync::{Arc, Mutex};

use sdui::config::Config;
use sdui::error::ProviderError;
use sdui::loader::LoadState;
use sdui::node::{Node, Tree};
use sdui::providers::{self, HttpProvider, LinkProvider, NodeProvider, UrlOpener};
use sdui::registry::Registry;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEXT_NODE: &str = r#"{"component": "layout:text", "properties": {"text": "remote"}}"#;

fn text_node() -> Tree {
    Tree::Node(Node::new("layout:text").with_property("text", "remote"))
}

async fn load(registry: &Registry, provider_type: &str, resource: &str) -> LoadState {
    registry
        .load(provider_type, resource)
        .expect("provider should be registered")
        .finished()
        .await
}

// ============================================================================
// http
// ============================================================================

#[tokio::test]
async fn test_http_provider_fetches_tree() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/screens/home.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TEXT_NODE))
        .expect(1)
        .mount(&server)
        .await;

    let registry = Registry::with_defaults(&Config::default());
    let url = format!("{}/screens/home.json", server.uri());
    assert_eq!(
        load(&registry, providers::HTTP, &url).await,
        LoadState::Success(text_node())
    );
}

#[tokio::test]
async fn test_http_provider_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing.json", server.uri());
    let err = HttpProvider::default().provide(&url).await.unwrap_err();
    assert!(matches!(err, ProviderError::HttpStatus { status: 404, .. }));
    assert!(!err.category().is_fatal());
}

#[tokio::test]
async fn test_http_provider_invalid_body_is_load_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let registry = Registry::with_defaults(&Config::default());
    let state = load(&registry, providers::HTTP, &server.uri()).await;
    assert!(matches!(state, LoadState::Error(_)));
}

// ============================================================================
// file
// ============================================================================

#[tokio::test]
async fn test_file_provider_resolves_against_root() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("screens")).unwrap();
    std::fs::write(dir.path().join("screens/home.json"), TEXT_NODE).unwrap();

    let registry = Registry::with_defaults(&Config::default().with_resource_root(dir.path()));
    assert_eq!(
        load(&registry, providers::FILE, "screens/home.json").await,
        LoadState::Success(text_node())
    );
}

#[tokio::test]
async fn test_file_provider_missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Registry::with_defaults(&Config::default().with_resource_root(dir.path()));
    match load(&registry, providers::FILE, "nope.json").await {
        LoadState::Error(e) => assert!(e.reason().contains("nope.json"), "{}", e),
        other => panic!("expected error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_bundled_navigation_file_parses() {
    let registry =
        Registry::with_defaults(&Config::default().with_resource_root(env!("CARGO_MANIFEST_DIR")));
    match load(&registry, providers::FILE, sdui::config::DEFAULT_BOOTSTRAP_RESOURCE).await {
        LoadState::Success(Tree::Node(root)) => assert_eq!(root.component(), "navigation:host"),
        other => panic!("expected the navigation tree, got {:?}", other),
    }
}

// ============================================================================
// link
// ============================================================================

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl UrlOpener for Recorder {
    fn open(&self, url: &str) -> std::io::Result<()> {
        self.0.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn test_link_provider_opens_and_is_ignored() {
    let recorder = Recorder::default();
    let mut registry = Registry::new();
    registry.register_node_provider(providers::LINK, LinkProvider::new(recorder.clone()));

    let state = load(&registry, providers::LINK, "https://example.com").await;

    assert_eq!(state, LoadState::Success(Tree::Ignored));
    assert_eq!(*recorder.0.lock().unwrap(), vec!["https://example.com"]);
    let mut data = sdui::state::DataState::new();
    assert!(registry.render(&Tree::Ignored, &mut data).is_suppressed());
}

// ============================================================================
// json
// ============================================================================

#[tokio::test]
async fn test_json_provider_invalid_text_is_load_error() {
    let registry = Registry::with_defaults(&Config::default());
    assert!(matches!(
        load(&registry, providers::JSON, "{").await,
        LoadState::Error(_)
    ));
}

#[tokio::test]
async fn test_malformed_nested_action_is_load_error() {
    let registry = Registry::with_defaults(&Config::default());
    let tree = r#"{"component": "layout:button", "properties": {
        "text": "Go",
        "onClick": [{"component": "actions:log", "properties": "oops"}]
    }}"#;
    match load(&registry, providers::JSON, tree).await {
        LoadState::Error(e) => assert!(e.reason().contains("invalid type"), "{}", e),
        other => panic!("expected a load error, got {:?}", other),
    }
}
