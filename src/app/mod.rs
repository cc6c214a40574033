//! Application state for one UI root.
//!
//! [`App`] owns the registry, the data state of the current screen, the
//! current [`LoadState`] and at most one load in flight. Starting a load
//! while another is pending drops (and so cancels) the older one.

mod event_loop;
mod handlers;

pub use event_loop::run;

use crate::error::SduiResult;
use crate::library::navigation;
use crate::loader::{LoadState, TreeLoad};
use crate::node::Tree;
use crate::registry::Registry;
use crate::render::{Element, Render};
use crate::state::DataState;

pub struct App {
    registry: Registry,
    state: DataState,
    screen: LoadState,
    pending: Option<TreeLoad>,
    focus: usize,
    should_quit: bool,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
}

impl App {
    /// An app showing the loading view until the first load finishes.
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            state: DataState::new(),
            screen: LoadState::Loading,
            pending: None,
            focus: 0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn state(&self) -> &DataState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DataState {
        &mut self.state
    }

    /// What the body of the screen shows.
    pub fn screen(&self) -> &LoadState {
        &self.screen
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Index of the focused interactive element, when a tree is shown.
    pub fn focus(&self) -> Option<usize> {
        match self.screen {
            LoadState::Success(_) => Some(self.focus),
            _ => None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Start loading a tree. An unknown provider type is a fatal error and
    /// leaves the app unchanged.
    pub fn start_load(&mut self, provider_type: &str, resource: &str) -> SduiResult<()> {
        let load = self.registry.load(provider_type, resource)?;
        if self.pending.replace(load).is_some() {
            tracing::debug!("Superseded an in-flight load");
        }
        self.mark_dirty();
        Ok(())
    }

    /// Apply the terminal state of the pending load.
    ///
    /// A new tree gets a fresh data state and focus. An ignored tree keeps
    /// the current screen, unless nothing has been shown yet. A tree naming
    /// an unregistered method is fatal and is not shown.
    pub fn finish_load(&mut self, result: LoadState) -> SduiResult<()> {
        self.pending = None;
        self.mark_dirty();
        match result {
            LoadState::Loading => {}
            LoadState::Success(Tree::Ignored) if !self.screen.is_loading() => {
                tracing::debug!("Ignored tree, keeping the current screen");
            }
            terminal => {
                if let LoadState::Success(tree) = &terminal {
                    self.registry.check_methods(tree)?;
                }
                self.screen = terminal;
                self.state = DataState::new();
                self.focus = 0;
            }
        }
        Ok(())
    }

    /// Wait for the pending load, if any, and apply it.
    pub async fn settle(&mut self) -> SduiResult<()> {
        match self.pending.as_mut() {
            Some(load) => {
                let result = load.finished().await;
                self.finish_load(result)
            }
            None => Ok(()),
        }
    }

    pub(crate) fn pending_mut(&mut self) -> &mut Option<TreeLoad> {
        &mut self.pending
    }

    /// Render the current tree against the data state.
    pub fn view(&mut self) -> Option<Element> {
        let LoadState::Success(tree) = &self.screen else {
            return None;
        };
        match self.registry.render(tree, &mut self.state) {
            Render::Rendered(element) => Some(element),
            Render::Suppressed => None,
        }
    }

    /// Start the load an action asked for, if any.
    pub fn process_navigation(&mut self) -> SduiResult<()> {
        match navigation::take_request(&mut self.state) {
            Some((provider_type, resource)) => self.start_load(&provider_type, &resource),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::providers;

    fn app() -> App {
        App::new(Registry::with_defaults(&Config::default()))
    }

    #[tokio::test]
    async fn test_load_replaces_screen() {
        let mut app = app();
        assert!(app.screen().is_loading());
        assert!(app.focus().is_none());

        app.start_load(providers::JSON, r#"{"component": "layout:text", "properties": {"text": "hi"}}"#)
            .unwrap();
        assert!(app.is_loading());
        app.settle().await.unwrap();

        assert!(!app.is_loading());
        assert_eq!(app.view().unwrap().text_content(), "hi");
        assert_eq!(app.focus(), Some(0));
    }

    #[tokio::test]
    async fn test_failed_load_shows_error() {
        let mut app = app();
        app.start_load(providers::JSON, "{not json").unwrap();
        app.settle().await.unwrap();
        assert!(matches!(app.screen(), LoadState::Error(_)));
        assert!(app.view().is_none());
    }

    #[tokio::test]
    async fn test_ignored_tree_keeps_screen() {
        let mut app = app();
        app.start_load(providers::JSON, r#"{"component": "layout:text", "properties": {"text": "kept"}}"#)
            .unwrap();
        app.settle().await.unwrap();
        app.state_mut().insert("typed", "x");

        app.finish_load(LoadState::Success(Tree::Ignored)).unwrap();

        assert_eq!(app.view().unwrap().text_content(), "kept");
        assert_eq!(app.state().get("typed"), Some("x"));
    }

    #[tokio::test]
    async fn test_unknown_provider_is_fatal_and_keeps_state() {
        let mut app = app();
        let err = app.start_load("ftp", "anything").unwrap_err();
        assert!(err.is_fatal());
        assert!(!app.is_loading());
    }

    #[tokio::test]
    async fn test_unknown_method_in_loaded_tree_is_fatal() {
        let mut app = app();
        app.start_load(
            providers::JSON,
            r#"{"component": "layout:text", "properties": {
                "text": "hi",
                "visible": {"component": "method:isShiny"}
            }}"#,
        )
        .unwrap();
        let err = app.settle().await.unwrap_err();
        assert!(err.is_fatal());
        assert!(app.screen().is_loading(), "the tree is not shown");
    }

    #[tokio::test]
    async fn test_navigation_request_starts_load() {
        let mut app = app();
        app.state_mut().insert(
            navigation::REQUEST_KEY,
            r#"json:{"component": "layout:text", "properties": {"text": "next"}}"#,
        );
        app.process_navigation().unwrap();
        assert!(app.is_loading());
        app.settle().await.unwrap();
        assert_eq!(app.view().unwrap().text_content(), "next");
    }
}
