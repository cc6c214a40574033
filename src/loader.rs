//! Asynchronous tree loading.
//!
//! A [`TreeLoad`] runs one tree-producing future on the tokio runtime and
//! exposes its progress as a [`LoadState`]. The state is `Loading` as soon
//! as the load exists, then moves exactly once to `Success` or `Error`.
//! Nothing is retried; a new load is a new `TreeLoad`.
//!
//! Dropping or [cancelling](TreeLoad::cancel) a load aborts its task. A
//! superseded load is therefore cancelled rather than left to finish in the
//! background.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::node::Tree;

/// Reason a load failed, kept as display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    reason: String,
}

impl LoadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub(crate) fn cancelled() -> Self {
        Self::new("load cancelled")
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for LoadError {}

/// Observable state of a tree load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Success(Tree),
    Error(LoadError),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }
}

/// Handle to one in-flight or finished tree load.
#[derive(Debug)]
pub struct TreeLoad {
    state: watch::Receiver<LoadState>,
    task: JoinHandle<()>,
}

impl TreeLoad {
    /// Start `operation` on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F, E>(operation: F) -> Self
    where
        F: Future<Output = Result<Tree, E>> + Send + 'static,
        E: fmt::Display,
    {
        let (tx, rx) = watch::channel(LoadState::Loading);
        let task = tokio::spawn(async move {
            let terminal = match AssertUnwindSafe(operation).catch_unwind().await {
                Ok(Ok(tree)) => LoadState::Success(tree),
                Ok(Err(e)) => LoadState::Error(LoadError::new(e.to_string())),
                Err(panic) => LoadState::Error(LoadError::new(panic_reason(panic.as_ref()))),
            };
            match &terminal {
                LoadState::Error(e) => tracing::warn!("Tree load failed: {}", e),
                _ => tracing::info!("Tree load finished"),
            }
            let _ = tx.send(terminal);
        });
        Self { state: rx, task }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    /// Wait for the terminal state.
    ///
    /// Returns immediately if the load already finished. A load whose task
    /// went away without publishing a result reports a cancellation error.
    pub async fn finished(&mut self) -> LoadState {
        match self.state.wait_for(LoadState::is_terminal).await {
            Ok(state) => state.clone(),
            Err(_) => LoadState::Error(LoadError::cancelled()),
        }
    }

    /// Abort the load if it is still running.
    pub fn cancel(&self) {
        self.task.abort();
    }
}

impl Drop for TreeLoad {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn panic_reason(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        format!("provider panicked: {}", message)
    } else if let Some(message) = panic.downcast_ref::<String>() {
        format!("provider panicked: {}", message)
    } else {
        "provider panicked".to_string()
    }
}
