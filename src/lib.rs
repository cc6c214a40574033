//! sdui - a server-driven UI resolution engine with a terminal front end
//!
//! Content trees of namespaced nodes are produced by pluggable providers,
//! loaded asynchronously, and resolved against a registry of component,
//! action and method handlers.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod loader;
pub mod logging;
pub mod methods;
pub mod node;
pub mod prelude;
pub mod providers;
pub mod registry;
pub mod render;
pub mod state;
pub mod terminal;
pub mod ui;
