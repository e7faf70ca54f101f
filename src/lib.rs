// outbox: terminal campaign browser built around a collapsible campaign sidebar.

pub mod app;
pub mod campaign;
pub mod config;
pub mod error;
pub mod session;
pub mod state;
pub mod store;
pub mod tui;
pub mod ui;

pub use error::{OutboxError, Result};
