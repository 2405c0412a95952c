//! # postman-tui
//!
//! A terminal HTTP client in the spirit of Postman.
//!
//! ## Features
//! - HTTP methods: GET, POST, PUT, PATCH, DELETE
//! - Query parameter table appended to the URL
//! - Body parameter table sent form-url-encoded
//! - Tab-driven focus cycle across URL, tables and method
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod args;
pub mod config;
pub mod constants;
pub mod error;
pub mod messages;
pub mod models;
pub mod network;
pub mod params;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, FocusTarget};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{HttpMethod, RequestDescriptor};
pub use network::NetworkActor;
pub use params::{Column, Param, ParamTable};
