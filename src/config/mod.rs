// src/config/mod.rs

//! Engine configuration.
//!
//! - TOML-backed data model (`model.rs`).
//! - Loading from disk (`loader.rs`).
//!
//! Only the graph engine's own behaviour is configured here; graph contents
//! are always supplied programmatically.

pub mod loader;
pub mod model;

pub use loader::{default_config_path, load_from_path, load_or_default};
pub use model::{GraphConfig, GraphSection, LoggingSection};
