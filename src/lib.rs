// src/lib.rs

//! In-memory dependency graph with deterministic topological ordering.
//!
//! The crate is the graph engine only: callers add nodes and edges,
//! then ask for orderings, reachability or validity. Executing the nodes is
//! the caller's business.
//!
//! ```
//! use depdag::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! for step in ["fetch", "build", "test"] {
//!     graph.add_node(step.to_string())?;
//! }
//! graph.add_edge("fetch", "build")?;
//! graph.add_edge("build", "test")?;
//!
//! assert!(graph.validate().is_valid());
//! assert_eq!(graph.topological_sort(), ["fetch", "build", "test"]);
//! # Ok::<(), depdag::DagError>(())
//! ```

pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::GraphConfig;
pub use dag::{DependencyGraph, NodeId, Validation};
pub use errors::{DagError, Result};
pub use types::{LogLevel, SelfLoopPolicy};
