// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Node ids are generic, so graph errors carry the `Debug` rendering of the
//! offending id rather than the id itself. That keeps `DagError` `'static`
//! and usable behind `anyhow`.

use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DagError {
    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("Self-loop rejected on node {0}")]
    SelfLoop(String),

    #[error("Cycle detected in DAG; unresolved nodes: {}", .unresolved.join(", "))]
    Cycle { unresolved: Vec<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DagError {
    pub fn duplicate_node(id: &impl Debug) -> Self {
        Self::DuplicateNode(format!("{id:?}"))
    }

    pub fn node_not_found(id: &impl Debug) -> Self {
        Self::NodeNotFound(format!("{id:?}"))
    }

    pub fn edge_not_found(from: &impl Debug, to: &impl Debug) -> Self {
        Self::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub fn self_loop(id: &impl Debug) -> Self {
        Self::SelfLoop(format!("{id:?}"))
    }

    pub fn cycle<'a, N: Debug + 'a>(unresolved: impl IntoIterator<Item = &'a N>) -> Self {
        Self::Cycle {
            unresolved: unresolved.into_iter().map(|n| format!("{n:?}")).collect(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DagError>;
