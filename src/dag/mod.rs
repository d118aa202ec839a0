// src/dag/mod.rs

//! Dependency graph engine.
//!
//! - [`graph`] holds the node/edge store and the mutation API.
//! - [`traverse`] computes reachability closures.
//! - [`topo`] orders nodes with Kahn's algorithm and checks acyclicity.

pub mod graph;
pub mod topo;
pub mod traverse;

pub use graph::{DependencyGraph, NodeId};
pub use topo::Validation;
