//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`RecipeNode`]: one instantiation of a recipe in the working graph
//! - [`RecipeGraph`]: nodes plus producer/consumer edges
//! - [`algorithms`]: traversal and loop detection over the built graph

mod types;
mod recipe_graph;
pub mod algorithms;

pub use types::{ConnectMode, Direction, NodeId, RecipeNode};
pub use recipe_graph::RecipeGraph;
