//! # recipegraph
//!
//! Producer/consumer graph over a game's crafting recipes.
//!
//! An edge from recipe node A to recipe node B means "B consumes something A
//! produces". The graph can be built node by node or all at once, and a
//! curated working set (nodes plus user-authored items and recipes) can be
//! saved to and restored from a session document.
//!
//! ## Architecture
//!
//! ```text
//! Session (export / import of working sets)
//!     ↓
//! Planner (working set: graph + custom items/recipes + config)
//!     ↓
//! RecipeGraph (nodes, edges, bulk and incremental connection, algorithms)
//!     ↓
//! Catalog + Model (immutable game data)
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use recipegraph::{Catalog, Planner};
//!
//! let catalog = Catalog::load("assets/data.json")?;
//! let mut planner = Planner::new(catalog);
//! planner.populate_from_catalog();
//!
//! std::fs::write("recipes.dot", planner.graph().export_dot()).ok();
//! let saved = planner.export_session_json()?;
//! # Ok::<(), recipegraph::GraphError>(())
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod graph;
pub mod model;
pub mod planner;
pub mod query;
pub mod session;

// Re-export main types
pub use catalog::Catalog;
pub use config::{ExclusionRules, PlannerConfig};
pub use error::{GraphError, Result};
pub use export::DotOptions;
pub use filter::RecipeFilter;
pub use graph::{ConnectMode, Direction, NodeId, RecipeGraph, RecipeNode};
pub use model::{Category, Icon, Item, Quantities, Recipe};
pub use planner::Planner;
pub use query::NodeQuery;
pub use session::{ImportSummary, ItemRecord, NodeRecord, RecipeRecord, SessionDocument};
