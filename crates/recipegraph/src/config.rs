//! Planner configuration.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Case-insensitive substrings that keep catalog recipes out of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExclusionRules {
    /// Exclude recipes whose category contains any of these
    pub category_contains: Vec<String>,

    /// Exclude recipes whose name contains any of these
    pub name_contains: Vec<String>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self {
            category_contains: vec!["recycling".to_string()],
            name_contains: vec!["recycling".to_string(), "barrel".to_string()],
        }
    }
}

impl ExclusionRules {
    /// Rules that exclude nothing.
    pub fn none() -> Self {
        Self {
            category_contains: Vec::new(),
            name_contains: Vec::new(),
        }
    }
}

/// Configuration for graph population and connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Which catalog recipes `populate_from_catalog` skips
    pub exclusions: ExclusionRules,

    /// Add `a -> a` edges for recipes that consume their own product
    pub allow_self_loops: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            exclusions: ExclusionRules::default(),
            allow_self_loops: true,
        }
    }
}

impl PlannerConfig {
    /// Config that populates every catalog recipe.
    pub fn unfiltered() -> Self {
        Self {
            exclusions: ExclusionRules::none(),
            ..Default::default()
        }
    }

    /// Read a config from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be read and
    /// [`GraphError::Format`] if it is not a valid config document.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
        Self::from_json_str(&text)
    }

    /// Parse a config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Format`] if the text is not a valid config document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| GraphError::format("Malformed planner config", Some(e)))
    }
}
