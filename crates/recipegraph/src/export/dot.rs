//! DOT format export for Graphviz visualization.
//!
//! Nodes are labelled with their recipe name and filled by category.

use crate::graph::RecipeGraph;
use std::collections::HashMap;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Ordered `(category substring, fill colour)` rules; the first match wins
    pub category_colors: Vec<(String, String)>,
    /// Fill colour when no rule matches
    pub default_color: String,
    /// Node shape (box, ellipse, ...)
    pub node_shape: String,
    /// Edge colour
    pub edge_color: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Append the recipe category to each label
    pub show_category: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        let category_colors = [
            ("logistics", "#e6b8af"),
            ("production", "#fff2cc"),
            ("intermediate", "#d9ead3"),
            ("science", "#c9daf8"),
        ]
        .into_iter()
        .map(|(category, color)| (category.to_string(), color.to_string()))
        .collect();

        DotOptions {
            category_colors,
            default_color: "#efefef".to_string(),
            node_shape: "box".to_string(),
            edge_color: "gray".to_string(),
            rankdir: "TB".to_string(),
            show_category: false,
        }
    }
}

impl DotOptions {
    /// Fill colour for a recipe category.
    pub fn color_for(&self, category: &str) -> &str {
        self.category_colors
            .iter()
            .find(|(needle, _)| category.contains(needle.as_str()))
            .map(|(_, color)| color.as_str())
            .unwrap_or(self.default_color.as_str())
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &RecipeGraph) -> String {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &RecipeGraph, options: &DotOptions) -> String {
    let mut output = String::new();

    // Header
    output.push_str("digraph recipe_graph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str(&format!(
        "    node [style=filled, shape={}];\n",
        options.node_shape
    ));
    output.push_str(&format!("    edge [color=\"{}\"];\n\n", options.edge_color));

    // DOT ids are short positional names; the UUIDs would only add noise.
    let mut names = HashMap::new();
    for (pos, node) in graph.nodes().enumerate() {
        names.insert(node.id, format!("n{pos}"));

        let mut label = escape_dot_label(node.label());
        if options.show_category {
            label.push_str("\\n");
            label.push_str(&escape_dot_label(&node.recipe.category));
        }
        let color = options.color_for(&node.recipe.category);

        output.push_str(&format!(
            "    n{pos} [label=\"{label}\", fillcolor=\"{color}\"];\n"
        ));
    }

    output.push('\n');

    for (source, target) in graph.edges() {
        if let (Some(s), Some(t)) = (names.get(&source), names.get(&target)) {
            output.push_str(&format!("    {s} -> {t};\n"));
        }
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
