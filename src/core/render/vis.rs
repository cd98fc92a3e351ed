//! Vis-style JSON payload for the external rendering engine
//!
//! The options block is pass-through: the core never interprets it, it is
//! serialized next to the graph exactly as configured and the rendering
//! collaborator decides what to do with it.

use serde::{Deserialize, Serialize};

use crate::core::models::Graph;

/// Hierarchical layout configuration for the rendering engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalLayout {
    /// Whether hierarchical layout is enabled
    pub enabled: bool,
    /// Vertical distance between hierarchy levels
    pub level_separation: u32,
    /// Minimum distance between nodes on one level
    pub node_spacing: u32,
    /// Distance between independent trees
    pub tree_spacing: u32,
    /// Layout direction (`LR` for left-to-right)
    pub direction: String,
    /// Node ordering method within a level
    pub sort_method: String,
}

impl Default for HierarchicalLayout {
    fn default() -> Self {
        Self {
            enabled: true,
            level_separation: 150,
            node_spacing: 100,
            tree_spacing: 200,
            direction: "LR".to_string(),
            sort_method: "directed".to_string(),
        }
    }
}

/// Pass-through rendering configuration handed along with the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Canvas height
    pub height: String,
    /// Default edge color
    pub edge_color: String,
    /// Default node fill color for nodes without an explicit one
    pub node_color: String,
    /// Label font color
    pub font_color: String,
    /// Default node shape
    pub node_shape: String,
    /// Default node size
    pub node_size: u32,
    /// Hierarchical layout settings
    pub hierarchical: HierarchicalLayout,
}

impl Default for RenderOptions {
    /// Light-theme defaults
    fn default() -> Self {
        Self {
            height: "500px".to_string(),
            edge_color: "#b1b1b1".to_string(),
            node_color: "rgb(226 232 240)".to_string(),
            font_color: "#000000".to_string(),
            node_shape: "dot".to_string(),
            node_size: 14,
            hierarchical: HierarchicalLayout::default(),
        }
    }
}

/// A composed graph plus its pass-through options, ready to serialize for
/// the rendering collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPayload<'a> {
    /// The composed graph
    pub graph: &'a Graph,
    /// Pass-through rendering configuration
    pub options: &'a RenderOptions,
}

impl RenderPayload<'_> {
    /// Serialize the payload as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
