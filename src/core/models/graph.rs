//! Graph output model
//!
//! The node/edge representation handed to the external rendering engine.
//! Graphs are built fresh per invocation and never mutated afterwards by
//! this crate; node ids are unique within one graph.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether a node stands for a real course or a synthetic AND/OR junction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeCategory {
    /// A real course, selectable and navigable
    Course,
    /// A synthetic operator junction, not a real course
    Operator,
}

/// A renderable graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique id within the graph: the course code for course nodes, a
    /// sentinel-prefixed structural join for operator nodes
    pub id: String,

    /// Display label (course code or operator symbol)
    pub label: String,

    /// Node kind, drives downstream styling
    pub category: NodeCategory,

    /// Fill color; absent nodes fall back to the renderer's default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Shape override (operator junctions render as hexagons)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,

    /// Size override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Hover tooltip (the focal course's description)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A directed edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node id
    pub from: String,

    /// Target node id
    pub to: String,

    /// Dashed rendering, set exactly for OR-branch links
    #[serde(default)]
    pub dashed: bool,
}

/// A built or composed dependency graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes, ids unique within this graph
    pub nodes: Vec<GraphNode>,

    /// Directed edges between node ids
    pub edges: Vec<GraphEdge>,

    /// Id of the expression's top-level node, absent when the expression
    /// was absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
}

impl Graph {
    /// Create an empty, rootless graph
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            root: None,
        }
    }

    /// Check whether a node with the given id exists
    #[must_use]
    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Insert a node, replacing any existing node with the same id
    ///
    /// Last writer wins: leaf ids are real course codes, so the same course
    /// referenced from several places legitimately collapses to one node.
    pub fn upsert_node(&mut self, node: GraphNode) {
        if let Some(pos) = self.nodes.iter().position(|n| n.id == node.id) {
            self.nodes[pos] = node;
        } else {
            self.nodes.push(node);
        }
    }

    /// Drop every edge whose endpoints are not both present as nodes
    ///
    /// Dangling endpoints arise when a subgraph root is absent; they must
    /// never survive into a finalized graph.
    pub fn retain_connected_edges(&mut self) {
        let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        self.edges
            .retain(|edge| ids.contains(edge.from.as_str()) && ids.contains(edge.to.as_str()));
    }
}
