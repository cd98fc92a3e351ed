//! Node styling tables
//!
//! Styling is an explicit parameter of the build/compose pipeline rather
//! than ambient UI state, so identical inputs always produce identical
//! graphs. Theme selection (light/dark) happens in the caller by passing a
//! different table.

use serde::{Deserialize, Serialize};

/// Size of operator junction nodes
pub const OPERATOR_NODE_SIZE: u32 = 6;

/// Shape of operator junction nodes
pub const OPERATOR_NODE_SHAPE: &str = "hexagon";

/// Logical group a requirement subgraph belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeGroup {
    /// Courses that must be completed beforehand
    Prerequisite,
    /// Courses that must be taken concurrently
    Corequisite,
}

/// Caller-supplied fill colors keyed by logical group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleTable {
    /// Fill color for prerequisite course nodes
    pub prerequisite: String,

    /// Fill color for corequisite course nodes
    pub corequisite: String,

    /// Fill color for operator junction nodes
    pub operator: String,
}

impl StyleTable {
    /// Color for a course node in the given logical group
    #[must_use]
    pub fn group_color(&self, group: NodeGroup) -> &str {
        match group {
            NodeGroup::Prerequisite => &self.prerequisite,
            NodeGroup::Corequisite => &self.corequisite,
        }
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            prerequisite: "rgb(252 165 165)".to_string(),
            corequisite: "rgb(134 239 172)".to_string(),
            operator: "#ffffff".to_string(),
        }
    }
}
