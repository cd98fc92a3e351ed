//! Data models for `course-graph`

pub mod course;
pub mod graph;
pub mod requirement;

pub use course::Course;
pub use graph::{Graph, GraphEdge, GraphNode, NodeCategory};
pub use requirement::{Operator, RequirementNode};
