//! Graph composition around a focal course
//!
//! Merges the prerequisite subgraph, the corequisite subgraph, a node for
//! the focal course, and its flat leads-to dependents into one renderable
//! graph, then drops any edge left without both endpoints.

use tracing::debug;

use crate::core::course_code;
use crate::core::models::{Course, Graph, GraphEdge, GraphNode, NodeCategory};

/// Compose the full dependency graph for a focal course
///
/// `prereq` and `coreq` are the outputs of [`build`](crate::core::builder::build)
/// for the course's two requirement expressions. Dependents are flat
/// relations and become plain course nodes, not requirement subgraphs.
///
/// Node id collisions across the inputs collapse last-writer-wins: leaf ids
/// are real course codes, so the same course referenced from several places
/// is meant to share one node. Root connector edges are added only when the
/// respective subgraph root exists; any remaining edge with an absent
/// endpoint is filtered out before the graph is returned.
#[must_use]
pub fn compose(course: &Course, prereq: Graph, coreq: Graph) -> Graph {
    let focal_id = course_code::normalize(&course.id);

    let mut graph = Graph::new();

    for node in prereq.nodes {
        graph.upsert_node(node);
    }
    for node in coreq.nodes {
        graph.upsert_node(node);
    }

    graph.upsert_node(GraphNode {
        id: focal_id.clone(),
        label: course_code::add_space(&focal_id),
        category: NodeCategory::Course,
        color: None,
        shape: None,
        size: None,
        title: if course.description.is_empty() {
            None
        } else {
            Some(course.description.clone())
        },
    });

    graph.edges.extend(prereq.edges);
    graph.edges.extend(coreq.edges);

    if let Some(root) = prereq.root {
        graph.edges.push(GraphEdge {
            from: root,
            to: focal_id.clone(),
            dashed: false,
        });
    }
    if let Some(root) = coreq.root {
        graph.edges.push(GraphEdge {
            from: root,
            to: focal_id.clone(),
            dashed: false,
        });
    }

    for dependent in &course.leading_to {
        let dependent_id = course_code::normalize(dependent);
        graph.upsert_node(GraphNode {
            id: dependent_id.clone(),
            label: course_code::add_space(&dependent_id),
            category: NodeCategory::Course,
            color: None,
            shape: None,
            size: None,
            title: None,
        });
        graph.edges.push(GraphEdge {
            from: focal_id.clone(),
            to: dependent_id,
            dashed: false,
        });
    }

    graph.retain_connected_edges();
    graph.root = Some(focal_id);

    debug!(
        course = %course.id,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "composed course graph"
    );

    graph
}
