//! Requirement-expression to graph transformation
//!
//! Post-order traversal turning one boolean requirement tree into nodes and
//! edges. Node identity doubles as the dedup mechanism: a leaf's id is its
//! course code, an operator's id is the ordered join of its children's ids,
//! so two structurally identical subexpressions anywhere in the traversal
//! land on the same node without a memo table.

use tracing::debug;

use crate::core::course_code;
use crate::core::error::GraphError;
use crate::core::models::{Graph, GraphEdge, GraphNode, NodeCategory, Operator, RequirementNode};
use crate::core::style::{NodeGroup, StyleTable, OPERATOR_NODE_SHAPE, OPERATOR_NODE_SIZE};

/// Sentinel prefix for operator-derived ids
///
/// Never valid in a course code, so a junction id can never collide with a
/// real course and always fails the course-code validator.
pub const OPERATOR_ID_SENTINEL: char = '#';

/// Build the graph for one requirement expression
///
/// Returns an empty, rootless graph when `requirement` is absent. The graph
/// is rebuilt in full on every call and depends only on the inputs.
///
/// # Errors
///
/// Returns [`GraphError::InvalidRequirement`] if any operator group in the
/// expression has no children.
pub fn build(
    group: NodeGroup,
    requirement: Option<&RequirementNode>,
    styles: &StyleTable,
) -> Result<Graph, GraphError> {
    let Some(requirement) = requirement else {
        return Ok(Graph::new());
    };

    let mut graph = Graph::new();
    let root = traverse(requirement, group, styles, &mut graph)?;
    graph.root = Some(root);

    debug!(
        ?group,
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "built requirement graph"
    );

    Ok(graph)
}

/// Derive the deterministic id for an operator node from its ordered
/// child ids
fn operator_id(operator: Operator, child_ids: &[String]) -> String {
    format!(
        "{OPERATOR_ID_SENTINEL}{}",
        child_ids.join(operator.symbol())
    )
}

/// Visit one requirement node, children first, and return the id of the
/// graph node built for it
fn traverse(
    node: &RequirementNode,
    group: NodeGroup,
    styles: &StyleTable,
    graph: &mut Graph,
) -> Result<String, GraphError> {
    match node {
        RequirementNode::Course(code) => {
            // Course codes compare equal after normalization, so the id is
            // the normalized form; otherwise a spaced leaf would not merge
            // with the same course referenced elsewhere in the graph.
            let code = course_code::normalize(code);
            graph.upsert_node(GraphNode {
                id: code.clone(),
                label: code.clone(),
                category: NodeCategory::Course,
                color: Some(styles.group_color(group).to_string()),
                shape: None,
                size: None,
                title: None,
            });
            Ok(code)
        }
        RequirementNode::Group { operator, groups } => {
            if groups.is_empty() {
                return Err(GraphError::InvalidRequirement {
                    operator: operator.symbol().to_string(),
                });
            }

            // Children first, left to right: their ids feed this node's id.
            let mut child_ids = Vec::with_capacity(groups.len());
            for child in groups {
                child_ids.push(traverse(child, group, styles, graph)?);
            }

            let id = operator_id(*operator, &child_ids);

            // An existing node with this id is the same subexpression, so
            // its child edges already exist too.
            if !graph.contains_node(&id) {
                graph.upsert_node(GraphNode {
                    id: id.clone(),
                    label: operator.symbol().to_string(),
                    category: NodeCategory::Operator,
                    color: Some(styles.operator.clone()),
                    shape: Some(OPERATOR_NODE_SHAPE.to_string()),
                    size: Some(OPERATOR_NODE_SIZE),
                    title: None,
                });

                let dashed = *operator == Operator::Or;
                for child_id in &child_ids {
                    graph.edges.push(GraphEdge {
                        from: child_id.clone(),
                        to: id.clone(),
                        dashed,
                    });
                }
            }

            Ok(id)
        }
    }
}
