//! Mermaid diagram generator for composed course graphs
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown
//! files and rendered by GitHub, GitLab, and other Markdown viewers.

use std::fmt::Write;

use crate::core::models::{Graph, NodeCategory};

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a left-to-right flowchart from a composed graph
    ///
    /// Course nodes render as rectangles, operator junctions as hexagons,
    /// and OR-branch edges use dashed arrows.
    #[must_use]
    pub fn generate(graph: &Graph) -> String {
        let mut output = String::from("```mermaid\nflowchart LR\n");

        for node in &graph.nodes {
            let safe_id = Self::sanitize_id(&node.id);
            match node.category {
                NodeCategory::Course => {
                    let _ = writeln!(output, "    {safe_id}[\"{}\"]", node.label);
                }
                NodeCategory::Operator => {
                    let _ = writeln!(output, "    {safe_id}{{{{\"{}\"}}}}", node.label);
                }
            }
        }

        output.push('\n');

        for edge in &graph.edges {
            let from = Self::sanitize_id(&edge.from);
            let to = Self::sanitize_id(&edge.to);
            let arrow = if edge.dashed { "-.->" } else { "-->" };
            let _ = writeln!(output, "    {from} {arrow} {to}");
        }

        output.push_str("```\n");
        output
    }

    /// Sanitize a node id for use as a Mermaid identifier
    ///
    /// Mermaid ids cannot contain spaces or special characters, so anything
    /// outside `[A-Za-z0-9]` becomes an underscore.
    fn sanitize_id(id: &str) -> String {
        id.chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::builder::build;
    use crate::core::composer::compose;
    use crate::core::models::{Course, Operator, RequirementNode};
    use crate::core::style::{NodeGroup, StyleTable};

    #[test]
    fn test_mermaid_generation() {
        let course = Course {
            id: "CS201".to_string(),
            description: String::new(),
            logical_prerequisites: Some(RequirementNode::group(
                Operator::Or,
                vec![
                    RequirementNode::course("CS101"),
                    RequirementNode::course("CS102"),
                ],
            )),
            logical_corequisites: None,
            leading_to: vec!["CS301".to_string()],
        };

        let styles = StyleTable::default();
        let prereq = build(
            NodeGroup::Prerequisite,
            course.logical_prerequisites.as_ref(),
            &styles,
        )
        .unwrap();
        let coreq = build(NodeGroup::Corequisite, None, &styles).unwrap();

        let diagram = MermaidGenerator::generate(&compose(&course, prereq, coreq));

        assert!(diagram.contains("```mermaid"));
        assert!(diagram.contains("flowchart LR"));
        assert!(diagram.contains("CS101"));
        assert!(diagram.contains("CS301"));
        // OR branches are dashed, the rest solid
        assert!(diagram.contains("-.->"));
        assert!(diagram.contains("-->"));
        // Operator junction renders as a hexagon
        assert!(diagram.contains("{{\"OR\"}}"));
    }

    #[test]
    fn test_sanitize_id() {
        assert_eq!(MermaidGenerator::sanitize_id("CS 101"), "CS_101");
        assert_eq!(
            MermaidGenerator::sanitize_id("#CS101ORCS102"),
            "_CS101ORCS102"
        );
    }
}
