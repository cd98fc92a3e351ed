//! Integration tests for the build/compose/resolve pipeline

use course_graph::core::builder::build;
use course_graph::core::composer::compose;
use course_graph::core::models::{Course, Operator, RequirementNode};
use course_graph::core::render::MermaidGenerator;
use course_graph::core::selection;
use course_graph::core::style::{NodeGroup, StyleTable};

fn or(groups: Vec<RequirementNode>) -> RequirementNode {
    RequirementNode::group(Operator::Or, groups)
}

fn and(groups: Vec<RequirementNode>) -> RequirementNode {
    RequirementNode::group(Operator::And, groups)
}

fn leaf(code: &str) -> RequirementNode {
    RequirementNode::course(code)
}

/// Full pipeline: JSON course in, composed graph out, selection resolved.
#[test]
fn test_end_to_end_course_graph() {
    let json = r#"{
        "id": "CS201",
        "description": "Data structures and algorithms.",
        "logicalPrerequisites": {
            "operator": "AND",
            "groups": [
                "MATH133",
                { "operator": "OR", "groups": ["CS101", "CS102"] }
            ]
        },
        "logicalCorequisites": "MATH140",
        "leadingTo": ["CS301", "CS302"]
    }"#;
    let course: Course = serde_json::from_str(json).expect("course should parse");

    let styles = StyleTable::default();
    let prereq = build(
        NodeGroup::Prerequisite,
        course.logical_prerequisites.as_ref(),
        &styles,
    )
    .expect("prerequisites should build");
    let coreq = build(
        NodeGroup::Corequisite,
        course.logical_corequisites.as_ref(),
        &styles,
    )
    .expect("corequisites should build");

    let graph = compose(&course, prereq, coreq);

    // Leaves, two operators, focal, coreq leaf, two dependents
    assert!(graph.contains_node("CS201"));
    assert!(graph.contains_node("CS101"));
    assert!(graph.contains_node("CS102"));
    assert!(graph.contains_node("MATH133"));
    assert!(graph.contains_node("MATH140"));
    assert!(graph.contains_node("CS301"));
    assert!(graph.contains_node("CS302"));

    // Both requirement roots connect into the focal course
    assert!(graph
        .edges
        .iter()
        .any(|e| e.to == "CS201" && e.from.starts_with('#')));
    assert!(graph
        .edges
        .iter()
        .any(|e| e.from == "MATH140" && e.to == "CS201"));

    // Dependents hang off the focal course
    assert!(graph.edges.iter().any(|e| e.from == "CS201" && e.to == "CS301"));
    assert!(graph.edges.iter().any(|e| e.from == "CS201" && e.to == "CS302"));

    // No dangling endpoints anywhere
    for edge in &graph.edges {
        assert!(graph.contains_node(&edge.from));
        assert!(graph.contains_node(&edge.to));
    }

    // Selecting a course node navigates; selecting the OR junction does not
    assert_eq!(
        selection::resolve(&["CS101".to_string()]),
        Some("CS101".to_string())
    );
    let or_id = graph
        .nodes
        .iter()
        .find(|n| n.label == "OR")
        .map(|n| n.id.clone())
        .expect("OR junction should exist");
    assert_eq!(selection::resolve(&[or_id]), None);
}

#[test]
fn test_dedup_law_across_whole_traversal() {
    // The same OR group appears in two distant corners of the tree.
    let shared = or(vec![leaf("CS101"), leaf("CS102")]);
    let tree = and(vec![
        and(vec![shared.clone(), leaf("MATH133")]),
        and(vec![shared, leaf("MATH140")]),
    ]);

    let graph = build(
        NodeGroup::Prerequisite,
        Some(&tree),
        &StyleTable::default(),
    )
    .expect("tree should build");

    let or_count = graph.nodes.iter().filter(|n| n.label == "OR").count();
    assert_eq!(or_count, 1, "identical subexpressions must share one node");
}

#[test]
fn test_build_output_is_deterministic() {
    let tree = and(vec![leaf("CS101"), or(vec![leaf("CS102"), leaf("CS103")])]);
    let styles = StyleTable::default();

    let first = build(NodeGroup::Prerequisite, Some(&tree), &styles).unwrap();
    let second = build(NodeGroup::Prerequisite, Some(&tree), &styles).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_absent_requirements_compose_to_dependents_only() {
    let mut course = Course::new("CS201".to_string(), String::new());
    course.leading_to.push("CS301".to_string());

    let styles = StyleTable::default();
    let prereq = build(NodeGroup::Prerequisite, None, &styles).unwrap();
    let coreq = build(NodeGroup::Corequisite, None, &styles).unwrap();

    let graph = compose(&course, prereq, coreq);

    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.edges[0].from, "CS201");
    assert_eq!(graph.edges[0].to, "CS301");
}

#[test]
fn test_mermaid_export_of_composed_graph() {
    let mut course = Course::new("CS201".to_string(), String::new());
    course.logical_prerequisites = Some(or(vec![leaf("CS101"), leaf("CS102")]));

    let styles = StyleTable::default();
    let prereq = build(
        NodeGroup::Prerequisite,
        course.logical_prerequisites.as_ref(),
        &styles,
    )
    .unwrap();
    let coreq = build(NodeGroup::Corequisite, None, &styles).unwrap();

    let diagram = MermaidGenerator::generate(&compose(&course, prereq, coreq));

    assert!(diagram.starts_with("```mermaid\nflowchart LR\n"));
    assert!(diagram.contains("-.->"));
    assert!(diagram.ends_with("```\n"));
}

#[test]
fn test_invalid_requirement_surfaces_from_course_json() {
    let json = r#"{
        "id": "CS201",
        "logicalPrerequisites": { "operator": "AND", "groups": [] }
    }"#;
    let course: Course = serde_json::from_str(json).expect("course should parse");

    let result = build(
        NodeGroup::Prerequisite,
        course.logical_prerequisites.as_ref(),
        &StyleTable::default(),
    );

    assert!(result.is_err());
}
