//! Requirement expression model
//!
//! A requirement expression is a boolean tree of course codes combined with
//! AND/OR, describing prerequisite or corequisite logic. It is produced by
//! the course-data collaborator and read-only to this crate.

use serde::{Deserialize, Serialize};

/// Boolean operator joining the children of a requirement group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    /// Every child must be satisfied
    And,
    /// Any single child suffices
    Or,
}

impl Operator {
    /// The operator's display symbol, also used as the separator when
    /// deriving a structural node id from child ids
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One node of a requirement expression tree
///
/// The wire shape matches the course-data collaborator: a leaf is a bare
/// course code string, a group is an object carrying an operator and its
/// ordered children. Child order is significant because it feeds structural
/// id derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementNode {
    /// A single course code (e.g., "CS101")
    Course(String),
    /// An AND/OR junction over an ordered, non-empty list of children
    Group {
        /// Operator joining the children
        operator: Operator,
        /// Ordered child expressions
        groups: Vec<RequirementNode>,
    },
}

impl RequirementNode {
    /// Build a leaf node from a course code
    #[must_use]
    pub fn course(code: &str) -> Self {
        Self::Course(code.to_string())
    }

    /// Build a group node joining `groups` with `operator`
    #[must_use]
    pub const fn group(operator: Operator, groups: Vec<Self>) -> Self {
        Self::Group { operator, groups }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::And.symbol(), "AND");
        assert_eq!(Operator::Or.symbol(), "OR");
        assert_eq!(Operator::Or.to_string(), "OR");
    }

    #[test]
    fn test_deserialize_leaf_from_bare_string() {
        let node: RequirementNode = serde_json::from_str("\"CS101\"").unwrap();
        assert_eq!(node, RequirementNode::course("CS101"));
    }

    #[test]
    fn test_deserialize_group() {
        let json = r#"{ "operator": "OR", "groups": ["CS101", "CS102"] }"#;
        let node: RequirementNode = serde_json::from_str(json).unwrap();

        assert_eq!(
            node,
            RequirementNode::group(
                Operator::Or,
                vec![
                    RequirementNode::course("CS101"),
                    RequirementNode::course("CS102"),
                ]
            )
        );
    }

    #[test]
    fn test_deserialize_nested_groups() {
        let json = r#"{
            "operator": "AND",
            "groups": [
                "MATH133",
                { "operator": "OR", "groups": ["CS101", "CS102"] }
            ]
        }"#;
        let node: RequirementNode = serde_json::from_str(json).unwrap();

        let RequirementNode::Group { operator, groups } = node else {
            panic!("expected a group");
        };
        assert_eq!(operator, Operator::And);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], RequirementNode::course("MATH133"));
    }
}
