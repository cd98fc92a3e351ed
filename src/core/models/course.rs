//! Course entity model

use serde::{Deserialize, Serialize};

use super::requirement::RequirementNode;

/// A course as supplied by the course-data collaborator
///
/// Carries everything the composer needs: identity, the description used as
/// the focal node's tooltip, the two requirement expressions, and the flat
/// list of courses this one leads into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code identifying this course (e.g., "COMP202")
    pub id: String,

    /// Catalog description, shown as the focal node's tooltip
    #[serde(default)]
    pub description: String,

    /// Prerequisite requirement expression, absent when there are none
    #[serde(default)]
    pub logical_prerequisites: Option<RequirementNode>,

    /// Corequisite requirement expression, absent when there are none
    #[serde(default)]
    pub logical_corequisites: Option<RequirementNode>,

    /// Courses this course is a flat (non-logical) prerequisite for
    #[serde(default)]
    pub leading_to: Vec<String>,
}

impl Course {
    /// Create a course with no requirements and no dependents
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self {
            id,
            description,
            logical_prerequisites: None,
            logical_corequisites: None,
            leading_to: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Operator;

    #[test]
    fn test_course_creation() {
        let course = Course::new("CS201".to_string(), "Data structures.".to_string());

        assert_eq!(course.id, "CS201");
        assert_eq!(course.description, "Data structures.");
        assert!(course.logical_prerequisites.is_none());
        assert!(course.logical_corequisites.is_none());
        assert!(course.leading_to.is_empty());
    }

    #[test]
    fn test_course_deserialization() {
        let json = r#"{
            "id": "CS201",
            "description": "Data structures.",
            "logicalPrerequisites": {
                "operator": "OR",
                "groups": ["CS101", "CS102"]
            },
            "leadingTo": ["CS301", "CS302"]
        }"#;

        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.id, "CS201");
        assert_eq!(course.leading_to, vec!["CS301", "CS302"]);
        assert!(course.logical_corequisites.is_none());

        let Some(RequirementNode::Group { operator, groups }) = course.logical_prerequisites else {
            panic!("expected a prerequisite group");
        };
        assert_eq!(operator, Operator::Or);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let course: Course = serde_json::from_str(r#"{ "id": "CS101" }"#).unwrap();

        assert_eq!(course.id, "CS101");
        assert!(course.description.is_empty());
        assert!(course.leading_to.is_empty());
    }
}
