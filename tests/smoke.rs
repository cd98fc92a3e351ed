//! Integration smoke tests for `course_graph`

use course_graph::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}
