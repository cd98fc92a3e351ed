//! Selection-to-navigation resolution
//!
//! Maps the node ids reported by an interaction event (select or double
//! activation) back to a navigable course code. Runs synchronously inside
//! the event handler and performs no I/O.

use crate::core::course_code;

/// Resolve an interaction event's selected node ids to a course code
///
/// Only the first selection is considered; multi-select is not supported.
/// Returns `None` for an empty selection or when the first id is not a
/// course code (operator junction ids fail the validator by construction).
/// Resolving a non-course id is a defined no-op, not an error.
#[must_use]
pub fn resolve(selected: &[String]) -> Option<String> {
    let first = selected.first()?;
    if !course_code::is_valid(first) {
        return None;
    }
    Some(course_code::normalize(first))
}
