//! Error taxonomy for graph construction

use thiserror::Error;

/// Errors raised while turning a requirement expression into a graph
///
/// Construction either succeeds fully or fails; there is no partial-graph
/// result. An unresolvable selection is a defined `None`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An operator group carried no children, which would derive a
    /// degenerate node id
    #[error("invalid requirement: {operator} group has no children")]
    InvalidRequirement {
        /// Symbol of the offending operator
        operator: String,
    },
}
