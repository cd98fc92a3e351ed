//! Resolve command handler

use tracing::info;

use course_graph::core::{course_code, selection};

/// Run the resolve command.
///
/// Prints the URL path for the resolved course, mirroring what the
/// navigation collaborator receives on a node selection event. Operator
/// junction ids and other non-course ids resolve to nothing; that is a
/// defined no-op, not a failure.
pub fn run(node_ids: &[String]) {
    match selection::resolve(node_ids) {
        Some(code) => {
            info!("Resolved selection to {code}");
            println!("/course/{}", course_code::to_url_param(&code));
        }
        None => {
            println!("✗ Selection does not resolve to a course");
        }
    }
}
