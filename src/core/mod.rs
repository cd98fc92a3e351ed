//! Core module for the requirement-to-graph pipeline

pub mod builder;
pub mod composer;
pub mod config;
pub mod course_code;
pub mod error;
pub mod models;
pub mod render;
pub mod selection;
pub mod style;

/// Returns the current version of the `course-graph` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
