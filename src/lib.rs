//! Shared library for `course-graph`
//! Contains the graph-building core used by the CLI.

pub mod core;

pub use self::core::config;
pub use self::core::get_version;
