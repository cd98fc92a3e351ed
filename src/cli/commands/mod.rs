//! CLI command handlers for `coursegraph`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod graph;
pub mod resolve;
