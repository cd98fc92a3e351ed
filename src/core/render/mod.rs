//! Output adapters for external rendering engines

pub mod mermaid;
pub mod vis;

pub use mermaid::MermaidGenerator;
pub use vis::{HierarchicalLayout, RenderOptions, RenderPayload};
