//! Graph command handler
//!
//! Loads a course JSON file, runs the build/compose pipeline, and writes
//! the result as a vis-style JSON payload or a Mermaid flowchart.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{error, info};

use course_graph::config::Config;
use course_graph::core::builder::build;
use course_graph::core::composer::compose;
use course_graph::core::models::Course;
use course_graph::core::render::{MermaidGenerator, RenderOptions, RenderPayload};
use course_graph::core::style::NodeGroup;

/// Supported output formats for the graph command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    /// Graph plus pass-through render options, as JSON
    Json,
    /// Mermaid flowchart embeddable in Markdown
    Mermaid,
}

impl OutputFormat {
    /// File extension for this format
    const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Mermaid => "md",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "mermaid" | "md" => Ok(Self::Mermaid),
            other => Err(format!(
                "✗ Unknown format '{other}' (expected: json, mermaid)"
            )),
        }
    }
}

/// Run the graph command.
///
/// # Arguments
/// * `input_file` - Path to a course JSON file
/// * `output_file` - Optional output path
/// * `format_str` - Output format (json, mermaid)
/// * `config` - Configuration containing default output directory and colors
/// * `verbose` - Whether to show a node/edge summary
pub fn run(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
    verbose: bool,
) {
    if let Err(err) = generate_graph(input_file, output_file, format_str, config, verbose) {
        error!(
            "Graph generation failed for {}: {err}",
            input_file.display()
        );
        eprintln!("{err}");
    }
}

fn generate_graph(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let format = OutputFormat::from_str(format_str)?;

    let content = fs::read_to_string(input_file)
        .map_err(|e| format!("✗ Failed to read {}: {e}", input_file.display()))?;
    let course: Course = serde_json::from_str(&content)
        .map_err(|e| format!("✗ Failed to parse {}: {e}", input_file.display()))?;

    info!("Course loaded: {}", course.id);

    let styles = config.style.to_style_table();

    let prereq = build(
        NodeGroup::Prerequisite,
        course.logical_prerequisites.as_ref(),
        &styles,
    )
    .map_err(|e| format!("✗ Invalid prerequisites for {}: {e}", course.id))?;
    let coreq = build(
        NodeGroup::Corequisite,
        course.logical_corequisites.as_ref(),
        &styles,
    )
    .map_err(|e| format!("✗ Invalid corequisites for {}: {e}", course.id))?;

    let graph = compose(&course, prereq, coreq);

    let rendered = match format {
        OutputFormat::Json => {
            let options = RenderOptions::default();
            RenderPayload {
                graph: &graph,
                options: &options,
            }
            .to_json()
            .map_err(|e| format!("✗ Failed to serialize graph for {}: {e}", course.id))?
        }
        OutputFormat::Mermaid => MermaidGenerator::generate(&graph),
    };

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let out_dir = PathBuf::from(&config.paths.out_dir);
        fs::create_dir_all(&out_dir).map_err(|e| {
            format!(
                "✗ Failed to create output directory {}: {e}",
                out_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("course");
        out_dir.join(format!("{filename}_graph.{}", format.extension()))
    };

    fs::write(&final_output_path, rendered)
        .map_err(|e| format!("✗ Failed to write {}: {e}", final_output_path.display()))?;

    println!("✓ Graph written to: {}", final_output_path.display());
    info!("Exported course graph to: {}", final_output_path.display());

    if verbose {
        println!("\n=== Graph Summary for {} ===", course.id);
        println!("Nodes: {}", graph.nodes.len());
        println!("Edges: {}", graph.edges.len());
        println!("Dependents: {}", course.leading_to.len());
    }

    Ok(())
}
