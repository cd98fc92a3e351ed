//! Command-line interface entry point for `coursegraph`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_graph::config::Config;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Effective runtime log level: CLI flag overrides config; fallback warn
    let effective_level = args
        .log_level
        .map_or_else(|| config.logging.level.clone(), |lvl| lvl.to_string());
    let effective_level = if effective_level.is_empty() {
        "warn".to_string()
    } else {
        effective_level
    };

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;

    init_tracing(&effective_level, &config.logging.file, verbose);

    // Handle subcommands
    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Graph {
            input_file,
            output,
            format,
        } => {
            commands::graph::run(&input_file, output.as_deref(), &format, &config, verbose);
        }
        Command::Resolve { node_ids } => {
            commands::resolve::run(&node_ids);
        }
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. When a log file path
/// is configured, output goes there instead of stderr.
fn init_tracing(level: &str, log_file: &str, verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if log_file.is_empty() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .init();
            if verbose {
                eprintln!("✓ File logging initialized at: {log_file}");
            }
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
            eprintln!("✗ Failed to initialize file logging at {log_file}: {e}");
        }
    }
}
