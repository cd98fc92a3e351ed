//! Config command handler
//!
//! Besides the raw key/value plumbing, `get` also shows the effective
//! style table: the `[style]` section may carry empty entries, and the
//! colors a graph export actually uses only materialize after the
//! built-in palette fallback.

use crate::args::ConfigSubcommand;
use course_graph::config::Config;
use course_graph::core::style::StyleTable;
use std::io::{self, Write};

/// Config keys that feed the style table used when exporting graphs
const STYLE_KEYS: &[&str] = &["prerequisite", "corequisite", "operator"];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Whether changing this key alters exported graph colors
fn is_style_key(key: &str) -> bool {
    STYLE_KEYS.contains(&key)
}

/// Render the style table a graph export would actually use
fn effective_style(styles: &StyleTable) -> String {
    format!(
        "  prerequisite = \"{}\"\n  corequisite = \"{}\"\n  operator = \"{}\"\n",
        styles.prerequisite, styles.corequisite, styles.operator
    )
}

/// Handle the config get subcommand
fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        // Print specific config value
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        }
    } else {
        // Print all config values, then the colors exports resolve to
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\n=== Effective graph colors ===\n");
        print!("{}", effective_style(&config.style.to_style_table()));
    }
}

/// Handle the config set subcommand
fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!("✓ Set {key} = {value}");
    if is_style_key(key) {
        println!("  Re-export graphs to pick up the new colors");
    }
}

/// Handle the config unset subcommand
fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }

    println!("✓ Reset {key} to default");
    if is_style_key(key) {
        println!("  Re-export graphs to pick up the new colors");
    }
}

/// Handle the config reset subcommand
fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    // Ask for confirmation
    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_keys_are_recognized() {
        assert!(is_style_key("prerequisite"));
        assert!(is_style_key("corequisite"));
        assert!(is_style_key("operator"));
        assert!(!is_style_key("level"));
        assert!(!is_style_key("out_dir"));
    }

    #[test]
    fn test_effective_style_resolves_empty_entries_to_palette() {
        let mut config = Config::from_defaults();
        config.style.prerequisite.clear();

        let rendered = effective_style(&config.style.to_style_table());

        // The empty entry shows the built-in fallback, not an empty string
        assert!(rendered.contains("prerequisite = \"rgb(252 165 165)\""));
        assert!(!rendered.contains("prerequisite = \"\""));
    }

    #[test]
    fn test_effective_style_shows_configured_colors() {
        let mut config = Config::from_defaults();
        config.set("operator", "#222222").unwrap();

        let rendered = effective_style(&config.style.to_style_table());

        assert!(rendered.contains("operator = \"#222222\""));
    }
}
