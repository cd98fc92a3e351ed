//! Configuration module for `course-graph`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::style::StyleTable;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for exported graph files
    #[serde(default)]
    pub out_dir: String,
}

/// Node color configuration, one entry per style-table slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Fill color for prerequisite course nodes
    #[serde(default)]
    pub prerequisite: String,
    /// Fill color for corequisite course nodes
    #[serde(default)]
    pub corequisite: String,
    /// Fill color for operator junction nodes
    #[serde(default)]
    pub operator: String,
}

impl StyleConfig {
    /// Build the style table handed to the graph pipeline
    ///
    /// Empty entries fall back to the built-in palette.
    #[must_use]
    pub fn to_style_table(&self) -> StyleTable {
        let defaults = StyleTable::default();
        StyleTable {
            prerequisite: if self.prerequisite.is_empty() {
                defaults.prerequisite
            } else {
                self.prerequisite.clone()
            },
            corequisite: if self.corequisite.is_empty() {
                defaults.corequisite
            } else {
                self.corequisite.clone()
            },
            operator: if self.operator.is_empty() {
                defaults.operator
            } else {
                self.operator.clone()
            },
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Node color settings
    #[serde(default)]
    pub style: StyleConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override graph output directory
    pub out_dir: Option<String>,
}

impl Config {
    /// Get the `$COURSE_GRAPH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/coursegraph`
    /// - macOS: `~/Library/Application Support/coursegraph`
    /// - Windows: `%APPDATA%\coursegraph`
    #[must_use]
    pub fn get_coursegraph_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursegraph")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated with their default values. Only fields that are empty in
    /// the current config and non-empty in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.out_dir.is_empty() && !defaults.paths.out_dir.is_empty() {
            self.paths.out_dir.clone_from(&defaults.paths.out_dir);
            changed = true;
        }

        if self.style.prerequisite.is_empty() && !defaults.style.prerequisite.is_empty() {
            self.style
                .prerequisite
                .clone_from(&defaults.style.prerequisite);
            changed = true;
        }
        if self.style.corequisite.is_empty() && !defaults.style.corequisite.is_empty() {
            self.style
                .corequisite
                .clone_from(&defaults.style.corequisite);
            changed = true;
        }
        if self.style.operator.is_empty() && !defaults.style.operator.is_empty() {
            self.style.operator.clone_from(&defaults.style.operator);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Allows command-line arguments to override configuration file values
    /// without modifying the persistent configuration file. Only non-`None`
    /// values in the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(out_dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(out_dir);
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_coursegraph_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_GRAPH` variable in a string
    ///
    /// Replaces occurrences of `$COURSE_GRAPH` with the actual coursegraph
    /// directory path, so configuration values can reference the config
    /// directory dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$COURSE_GRAPH") {
            let coursegraph_dir = Self::get_coursegraph_dir();
            value.replace("$COURSE_GRAPH", coursegraph_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$COURSE_GRAPH`
    /// variables in path values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, saves the updated config.
    /// - If it doesn't exist (first run): creates the config directory and
    ///   writes the defaults to file.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `out_dir`: Graph output directory path
    /// - `prerequisite`, `corequisite`, `operator`: node fill colors
    ///
    /// # Returns
    ///
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "out_dir" | "out-dir" => Some(self.paths.out_dir.clone()),
            "prerequisite" => Some(self.style.prerequisite.clone()),
            "corequisite" => Some(self.style.corequisite.clone()),
            "operator" => Some(self.style.operator.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes. Keys match [`get()`](Config::get).
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (e.g., a non-boolean for `verbose`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "out_dir" | "out-dir" => self.paths.out_dir = value.to_string(),
            "prerequisite" => self.style.prerequisite = value.to_string(),
            "corequisite" => self.style.corequisite = value.to_string(),
            "operator" => self.style.operator = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// The default value is taken from the provided defaults config,
    /// typically [`from_defaults()`](Config::from_defaults). Updates the
    /// in-memory config; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "out_dir" | "out-dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "prerequisite" => self
                .style
                .prerequisite
                .clone_from(&defaults.style.prerequisite),
            "corequisite" => self
                .style
                .corequisite
                .clone_from(&defaults.style.corequisite),
            "operator" => self.style.operator.clone_from(&defaults.style.operator),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. If the
    /// config file doesn't exist, succeeds without doing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[style]")?;
        writeln!(f, "  prerequisite = \"{}\"", self.style.prerequisite)?;
        writeln!(f, "  corequisite = \"{}\"", self.style.corequisite)?;
        writeln!(f, "  operator = \"{}\"", self.style.operator)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_config_falls_back_to_palette() {
        let style = StyleConfig::default();
        let table = style.to_style_table();
        assert_eq!(table, StyleTable::default());
    }

    #[test]
    fn test_style_config_overrides_palette() {
        let style = StyleConfig {
            prerequisite: "#aa0000".to_string(),
            corequisite: String::new(),
            operator: String::new(),
        };
        let table = style.to_style_table();
        assert_eq!(table.prerequisite, "#aa0000");
        assert_eq!(table.corequisite, StyleTable::default().corequisite);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::from_defaults();
        assert!(config.set("nope", "value").is_err());
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut config = Config::from_defaults();
        config.set("level", "debug").unwrap();
        config.set("verbose", "true").unwrap();
        assert_eq!(config.get("level"), Some("debug".to_string()));
        assert_eq!(config.get("verbose"), Some("true".to_string()));
    }
}
