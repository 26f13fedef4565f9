//! # rulechat Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates rulechat's configuration. Settings
//! come from several layers, highest precedence first:
//!
//! 1. Command-line flags (applied by the command handlers after loading)
//! 2. An explicit `--config <FILE>` (replaces file discovery entirely)
//! 3. Project-specific `.rulechat.toml` in the current directory or an ancestor
//! 4. User-specific `config.toml` in the platform config directory
//!    (e.g. `~/.config/rulechat/config.toml`)
//! 5. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [log]
//! file = "~/chat_log.txt"
//! enabled = true
//!
//! [rules]
//! file = "~/.config/rulechat/rules.toml"
//! ```
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let log_path = cfg.log_path();
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The effective configuration after all layers are merged.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub log: LogConfig,
    pub rules: RulesConfig,
}

/// Conversation transcript settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Transcript path. Paths from a config file are already resolved against
    /// that file's directory; the built-in default is relative to the working
    /// directory.
    pub file: String,
    /// Whether exchanges are appended to the transcript file at all.
    pub enabled: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            enabled: default_log_enabled(),
        }
    }
}

/// Rule-table settings.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    /// Optional external `rules.toml`. The built-in table is used when unset.
    pub file: Option<String>,
}

/// One configuration file as written on disk. Keys it leaves out fall through
/// to the layer below.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ConfigLayer {
    #[serde(default)]
    log: LogLayer,
    #[serde(default)]
    rules: RulesConfig,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct LogLayer {
    file: Option<String>,
    enabled: Option<bool>,
}

fn default_log_file() -> String {
    "chat_log.txt".to_string()
}
fn default_log_enabled() -> bool {
    true
}

const PROJECT_CONFIG_FILENAME: &str = ".rulechat.toml";

impl Config {
    pub fn log_path(&self) -> PathBuf {
        PathBuf::from(&self.log.file)
    }

    pub fn rules_path(&self) -> Option<PathBuf> {
        self.rules.file.as_ref().map(PathBuf::from)
    }
}

/// Loads the effective configuration.
///
/// With `explicit` set, only that file is read (on top of defaults). Otherwise
/// the user and project files are discovered and merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            merge_configs(Some(load_config_from_path(path)?), None)
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config, project_config)
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigLayer>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "RuleChat", "rulechat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigLayer>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.rulechat.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks from `start` towards the root looking for `.rulechat.toml`, stopping
/// at the first directory that contains `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

/// Reads one layer and resolves its paths against the file's directory.
fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = io::read_file_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    let mut layer: ConfigLayer = toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    expand_layer_paths(&mut layer, base);
    Ok(layer)
}

/// Project values win wherever the project file sets them.
fn merge_configs(user: Option<ConfigLayer>, project: Option<ConfigLayer>) -> Config {
    let user = user.unwrap_or_default();
    let project = project.unwrap_or_default();
    Config {
        log: LogConfig {
            file: project
                .log
                .file
                .or(user.log.file)
                .unwrap_or_else(default_log_file),
            enabled: project
                .log
                .enabled
                .or(user.log.enabled)
                .unwrap_or_else(default_log_enabled),
        },
        rules: RulesConfig {
            file: project.rules.file.or(user.rules.file),
        },
    }
}

fn expand_layer_paths(layer: &mut ConfigLayer, base: &Path) {
    if let Some(log_file) = layer.log.file.as_mut() {
        *log_file = resolve_path(log_file, base);
        debug!("Resolved transcript path: {}", log_file);
    }
    if let Some(rules_file) = layer.rules.file.as_mut() {
        *rules_file = resolve_path(rules_file, base);
        debug!("Resolved rule table path: {}", rules_file);
    }
}

/// Expands `~`, then anchors a relative result at `base`. Blank values are
/// left alone so validation can reject them.
fn resolve_path(value: &str, base: &Path) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    let expanded = shellexpand::tilde(value).into_owned();
    let path = Path::new(&expanded);
    if path.is_relative() {
        base.join(path).to_string_lossy().into_owned()
    } else {
        expanded
    }
}

fn validate_config(config: &Config) -> Result<()> {
    if config.log.file.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "log.file cannot be empty.".to_string()
        )));
    }
    let log_path = config.log_path();
    if log_path.is_dir() {
        return Err(anyhow!(ChatError::Config(format!(
            "Configured transcript path '{}' is a directory.",
            log_path.display()
        ))));
    }
    if let Some(rules_path) = config.rules_path() {
        if !rules_path.is_file() {
            return Err(anyhow!(ChatError::Config(format!(
                "Configured rule table '{}' does not exist or is not a file.",
                rules_path.display()
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
