//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/dommap/dommap.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `DOMMAP_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, KeyStyle, OutputFormat};
use crate::domain::{LabelPolicy, TreeBuilder};

/// Unified configuration for dommap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output format (default: json)
    pub format: OutputFormat,
    /// Key style of rendered nodes (default: label)
    pub keys: KeyStyle,
    /// Empty label handling (default: lenient)
    pub policy: LabelPolicy,
    /// Fold labels to ASCII lowercase
    pub lowercase: bool,
    /// Build on the rayon thread pool
    pub parallel: bool,
    /// Single-line JSON output
    pub compact: bool,
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub format: Option<OutputFormat>,
    pub keys: Option<KeyStyle>,
    pub policy: Option<LabelPolicy>,
    pub lowercase: Option<bool>,
    pub parallel: Option<bool>,
    pub compact: Option<bool>,
}

/// Get the XDG config directory for dommap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "dommap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("dommap.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay specified values onto self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            format: overlay.format.unwrap_or(self.format),
            keys: overlay.keys.unwrap_or(self.keys),
            policy: overlay.policy.unwrap_or(self.policy),
            lowercase: overlay.lowercase.unwrap_or(self.lowercase),
            parallel: overlay.parallel.unwrap_or(self.parallel),
            compact: overlay.compact.unwrap_or(self.compact),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut files: Vec<PathBuf> = Vec::new();
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                files.push(global_path);
            }
        }
        if let Some(path) = config_file {
            files.push(path.to_path_buf());
        }

        let file_refs: Vec<&Path> = files.iter().map(PathBuf::as_path).collect();
        let current = Self::load_layers(&file_refs)?;

        current.apply_env_overrides()
    }

    /// Defaults overlaid with each file in order; later files win.
    ///
    /// Environment variables are not consulted.
    pub fn load_layers(files: &[&Path]) -> Result<Self, ApplicationError> {
        let mut current = Self::default();
        for path in files {
            debug!("loading config layer {}", path.display());
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }
        Ok(current)
    }

    /// Apply DOMMAP_* environment variables as explicit overrides.
    pub fn apply_env_overrides(mut self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("DOMMAP"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get::<OutputFormat>("format") {
            self.format = val;
        }
        if let Ok(val) = config.get::<KeyStyle>("keys") {
            self.keys = val;
        }
        if let Ok(val) = config.get::<LabelPolicy>("policy") {
            self.policy = val;
        }
        if let Ok(val) = config.get_bool("lowercase") {
            self.lowercase = val;
        }
        if let Ok(val) = config.get_bool("parallel") {
            self.parallel = val;
        }
        if let Ok(val) = config.get_bool("compact") {
            self.compact = val;
        }

        Ok(self)
    }

    /// Tree builder configured from these settings.
    pub fn tree_builder(&self) -> TreeBuilder {
        TreeBuilder::new()
            .with_policy(self.policy)
            .with_lowercase(self.lowercase)
    }

    /// Render as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
