//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.ectf-secrets.toml` in the working directory
//! 4. `~/.config/ectf-secrets/config.toml` (global defaults)
//! 5. Built-in defaults
//!
//! Only terminal behaviour is configurable. Header contents are fixed.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_QUIET};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

/// Terminal output settings.
///
/// Fields are optional so a later layer can switch a setting back off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suppress the success summary on stderr.
    pub quiet: Option<bool>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `work_dir/.ectf-secrets.toml`, then
    /// applies environment variable overrides. CLI flags are applied by the
    /// caller on the returned value.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: working-directory config
        if let Some(dir) = work_dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Like [`load`](Self::load), but a broken config file only warns.
    ///
    /// Config never affects what gets generated, so a bad file must not
    /// stop a run. Environment overrides still apply on top of the defaults.
    pub fn load_or_default(work_dir: Option<&Path>, env: &Env) -> Self {
        match Self::load(work_dir, env) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {e}; using default settings");
                let mut config = Config::default();
                config.apply_env_vars(env);
                config
            }
        }
    }

    /// Whether the success summary should be suppressed.
    pub fn quiet(&self) -> bool {
        self.output.quiet.unwrap_or(false)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other wins for values it sets).
    fn merge(&mut self, other: Config) {
        if other.output.quiet.is_some() {
            self.output.quiet = other.output.quiet;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(quiet) = env.flag(ENV_QUIET) {
            self.output.quiet = Some(quiet);
        }
    }
}
