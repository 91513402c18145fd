//! Layered runtime configuration.
//!
//! Settings are resolved from built-in defaults, an optional TOML file and
//! `LINKWATCH_*` environment variables, in that order. Nested keys use a
//! double underscore in the environment, e.g.
//! `LINKWATCH_CLASSIFIER__DUAL_MATCH=both`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::ClassifierRules;

/// Default log file scanned when nothing else is configured.
pub const DEFAULT_LOG_PATH: &str = "/var/log/syslog";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "LINKWATCH";

/// Resolved configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log file to scan; `-` reads standard input.
    pub log_path: PathBuf,
    pub classifier: ClassifierRules,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            classifier: ClassifierRules::default(),
        }
    }
}

impl Settings {
    /// Load settings, reading `config_path` if given.
    ///
    /// A config file that is named explicitly must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(config_path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(config_path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(true));
        }
        let config = builder
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .context("failed to load configuration")?;

        config.try_deserialize().context("invalid configuration")
    }
}
