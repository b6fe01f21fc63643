//! Engine configuration for digraph
//!
//! Stored as TOML. Resolution order: an explicit path, then
//! `$DIGRAPH_CONFIG_DIR/config.toml`, then `~/.config/digraph/config.toml`,
//! then built-in defaults. The file is hand-written; digraph only reads it.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DigraphError, Result};
use crate::generate::RandomGraphOptions;
use crate::graph::WalkOptions;

pub use types::{EngineConfig, RandomConfig, WalkConfig};

const CONFIG_DIR: &str = "digraph";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DIGRAPH_CONFIG_DIR";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| DigraphError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `explicit` if given, otherwise from the default location if
    /// a file exists there, otherwise return defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "load_config");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.random.min_cost > self.random.max_cost {
            return Err(DigraphError::invalid_value(
                "random cost range",
                format!("{}..={}", self.random.min_cost, self.random.max_cost),
            ));
        }
        Ok(())
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            reconstruction: self.walk.path_reconstruction,
        }
    }

    pub fn random_options(&self) -> RandomGraphOptions {
        RandomGraphOptions {
            min_cost: self.random.min_cost,
            max_cost: self.random.max_cost,
            seed: self.random.seed,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    // Allow environment variable override for testing
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(env_dir) => PathBuf::from(env_dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(CONFIG_FILE))
}
