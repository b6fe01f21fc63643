//! Configuration type definitions

use serde::Deserialize;

use crate::graph::{Cost, PathReconstruction};

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Lowest-cost walk settings
    #[serde(default)]
    pub walk: WalkConfig,

    /// Random graph generation settings
    #[serde(default)]
    pub random: RandomConfig,
}

/// Configuration for the lowest-cost walk engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WalkConfig {
    /// "tracked" (default) or "direct-edges"
    #[serde(default)]
    pub path_reconstruction: PathReconstruction,
}

/// Configuration for random graph generation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RandomConfig {
    /// Smallest generated edge cost (inclusive)
    #[serde(default = "default_min_cost")]
    pub min_cost: Cost,

    /// Largest generated edge cost (inclusive)
    #[serde(default = "default_max_cost")]
    pub max_cost: Cost,

    /// Fixed seed for reproducible graphs (optional)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            min_cost: default_min_cost(),
            max_cost: default_max_cost(),
            seed: None,
        }
    }
}

fn default_min_cost() -> Cost {
    0
}

fn default_max_cost() -> Cost {
    99
}
