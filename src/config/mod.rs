//! Calculation configuration.
//!
//! `TeaEffectConfig` holds everything that tunes a calculation without
//! being reference data: component weights, ranking thresholds, the default
//! interaction floor and an optional path to a custom reference-table file.
//! It is read from `.teaeffect.toml`:
//!
//! ```toml
//! reference = "tables/reference.toml"
//!
//! [weights]
//! base = 1.0
//! flavor = 0.4
//! processing = 0.3
//! geography = 0.2
//!
//! [ranking]
//! supporting_fraction = 0.5
//! supporting_floor = 3.0
//!
//! [interactions]
//! default_floor = 3.0
//! ```

pub mod loader;
pub mod presets;
pub mod ranking;
pub mod weights;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub use loader::{load_config, parse_and_validate_config, CONFIG_FILE_NAME};
pub use presets::PresetLevel;
pub use ranking::{InteractionConfig, RankingConfig};
pub use weights::ComponentWeights;

/// Root configuration structure for teaeffect
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeaEffectConfig {
    /// Component weights for aggregation
    #[serde(default)]
    pub weights: ComponentWeights,

    /// Supporting-effect thresholds
    #[serde(default)]
    pub ranking: RankingConfig,

    /// Interaction pass settings
    #[serde(default)]
    pub interactions: InteractionConfig,

    /// Custom reference-table file; the built-in tables are used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<PathBuf>,
}

impl TeaEffectConfig {
    pub fn with_weights(mut self, weights: ComponentWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validate every section, failing at the first problem.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.ranking.validate()?;
        self.interactions.validate()?;
        Ok(())
    }
}
