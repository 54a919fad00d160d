//! Weighting presets.
//!
//! - **Balanced**: base type dominates, other facets modify (default)
//! - **FlavorForward**: tasting notes and processing weigh more
//! - **Terroir**: origin and processing weigh more
//!
//! # Example
//!
//! ```rust
//! use teaeffect::config::PresetLevel;
//!
//! let config = PresetLevel::Terroir.to_config();
//! assert!(config.weights.geography > 0.2);
//! ```

use serde::{Deserialize, Serialize};

use super::weights::ComponentWeights;
use super::TeaEffectConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetLevel {
    Balanced,
    FlavorForward,
    Terroir,
}

impl PresetLevel {
    /// Full configuration for this preset.
    pub fn to_config(self) -> TeaEffectConfig {
        TeaEffectConfig::default().with_weights(self.weights())
    }

    pub fn weights(self) -> ComponentWeights {
        match self {
            PresetLevel::Balanced => ComponentWeights::default(),
            PresetLevel::FlavorForward => ComponentWeights {
                flavor: 0.7,
                processing: 0.3,
                ..ComponentWeights::default()
            },
            PresetLevel::Terroir => ComponentWeights {
                processing: 0.4,
                geography: 0.5,
                ..ComponentWeights::default()
            },
        }
    }
}
