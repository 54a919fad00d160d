//! Ranking thresholds and interaction defaults.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Thresholds a non-dominant effect must meet to be reported as supporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Minimum fraction of the dominant effect's level (0.0-1.0)
    #[serde(default = "default_supporting_fraction")]
    pub supporting_fraction: f64,

    /// Minimum absolute level (0.0-10.0)
    #[serde(default = "default_supporting_floor")]
    pub supporting_floor: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            supporting_fraction: default_supporting_fraction(),
            supporting_floor: default_supporting_floor(),
        }
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.supporting_fraction) {
            return Err(Error::configuration(format!(
                "supporting_fraction must be between 0.0 and 1.0, got {}",
                self.supporting_fraction
            )));
        }
        if !(0.0..=10.0).contains(&self.supporting_floor) {
            return Err(Error::configuration(format!(
                "supporting_floor must be between 0.0 and 10.0, got {}",
                self.supporting_floor
            )));
        }
        Ok(())
    }
}

pub fn default_supporting_fraction() -> f64 {
    0.5
}
pub fn default_supporting_floor() -> f64 {
    3.0
}

/// Interaction-pass settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Activation floor for rules that do not declare their own
    #[serde(default = "default_interaction_floor")]
    pub default_floor: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            default_floor: default_interaction_floor(),
        }
    }
}

impl InteractionConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_floor.is_finite() {
            Ok(())
        } else {
            Err(Error::configuration(
                "interaction default_floor must be a finite number",
            ))
        }
    }
}

pub fn default_interaction_floor() -> f64 {
    3.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let ranking = RankingConfig::default();
        assert_eq!(ranking.supporting_fraction, 0.5);
        assert_eq!(ranking.supporting_floor, 3.0);
        assert_eq!(InteractionConfig::default().default_floor, 3.0);
    }

    #[test]
    fn out_of_range_thresholds_are_rejected() {
        let fraction = RankingConfig {
            supporting_fraction: 1.5,
            ..RankingConfig::default()
        };
        assert!(fraction.validate().is_err());

        let floor = RankingConfig {
            supporting_floor: -1.0,
            ..RankingConfig::default()
        };
        assert!(floor.validate().is_err());

        let nan = RankingConfig {
            supporting_fraction: f64::NAN,
            ..RankingConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn non_finite_interaction_floor_is_rejected() {
        let config = InteractionConfig {
            default_floor: f64::NAN,
        };
        assert!(config.validate().is_err());
    }
}
