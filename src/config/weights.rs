//! Component weights for the aggregator.

use crate::core::ComponentKind;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Per-component weights for the weighted sum.
///
/// Weights do not need to sum to 1: with the base weight at 1.0 the base
/// type keeps its own scale and the other components act as modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    /// Weight for the base-type component
    #[serde(default = "default_base_weight")]
    pub base: f64,

    /// Weight for the flavor component
    #[serde(default = "default_flavor_weight")]
    pub flavor: f64,

    /// Weight for the processing component
    #[serde(default = "default_processing_weight")]
    pub processing: f64,

    /// Weight for the geography component
    #[serde(default = "default_geography_weight")]
    pub geography: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            base: default_base_weight(),
            flavor: default_flavor_weight(),
            processing: default_processing_weight(),
            geography: default_geography_weight(),
        }
    }
}

impl ComponentWeights {
    pub fn new(base: f64, flavor: f64, processing: f64, geography: f64) -> Self {
        Self {
            base,
            flavor,
            processing,
            geography,
        }
    }

    pub fn get(&self, kind: ComponentKind) -> f64 {
        match kind {
            ComponentKind::Base => self.base,
            ComponentKind::Flavor => self.flavor,
            ComponentKind::Processing => self.processing,
            ComponentKind::Geography => self.geography,
        }
    }

    pub fn total(&self) -> f64 {
        ComponentKind::ALL.iter().map(|kind| self.get(*kind)).sum()
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<()> {
        if weight.is_finite() && weight >= 0.0 {
            Ok(())
        } else {
            Err(Error::configuration(format!(
                "{} weight must be a finite, non-negative number, got {}",
                name, weight
            )))
        }
    }

    /// Reject negative or non-finite weights, and weights that are all zero.
    pub fn validate(&self) -> Result<()> {
        for kind in ComponentKind::ALL {
            Self::validate_weight(self.get(kind), kind.as_str())?;
        }
        if self.total() <= 0.0 {
            return Err(Error::configuration(
                "at least one component weight must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Copy of these weights rescaled to sum to 1.0. Unchanged if the total
    /// is not positive.
    pub fn normalized(&self) -> Self {
        let total = self.total();
        if total > 0.0 && total.is_finite() {
            Self::new(
                self.base / total,
                self.flavor / total,
                self.processing / total,
                self.geography / total,
            )
        } else {
            *self
        }
    }
}

// Base type dominates; flavor and processing are secondary, geography minor.
pub fn default_base_weight() -> f64 {
    1.0
}
pub fn default_flavor_weight() -> f64 {
    0.4
}
pub fn default_processing_weight() -> f64 {
    0.3
}
pub fn default_geography_weight() -> f64 {
    0.2
}
