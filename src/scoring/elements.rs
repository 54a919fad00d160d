//! Elemental derivation.
//!
//! Physical inputs are turned into element scores on a 1-10 scale starting
//! from a neutral baseline of 5. Continuous inputs (altitude, latitude,
//! humidity, age, oxidation, roast level) go through piecewise-linear
//! gradient rules; categorical inputs (soil, climate) add fixed deltas.
//!
//! Scores are summed freely and clamped to the table's `[min, max]` only
//! once every adjustment has been applied, so intermediate values may be
//! negative or exceed the range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{canonical_key, TeaRecord};
use crate::reference::{ElementDeltas, ElementTable, GradientInput, GradientRule, ProcessingTable};

/// Element name -> score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementScores(BTreeMap<String, f64>);

impl ElementScores {
    pub fn get(&self, element: &str) -> Option<f64> {
        self.0.get(element).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Inputs available to the derivation, gathered from a tea record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementInputs {
    pub altitude: Option<f64>,
    pub latitude: Option<f64>,
    pub humidity: Option<f64>,
    pub age: Option<f64>,
    pub oxidation: Option<f64>,
    pub roast: Option<f64>,
    pub soil: Option<String>,
    pub climate: Option<String>,
}

impl ElementInputs {
    /// Geography-only inputs: altitude, latitude, humidity, soil, climate.
    pub fn geographic(tea: &TeaRecord) -> Self {
        let Some(geography) = &tea.geography else {
            return Self::default();
        };
        Self {
            altitude: geography.altitude,
            latitude: geography.latitude,
            humidity: geography.humidity,
            soil: geography.soil.as_deref().map(canonical_key),
            climate: geography.climate.as_deref().map(canonical_key),
            ..Self::default()
        }
    }

    /// Geography plus age, oxidation and the roast level of the tea's roast
    /// descriptor, for the full elemental profile.
    pub fn full(tea: &TeaRecord, processing: &ProcessingTable) -> Self {
        let roast = tea
            .processing
            .as_ref()
            .and_then(|info| info.roast.as_deref())
            .map(canonical_key)
            .and_then(|key| processing.roasts.get(&key))
            .map(|entry| entry.level);
        Self {
            age: tea.age_years,
            oxidation: tea.processing.as_ref().and_then(|info| info.oxidation),
            roast,
            ..Self::geographic(tea)
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Value for a gradient input, if known and finite.
    pub fn value(&self, input: GradientInput) -> Option<f64> {
        let value = match input {
            GradientInput::Altitude => self.altitude,
            GradientInput::Latitude => self.latitude.map(f64::abs),
            GradientInput::Humidity => self.humidity,
            GradientInput::Age => self.age,
            GradientInput::Oxidation => self.oxidation,
            GradientInput::Roast => self.roast,
        };
        value.filter(|v| v.is_finite())
    }
}

/// Scale factor a gradient rule applies for `value`, with the deltas it
/// applies to. `None` inside the neutral band.
pub fn gradient_adjustment(rule: &GradientRule, value: f64) -> Option<(&ElementDeltas, f64)> {
    if value < rule.low {
        Some((&rule.below, (rule.low - value) / rule.divisor))
    } else if value > rule.high {
        Some((&rule.above, (value - rule.high) / rule.divisor))
    } else {
        None
    }
}

pub fn derive_elements(inputs: &ElementInputs, table: &ElementTable) -> ElementScores {
    let mut raw: BTreeMap<String, f64> = table
        .names
        .iter()
        .map(|name| (name.clone(), table.neutral))
        .collect();

    let mut apply = |deltas: &ElementDeltas, amount: f64| {
        for (element, delta) in deltas {
            *raw.entry(element.clone()).or_insert(table.neutral) += delta * amount;
        }
    };

    for rule in &table.gradients {
        let Some(value) = inputs.value(rule.input) else {
            continue;
        };
        if let Some((deltas, amount)) = gradient_adjustment(rule, value) {
            apply(deltas, amount);
        }
    }

    if let Some(soil) = &inputs.soil {
        match table.soils.get(soil) {
            Some(deltas) => apply(deltas, 1.0),
            None => debug!(component = "geography", soil = %soil, "Unrecognized soil"),
        }
    }
    if let Some(climate) = &inputs.climate {
        match table.climates.get(climate) {
            Some(deltas) => apply(deltas, 1.0),
            None => debug!(component = "geography", climate = %climate, "Unrecognized climate"),
        }
    }

    ElementScores(
        raw.into_iter()
            .map(|(name, value)| (name, value.clamp(table.min, table.max)))
            .collect(),
    )
}
