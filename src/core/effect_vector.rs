//! Effect-intensity vectors.
//!
//! An [`EffectVector`] maps effect names to intensities. Names absent from
//! the map are implicitly 0. Values are nominally on a 0-10 scale but stay
//! unclamped while components are combined; only the aggregator clamps.
//!
//! The map is ordered so that iteration, and therefore floating point
//! summation order, is identical on every run.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lower bound of the canonical effect scale.
pub const MIN_EFFECT_LEVEL: f64 = 0.0;
/// Upper bound of the canonical effect scale.
pub const MAX_EFFECT_LEVEL: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectVector(BTreeMap<String, f64>);

impl EffectVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intensity for `effect`, 0 when absent.
    pub fn get(&self, effect: &str) -> f64 {
        self.0.get(effect).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, effect: &str) -> bool {
        self.0.contains_key(effect)
    }

    /// Add `value` to the entry for `effect`, creating it at 0 if needed.
    pub fn add(&mut self, effect: &str, value: f64) {
        match self.0.get_mut(effect) {
            Some(current) => *current += value,
            None => {
                self.0.insert(effect.to_string(), value);
            }
        }
    }

    /// Add every entry of `other` into this vector.
    pub fn add_all(&mut self, other: &EffectVector) {
        for (effect, value) in other.iter() {
            self.add(effect, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// New vector with every value multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        self.iter()
            .map(|(effect, value)| (effect.to_string(), value * factor))
            .collect()
    }

    /// New vector with every value limited to at most `max`.
    pub fn capped(&self, max: f64) -> Self {
        self.iter()
            .map(|(effect, value)| (effect.to_string(), value.min(max)))
            .collect()
    }

    /// New vector with every value clamped to `[min, max]`. NaN becomes `min`.
    pub fn clamped(&self, min: f64, max: f64) -> Self {
        self.iter()
            .map(|(effect, value)| (effect.to_string(), clamp_level(value, min, max)))
            .collect()
    }
}

impl FromIterator<(String, f64)> for EffectVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for EffectVector {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, f64); N]> for EffectVector {
    fn from(entries: [(&str, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}

fn clamp_level(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_effects_read_as_zero() {
        let vector = EffectVector::from([("calming", 4.0)]);
        assert_eq!(vector.get("calming"), 4.0);
        assert_eq!(vector.get("energizing"), 0.0);
        assert!(!vector.contains("energizing"));
    }

    #[test]
    fn add_accumulates_into_existing_entries() {
        let mut vector = EffectVector::new();
        vector.add("focusing", 2.0);
        vector.add("focusing", 1.5);
        vector.add_all(&EffectVector::from([("focusing", 0.5), ("calming", 1.0)]));
        assert_eq!(vector.get("focusing"), 4.0);
        assert_eq!(vector.get("calming"), 1.0);
        assert_eq!(vector.len(), 2);
    }

    #[test]
    fn clamped_bounds_values_and_replaces_nan() {
        let vector = EffectVector::from([("a", 50.0), ("b", -3.0), ("c", f64::NAN), ("d", 6.5)]);
        let clamped = vector.clamped(MIN_EFFECT_LEVEL, MAX_EFFECT_LEVEL);
        assert_eq!(clamped.get("a"), 10.0);
        assert_eq!(clamped.get("b"), 0.0);
        assert_eq!(clamped.get("c"), 0.0);
        assert_eq!(clamped.get("d"), 6.5);
    }
}
