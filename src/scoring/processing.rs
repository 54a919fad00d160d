//! Processing scorer.

use std::collections::BTreeSet;

use tracing::debug;

use super::normalizer::normalize_vector;
use crate::core::{canonical_key, EffectVector, TeaRecord};
use crate::reference::{OxidationRule, ProcessingTable};

/// Sum the effect vectors of every recognised method tag and of the roast
/// descriptor, plus the proportional oxidation contribution. Repeated tags
/// count once; unrecognised ones are ignored.
pub fn score_processing(tea: &TeaRecord, table: &ProcessingTable) -> EffectVector {
    let Some(info) = &tea.processing else {
        return EffectVector::new();
    };
    let mut vector = EffectVector::new();

    let mut seen = BTreeSet::new();
    for method in &info.methods {
        let key = canonical_key(method);
        if key.is_empty() || !seen.insert(key.clone()) {
            continue;
        }
        match table.methods.get(&key) {
            Some(entry) => vector.add_all(&normalize_vector(&entry.effects, table.scale_max)),
            None => debug!(component = "processing", method = %key, "Unrecognized processing method"),
        }
    }

    if let Some(roast) = info.roast.as_deref().map(canonical_key) {
        match table.roasts.get(&roast) {
            Some(entry) => vector.add_all(&normalize_vector(&entry.effects, table.scale_max)),
            None => debug!(component = "processing", roast = %roast, "Unrecognized roast descriptor"),
        }
    }

    if let (Some(oxidation), Some(rule)) = (info.oxidation, &table.oxidation) {
        vector.add_all(&oxidation_contribution(oxidation, rule, table.scale_max));
    }

    vector
}

/// `(oxidation - neutral) / divisor` applied to `above` or, by magnitude,
/// to `below`. Oxidation is read on 0-100.
pub fn oxidation_contribution(oxidation: f64, rule: &OxidationRule, scale_max: f64) -> EffectVector {
    if !oxidation.is_finite() {
        return EffectVector::new();
    }
    let deviation = (oxidation.clamp(0.0, 100.0) - rule.neutral) / rule.divisor;
    let (effects, factor) = if deviation >= 0.0 {
        (&rule.above, deviation)
    } else {
        (&rule.below, -deviation)
    };
    if factor == 0.0 {
        return EffectVector::new();
    }
    normalize_vector(effects, scale_max).scaled(factor)
}
