//! Base-type scorer.

use tracing::debug;

use super::normalizer::normalize_vector;
use crate::core::{canonical_key, EffectVector, TeaRecord, MAX_EFFECT_LEVEL};
use crate::reference::TypeTable;

/// Score a tea's base type, merging a matching sub-type on top.
///
/// The sub-type vector is added to the base entry and the sum capped at 10
/// per effect. An unknown or missing type yields an empty vector.
pub fn score_base_type(tea: &TeaRecord, table: &TypeTable) -> EffectVector {
    let Some(type_key) = present_key(tea.tea_type.as_deref()) else {
        return EffectVector::new();
    };
    let Some(entry) = table.lookup(&type_key) else {
        debug!(component = "base", tea_type = %type_key, "Unrecognized tea type");
        return EffectVector::new();
    };

    let base = normalize_vector(&entry.effects, table.scale_max);
    let Some(sub_key) = present_key(tea.sub_type.as_deref()) else {
        return base;
    };
    match entry.subtypes.get(&sub_key) {
        Some(sub) => {
            let mut merged = base;
            merged.add_all(&normalize_vector(&sub.effects, table.scale_max));
            merged.capped(MAX_EFFECT_LEVEL)
        }
        None => {
            debug!(
                component = "base",
                tea_type = %type_key,
                sub_type = %sub_key,
                "Unrecognized sub-type, using base entry"
            );
            base
        }
    }
}

fn present_key(raw: Option<&str>) -> Option<String> {
    raw.map(canonical_key).filter(|key| !key.is_empty())
}
