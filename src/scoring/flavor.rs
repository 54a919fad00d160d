//! Flavor scorer.
//!
//! Each recognised flavor tag contributes its table vector, multiplied by
//! the flavor's own intensity and by the tag's perceived intensity. Several
//! tags pushing the same effect reinforce it with diminishing returns: per
//! effect the contributions are sorted strongest first and the i-th one is
//! divided by `1 + i`. Sorting first makes the result independent of the
//! order tags were listed in.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use super::normalizer::normalize;
use crate::core::{canonical_key, EffectVector, FlavorNote, TeaRecord, NEUTRAL_BASELINE};
use crate::reference::FlavorTable;

pub fn score_flavors(tea: &TeaRecord, table: &FlavorTable) -> EffectVector {
    let mut contributions: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    let mut seen = BTreeSet::new();

    for note in &tea.flavors {
        let tag = canonical_key(&note.tag);
        if tag.is_empty() || !seen.insert(tag.clone()) {
            continue;
        }
        let Some(entry) = table.lookup(&tag) else {
            debug!(component = "flavor", tag = %tag, "Unrecognized flavor tag");
            continue;
        };

        let multiplier = entry.intensity * note_multiplier(note);
        for (effect, raw) in entry.effects.iter() {
            let contribution = normalize(raw, table.scale_max) * multiplier;
            if contribution > 0.0 {
                contributions.entry(effect).or_default().push(contribution);
            }
        }
    }

    contributions
        .into_iter()
        .map(|(effect, values)| (effect, diminishing_sum(values)))
        .collect()
}

/// Multiplier from a tag's perceived intensity (0-10); the neutral baseline
/// of 5, or no intensity at all, gives 1.
fn note_multiplier(note: &FlavorNote) -> f64 {
    note.intensity
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 10.0) / NEUTRAL_BASELINE)
        .unwrap_or(1.0)
}

/// `Σ c_i / (1 + i)` over contributions sorted strongest first.
pub fn diminishing_sum(mut values: Vec<f64>) -> f64 {
    values.sort_by(|a, b| b.total_cmp(a));
    values
        .iter()
        .enumerate()
        .map(|(occurrence, value)| value / (1.0 + occurrence as f64))
        .sum()
}
