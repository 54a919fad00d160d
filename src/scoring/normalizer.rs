//! Category normalizer.
//!
//! Reference tables are authored on different intensity scales (0-10 for
//! types and processing, 0-4 or 0-5 for some flavor tables). Everything is
//! rescaled onto the canonical 0-10 effect scale before combination.

use crate::core::{EffectVector, MAX_EFFECT_LEVEL, MIN_EFFECT_LEVEL};

/// Linear rescale of `raw` from `[0, source_scale_max]` onto `[0, 10]`.
///
/// Values above the source maximum clamp at 10 rather than erroring, so
/// malformed reference data degrades instead of failing. A non-positive
/// source scale leaves the value unscaled (validation rejects such tables,
/// this only guards hand-built ones).
pub fn normalize(raw: f64, source_scale_max: f64) -> f64 {
    if raw.is_nan() {
        return MIN_EFFECT_LEVEL;
    }
    let scaled = if source_scale_max > 0.0 {
        raw * (MAX_EFFECT_LEVEL / source_scale_max)
    } else {
        raw
    };
    scaled.clamp(MIN_EFFECT_LEVEL, MAX_EFFECT_LEVEL)
}

/// Normalize every entry of a table vector.
pub fn normalize_vector(vector: &EffectVector, source_scale_max: f64) -> EffectVector {
    vector
        .iter()
        .map(|(effect, value)| (effect, normalize(value, source_scale_max)))
        .collect()
}
