//! Domain types shared by every scoring stage.

pub mod component;
pub mod effect_vector;
pub mod tea;

pub use component::{ComponentKind, ComponentScores};
pub use effect_vector::{EffectVector, MAX_EFFECT_LEVEL, MIN_EFFECT_LEVEL};
pub use tea::{CompoundLevels, FlavorNote, Geography, ProcessingInfo, TeaRecord};

/// Midpoint of the 1-10 scales used for derived and perceived intensities.
pub const NEUTRAL_BASELINE: f64 = 5.0;

/// Canonical form of a category key: trimmed and lower-cased.
///
/// Reference tables are canonicalised with this at load time, so every
/// lookup from a tea record goes through it too.
pub fn canonical_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
