//! The four scoring components and their per-calculation score sets.

use super::EffectVector;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Base,
    Flavor,
    Processing,
    Geography,
}

impl ComponentKind {
    /// Fixed combination order.
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Base,
        ComponentKind::Flavor,
        ComponentKind::Processing,
        ComponentKind::Geography,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Base => "base",
            ComponentKind::Flavor => "flavor",
            ComponentKind::Processing => "processing",
            ComponentKind::Geography => "geography",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw (pre-aggregation) vectors from each component scorer, retained for
/// traceability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub base: EffectVector,
    pub flavor: EffectVector,
    pub processing: EffectVector,
    pub geography: EffectVector,
}

impl ComponentScores {
    pub fn get(&self, kind: ComponentKind) -> &EffectVector {
        match kind {
            ComponentKind::Base => &self.base,
            ComponentKind::Flavor => &self.flavor,
            ComponentKind::Processing => &self.processing,
            ComponentKind::Geography => &self.geography,
        }
    }

    pub fn is_empty(&self) -> bool {
        ComponentKind::ALL
            .iter()
            .all(|kind| self.get(*kind).is_empty())
    }
}
