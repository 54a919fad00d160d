//! Result assembly: ranked effects with descriptions, strength labels and a
//! per-component breakdown of how each level was reached.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ComponentWeights;
use crate::core::{ComponentKind, ComponentScores, EffectVector};
use crate::reference::Vocabulary;
use crate::scoring::{AppliedInteraction, Aggregation, ElementScores, RankedEntry, Ranking};

/// Coarse label for a 0-10 level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectStrength {
    Subtle,
    Moderate,
    Pronounced,
    Intense,
}

impl EffectStrength {
    pub fn from_level(level: f64) -> Self {
        match level {
            l if l < 3.0 => EffectStrength::Subtle,
            l if l < 6.0 => EffectStrength::Moderate,
            l if l < 8.0 => EffectStrength::Pronounced,
            _ => EffectStrength::Intense,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EffectStrength::Subtle => "subtle",
            EffectStrength::Moderate => "moderate",
            EffectStrength::Pronounced => "pronounced",
            EffectStrength::Intense => "intense",
        }
    }
}

impl fmt::Display for EffectStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one effect's final level breaks down.
///
/// Component terms are weighted; `clamp` is whatever clamping to [0, 10]
/// removed or added, so the terms sum to the level up to float rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub base: f64,
    pub flavor: f64,
    pub processing: f64,
    pub geography: f64,
    pub interaction: f64,
    pub clamp: f64,
}

impl Contribution {
    pub fn component(&self, kind: ComponentKind) -> f64 {
        match kind {
            ComponentKind::Base => self.base,
            ComponentKind::Flavor => self.flavor,
            ComponentKind::Processing => self.processing,
            ComponentKind::Geography => self.geography,
        }
    }

    pub fn total(&self) -> f64 {
        self.base + self.flavor + self.processing + self.geography + self.interaction + self.clamp
    }

    fn for_effect(
        effect: &str,
        components: &ComponentScores,
        weights: &ComponentWeights,
        aggregation: &Aggregation,
    ) -> Self {
        let weighted = |kind: ComponentKind| weights.get(kind) * components.get(kind).get(effect);
        let interaction = aggregation.interaction_deltas.get(effect);
        let unclamped = aggregation.weighted.get(effect) + interaction;
        Self {
            base: weighted(ComponentKind::Base),
            flavor: weighted(ComponentKind::Flavor),
            processing: weighted(ComponentKind::Processing),
            geography: weighted(ComponentKind::Geography),
            interaction,
            clamp: aggregation.combined.get(effect) - unclamped,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEffect {
    pub name: String,
    pub level: f64,
    pub strength: EffectStrength,
    /// Empty for effects the vocabulary does not describe.
    pub description: String,
    pub contribution: Contribution,
}

/// The dominant effect, or the sentinel used when every effect is zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DominantEffect {
    Effect(RankedEffect),
    Undetermined { description: String },
}

impl DominantEffect {
    pub fn name(&self) -> Option<&str> {
        match self {
            DominantEffect::Effect(effect) => Some(&effect.name),
            DominantEffect::Undetermined { .. } => None,
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, DominantEffect::Undetermined { .. })
    }

    pub fn effect(&self) -> Option<&RankedEffect> {
        match self {
            DominantEffect::Effect(effect) => Some(effect),
            DominantEffect::Undetermined { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tea_name: Option<String>,
    pub dominant: DominantEffect,
    pub supporting: Vec<RankedEffect>,
    /// Final clamped vector.
    pub combined: EffectVector,
    /// Raw component vectors, before weighting.
    pub components: ComponentScores,
    pub interactions: Vec<AppliedInteraction>,
    /// Five-element scores from every available physical input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<ElementScores>,
}

impl EffectProfile {
    /// Dominant followed by supporting effects, in rank order.
    pub fn ranked(&self) -> impl Iterator<Item = &RankedEffect> + '_ {
        self.dominant.effect().into_iter().chain(self.supporting.iter())
    }
}

/// Everything the assembler needs from one calculation.
pub struct ProfileParts<'a> {
    pub tea_name: Option<String>,
    pub components: ComponentScores,
    pub aggregation: Aggregation,
    pub ranking: Ranking,
    pub elements: Option<ElementScores>,
    pub weights: &'a ComponentWeights,
    pub vocabulary: &'a Vocabulary,
}

pub fn assemble(parts: ProfileParts<'_>) -> EffectProfile {
    let ProfileParts {
        tea_name,
        components,
        aggregation,
        ranking,
        elements,
        weights,
        vocabulary,
    } = parts;

    let describe = |entry: RankedEntry| RankedEffect {
        contribution: Contribution::for_effect(&entry.name, &components, weights, &aggregation),
        strength: EffectStrength::from_level(entry.level),
        description: vocabulary
            .describe(&entry.name)
            .unwrap_or_default()
            .to_string(),
        name: entry.name,
        level: entry.level,
    };

    let dominant = match ranking.dominant {
        Some(entry) => DominantEffect::Effect(describe(entry)),
        None => DominantEffect::Undetermined {
            description: vocabulary.undetermined_description.clone(),
        },
    };
    let supporting = ranking.supporting.into_iter().map(describe).collect();

    EffectProfile {
        tea_name,
        dominant,
        supporting,
        combined: aggregation.combined.clone(),
        components,
        interactions: aggregation.applied,
        elements,
    }
}
