//! Aggregator: weighted sum of component vectors, one interaction pass,
//! then clamping.
//!
//! Interaction rules are evaluated once each, in declared order, against
//! the pre-interaction vector. Their modifiers accumulate into a separate
//! delta vector, so no rule ever sees another rule's output and the pass
//! always terminates.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ComponentWeights;
use crate::core::{ComponentKind, ComponentScores, EffectVector, MAX_EFFECT_LEVEL, MIN_EFFECT_LEVEL};
use crate::reference::InteractionRule;

/// An interaction rule that fired during aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppliedInteraction {
    /// Position of the rule in the declared rule list.
    pub rule_index: usize,
    pub effects: [String; 2],
    pub modifier: f64,
    pub targets: Vec<String>,
}

/// Every stage of the combination, kept for traceability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregation {
    /// Weighted sum before interactions and clamping.
    pub weighted: EffectVector,
    /// Sum of interaction modifiers per effect.
    pub interaction_deltas: EffectVector,
    pub applied: Vec<AppliedInteraction>,
    /// Final vector, clamped to [0, 10].
    pub combined: EffectVector,
}

/// `combined[e] = Σ_c weight[c] * component[c][e]` over the union of keys.
pub fn weighted_sum(components: &ComponentScores, weights: &ComponentWeights) -> EffectVector {
    let mut combined = EffectVector::new();
    for kind in ComponentKind::ALL {
        let weight = weights.get(kind);
        for (effect, value) in components.get(kind).iter() {
            combined.add(effect, weight * value);
        }
    }
    combined
}

/// Evaluate each rule against `weighted`; both effects must exceed the
/// rule's floor (or `default_floor`).
pub fn interaction_deltas(
    weighted: &EffectVector,
    rules: &[InteractionRule],
    default_floor: f64,
) -> (EffectVector, Vec<AppliedInteraction>) {
    let mut deltas = EffectVector::new();
    let mut applied = Vec::new();

    for (rule_index, rule) in rules.iter().enumerate() {
        let floor = rule.floor.unwrap_or(default_floor);
        let [first, second] = &rule.effects;
        if weighted.get(first) <= floor || weighted.get(second) <= floor {
            continue;
        }
        let targets = rule.targets();
        for target in &targets {
            deltas.add(target, rule.modifier);
        }
        trace!(
            rule_index = rule_index,
            first = %first,
            second = %second,
            modifier = rule.modifier,
            "Interaction rule applied"
        );
        applied.push(AppliedInteraction {
            rule_index,
            effects: rule.effects.clone(),
            modifier: rule.modifier,
            targets: targets.into_iter().map(String::from).collect(),
        });
    }

    (deltas, applied)
}

pub fn combine(
    components: &ComponentScores,
    weights: &ComponentWeights,
    rules: &[InteractionRule],
    default_floor: f64,
) -> Aggregation {
    let weighted = weighted_sum(components, weights);
    let (interaction_deltas, applied) = interaction_deltas(&weighted, rules, default_floor);

    let mut adjusted = weighted.clone();
    adjusted.add_all(&interaction_deltas);
    let combined = adjusted.clamped(MIN_EFFECT_LEVEL, MAX_EFFECT_LEVEL);

    Aggregation {
        weighted,
        interaction_deltas,
        applied,
        combined,
    }
}
