//! Load-time validation of reference tables.
//!
//! Everything that could make a calculation ambiguous is rejected here, so
//! that calculation itself never has to fail: unknown effect or element
//! names, non-positive scales, non-finite values and malformed interaction
//! rules.

use std::collections::BTreeSet;

use super::schema::{
    ElementDeltas, ElementTable, FlavorTable, InteractionRule, ProcessingTable, ReferenceTables,
    TypeTable, Vocabulary, FLAVOR_CATEGORY_SEPARATOR,
};
use crate::core::EffectVector;
use crate::errors::{Error, Result};

pub fn validate_tables(tables: &ReferenceTables) -> Result<()> {
    validate_vocabulary(&tables.vocabulary)?;
    validate_types(&tables.vocabulary, &tables.types)?;
    validate_flavors(&tables.vocabulary, &tables.flavors)?;
    validate_processing(&tables.vocabulary, &tables.processing)?;
    validate_elements(&tables.vocabulary, &tables.elements)?;
    validate_interactions(&tables.vocabulary, &tables.interactions)?;
    Ok(())
}

pub fn validate_vocabulary(vocabulary: &Vocabulary) -> Result<()> {
    if vocabulary.effects.is_empty() {
        return Err(Error::invalid_table(
            "vocabulary",
            "at least one effect must be declared",
        ));
    }
    let mut seen = BTreeSet::new();
    for def in &vocabulary.effects {
        if def.name.is_empty() {
            return Err(Error::invalid_table("vocabulary", "effect names cannot be empty"));
        }
        if !seen.insert(def.name.as_str()) {
            return Err(Error::invalid_table(
                "vocabulary",
                format!("effect '{}' declared twice", def.name),
            ));
        }
    }
    Ok(())
}

/// Every effect an interaction rule names must be in the vocabulary.
pub fn validate_interactions(vocabulary: &Vocabulary, rules: &[InteractionRule]) -> Result<()> {
    for (index, rule) in rules.iter().enumerate() {
        let context = format!("interaction rule #{}", index + 1);
        for effect in &rule.effects {
            if !vocabulary.contains(effect) {
                return Err(Error::unknown_effect(&context, effect));
            }
        }
        if rule.effects[0] == rule.effects[1] {
            return Err(Error::invalid_table(
                "interactions",
                format!("{} pairs '{}' with itself", context, rule.effects[0]),
            ));
        }
        if !rule.modifier.is_finite() {
            return Err(Error::invalid_table(
                "interactions",
                format!("{} has a non-finite modifier", context),
            ));
        }
        if rule.floor.is_some_and(|floor| !floor.is_finite()) {
            return Err(Error::invalid_table(
                "interactions",
                format!("{} has a non-finite floor", context),
            ));
        }
    }
    Ok(())
}

fn validate_scale(table: &str, scale_max: f64) -> Result<()> {
    if scale_max.is_finite() && scale_max > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_table(
            table,
            format!("scale_max must be positive, got {}", scale_max),
        ))
    }
}

fn validate_effects(
    vocabulary: &Vocabulary,
    table: &str,
    context: &str,
    effects: &EffectVector,
) -> Result<()> {
    for (effect, value) in effects.iter() {
        if !vocabulary.contains(effect) {
            return Err(Error::unknown_effect(context, effect));
        }
        if !value.is_finite() {
            return Err(Error::invalid_table(
                table,
                format!("{} has a non-finite value for '{}'", context, effect),
            ));
        }
    }
    Ok(())
}

fn validate_types(vocabulary: &Vocabulary, types: &TypeTable) -> Result<()> {
    validate_scale("types", types.scale_max)?;
    for (key, entry) in &types.entries {
        validate_effects(vocabulary, "types", &format!("type '{}'", key), &entry.effects)?;
        for (sub_key, sub) in &entry.subtypes {
            validate_effects(
                vocabulary,
                "types",
                &format!("subtype '{}/{}'", key, sub_key),
                &sub.effects,
            )?;
        }
    }
    Ok(())
}

fn validate_flavors(vocabulary: &Vocabulary, flavors: &FlavorTable) -> Result<()> {
    validate_scale("flavors", flavors.scale_max)?;
    for (category, entries) in &flavors.categories {
        if category.contains(FLAVOR_CATEGORY_SEPARATOR) {
            return Err(Error::invalid_table(
                "flavors",
                format!("category '{}' contains '{}'", category, FLAVOR_CATEGORY_SEPARATOR),
            ));
        }
        for (flavor, entry) in entries {
            let context = format!("flavor '{}:{}'", category, flavor);
            if flavor.contains(FLAVOR_CATEGORY_SEPARATOR) {
                return Err(Error::invalid_table(
                    "flavors",
                    format!("{} contains '{}'", context, FLAVOR_CATEGORY_SEPARATOR),
                ));
            }
            if !(entry.intensity.is_finite() && entry.intensity >= 0.0) {
                return Err(Error::invalid_table(
                    "flavors",
                    format!("{} has invalid intensity {}", context, entry.intensity),
                ));
            }
            validate_effects(vocabulary, "flavors", &context, &entry.effects)?;
        }
    }
    Ok(())
}

fn validate_processing(vocabulary: &Vocabulary, processing: &ProcessingTable) -> Result<()> {
    validate_scale("processing", processing.scale_max)?;
    for (method, entry) in &processing.methods {
        validate_effects(
            vocabulary,
            "processing",
            &format!("method '{}'", method),
            &entry.effects,
        )?;
    }
    for (roast, entry) in &processing.roasts {
        let context = format!("roast '{}'", roast);
        if !entry.level.is_finite() {
            return Err(Error::invalid_table(
                "processing",
                format!("{} has a non-finite level", context),
            ));
        }
        validate_effects(vocabulary, "processing", &context, &entry.effects)?;
    }
    if let Some(rule) = &processing.oxidation {
        if !(rule.divisor.is_finite() && rule.divisor > 0.0) || !rule.neutral.is_finite() {
            return Err(Error::invalid_table(
                "processing",
                "oxidation rule needs a finite neutral and a positive divisor",
            ));
        }
        validate_effects(vocabulary, "processing", "oxidation (above)", &rule.above)?;
        validate_effects(vocabulary, "processing", "oxidation (below)", &rule.below)?;
    }
    Ok(())
}

fn validate_element_deltas(
    names: &BTreeSet<&str>,
    context: &str,
    deltas: &ElementDeltas,
) -> Result<()> {
    for (element, delta) in deltas {
        if !names.contains(element.as_str()) {
            return Err(Error::unknown_element(context, element));
        }
        if !delta.is_finite() {
            return Err(Error::invalid_table(
                "elements",
                format!("{} has a non-finite delta for '{}'", context, element),
            ));
        }
    }
    Ok(())
}

fn validate_elements(vocabulary: &Vocabulary, elements: &ElementTable) -> Result<()> {
    let mut names = BTreeSet::new();
    for name in &elements.names {
        if !names.insert(name.as_str()) {
            return Err(Error::invalid_table(
                "elements",
                format!("element '{}' declared twice", name),
            ));
        }
    }

    let bounds_ok = [elements.min, elements.neutral, elements.max, elements.projection_scale]
        .iter()
        .all(|v| v.is_finite())
        && elements.min <= elements.neutral
        && elements.neutral <= elements.max;
    if !bounds_ok {
        return Err(Error::invalid_table(
            "elements",
            "expected finite bounds with min <= neutral <= max",
        ));
    }

    for (index, rule) in elements.gradients.iter().enumerate() {
        let context = format!("gradient #{} ({:?})", index + 1, rule.input);
        if !(rule.divisor.is_finite() && rule.divisor > 0.0) {
            return Err(Error::invalid_table(
                "elements",
                format!("{} needs a positive divisor", context),
            ));
        }
        if !(rule.low.is_finite() && rule.high.is_finite() && rule.low <= rule.high) {
            return Err(Error::invalid_table(
                "elements",
                format!("{} needs finite thresholds with low <= high", context),
            ));
        }
        validate_element_deltas(&names, &context, &rule.below)?;
        validate_element_deltas(&names, &context, &rule.above)?;
    }
    for (soil, deltas) in &elements.soils {
        validate_element_deltas(&names, &format!("soil '{}'", soil), deltas)?;
    }
    for (climate, deltas) in &elements.climates {
        validate_element_deltas(&names, &format!("climate '{}'", climate), deltas)?;
    }
    for (element, weights) in &elements.projection {
        let context = format!("projection of '{}'", element);
        if !names.contains(element.as_str()) {
            return Err(Error::unknown_element(&context, element));
        }
        validate_effects(vocabulary, "elements", &context, weights)?;
    }
    Ok(())
}
