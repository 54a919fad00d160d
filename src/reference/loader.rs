use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::schema::{
    ElementDeltas, ElementTable, FlavorTable, InteractionRule, ProcessingTable, ReferenceTables,
    TypeTable, Vocabulary,
};
use super::validation::validate_tables;
use crate::core::{canonical_key, EffectVector};
use crate::errors::{Error, Result};

/// Reference dataset shipped with the crate.
pub const BUILTIN_REFERENCE: &str = include_str!("../../data/reference.toml");

impl ReferenceTables {
    /// Parse, canonicalise and validate tables from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let tables: ReferenceTables =
            toml::from_str(contents).map_err(|e| Error::parse("reference tables", e))?;
        tables.prepare()
    }

    /// Load tables from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let tables: ReferenceTables = toml::from_str(&contents)
            .map_err(|e| Error::parse(path.display().to_string(), e))?;
        tracing::debug!("Loaded reference tables from {}", path.display());
        tables.prepare()
    }

    /// The built-in reference dataset.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_REFERENCE)
    }

    /// Canonicalise every key, build the alias and flavor indexes, then
    /// validate. Idempotent, so tables assembled in code can go through it
    /// as well.
    pub fn prepare(self) -> Result<Self> {
        let mut tables = ReferenceTables {
            vocabulary: canonical_vocabulary(self.vocabulary),
            types: canonical_types(self.types)?,
            flavors: canonical_flavors(self.flavors)?,
            processing: canonical_processing(self.processing)?,
            elements: canonical_elements(self.elements)?,
            interactions: self
                .interactions
                .into_iter()
                .map(canonical_interaction)
                .collect(),
        };
        tables.types.alias_index = build_alias_index(&tables.types)?;
        tables.flavors.flavor_index = build_flavor_index(&tables.flavors);
        validate_tables(&tables)?;
        Ok(tables)
    }
}

/// Rebuild a map with canonical keys, rejecting keys that collide.
fn canonical_map<V>(
    table: &str,
    map: BTreeMap<String, V>,
    mut transform: impl FnMut(V) -> Result<V>,
) -> Result<BTreeMap<String, V>> {
    let mut canonical = BTreeMap::new();
    for (key, value) in map {
        let canonical_name = canonical_key(&key);
        if canonical.contains_key(&canonical_name) {
            return Err(Error::invalid_table(
                table,
                format!("duplicate key '{}'", canonical_name),
            ));
        }
        canonical.insert(canonical_name, transform(value)?);
    }
    Ok(canonical)
}

/// Canonicalise the keys of a name-to-level map, rejecting keys that collide.
fn canonical_levels<'a>(
    table: &str,
    entries: impl IntoIterator<Item = (&'a str, f64)>,
) -> Result<BTreeMap<String, f64>> {
    let mut canonical = BTreeMap::new();
    for (key, value) in entries {
        let canonical_name = canonical_key(key);
        if canonical.insert(canonical_name.clone(), value).is_some() {
            return Err(Error::invalid_table(
                table,
                format!("duplicate key '{}'", canonical_name),
            ));
        }
    }
    Ok(canonical)
}

fn canonical_effects(table: &str, effects: &EffectVector) -> Result<EffectVector> {
    Ok(canonical_levels(table, effects.iter())?.into_iter().collect())
}

fn canonical_deltas(table: &str, deltas: &ElementDeltas) -> Result<ElementDeltas> {
    canonical_levels(table, deltas.iter().map(|(k, v)| (k.as_str(), *v)))
}

fn canonical_vocabulary(vocabulary: Vocabulary) -> Vocabulary {
    Vocabulary {
        effects: vocabulary
            .effects
            .into_iter()
            .map(|mut def| {
                def.name = canonical_key(&def.name);
                def
            })
            .collect(),
        undetermined_description: vocabulary.undetermined_description,
    }
}

fn canonical_types(table: TypeTable) -> Result<TypeTable> {
    let entries = canonical_map("types", table.entries, |mut entry| {
        entry.aliases = entry.aliases.iter().map(|a| canonical_key(a)).collect();
        entry.effects = canonical_effects("types", &entry.effects)?;
        entry.subtypes = canonical_map("types", entry.subtypes, |mut sub| {
            sub.effects = canonical_effects("types", &sub.effects)?;
            Ok(sub)
        })?;
        Ok(entry)
    })?;
    Ok(TypeTable {
        scale_max: table.scale_max,
        entries,
        alias_index: BTreeMap::new(),
    })
}

fn canonical_flavors(table: FlavorTable) -> Result<FlavorTable> {
    let categories = canonical_map("flavors", table.categories, |flavors| {
        canonical_map("flavors", flavors, |mut entry| {
            entry.effects = canonical_effects("flavors", &entry.effects)?;
            Ok(entry)
        })
    })?;
    Ok(FlavorTable {
        scale_max: table.scale_max,
        categories,
        flavor_index: BTreeMap::new(),
    })
}

fn canonical_processing(table: ProcessingTable) -> Result<ProcessingTable> {
    Ok(ProcessingTable {
        scale_max: table.scale_max,
        methods: canonical_map("processing", table.methods, |mut entry| {
            entry.effects = canonical_effects("processing", &entry.effects)?;
            Ok(entry)
        })?,
        roasts: canonical_map("processing", table.roasts, |mut entry| {
            entry.effects = canonical_effects("processing", &entry.effects)?;
            Ok(entry)
        })?,
        oxidation: table
            .oxidation
            .map(|mut rule| -> Result<_> {
                rule.above = canonical_effects("processing", &rule.above)?;
                rule.below = canonical_effects("processing", &rule.below)?;
                Ok(rule)
            })
            .transpose()?,
    })
}

fn canonical_elements(table: ElementTable) -> Result<ElementTable> {
    Ok(ElementTable {
        names: table.names.iter().map(|n| canonical_key(n)).collect(),
        gradients: table
            .gradients
            .into_iter()
            .map(|mut rule| -> Result<_> {
                rule.below = canonical_deltas("elements", &rule.below)?;
                rule.above = canonical_deltas("elements", &rule.above)?;
                Ok(rule)
            })
            .collect::<Result<Vec<_>>>()?,
        soils: canonical_map("elements", table.soils, |d| canonical_deltas("elements", &d))?,
        climates: canonical_map("elements", table.climates, |d| {
            canonical_deltas("elements", &d)
        })?,
        projection: canonical_map("elements", table.projection, |v| {
            canonical_effects("elements", &v)
        })?,
        ..table
    })
}

fn canonical_interaction(rule: InteractionRule) -> InteractionRule {
    let [first, second] = rule.effects;
    InteractionRule {
        effects: [canonical_key(&first), canonical_key(&second)],
        ..rule
    }
}

fn build_alias_index(table: &TypeTable) -> Result<BTreeMap<String, String>> {
    let mut index = BTreeMap::new();
    for (type_key, entry) in &table.entries {
        for alias in &entry.aliases {
            if alias == type_key {
                continue;
            }
            if table.entries.contains_key(alias) {
                return Err(Error::invalid_table(
                    "types",
                    format!("alias '{}' of '{}' shadows another type", alias, type_key),
                ));
            }
            if let Some(existing) = index.insert(alias.clone(), type_key.clone()) {
                return Err(Error::invalid_table(
                    "types",
                    format!(
                        "alias '{}' claimed by both '{}' and '{}'",
                        alias, existing, type_key
                    ),
                ));
            }
        }
    }
    Ok(index)
}

fn build_flavor_index(table: &FlavorTable) -> BTreeMap<String, String> {
    let mut index = BTreeMap::new();
    for (category, flavors) in &table.categories {
        for flavor in flavors.keys() {
            index
                .entry(flavor.clone())
                .or_insert_with(|| category.clone());
        }
    }
    index
}
