//! Reference table schema.
//!
//! Tables are plain configuration data: category key -> effect vector plus
//! an intensity scalar. Every table declares the `scale_max` it was authored
//! against; scorers rescale through [`crate::scoring::normalizer`] before
//! combining anything.

use crate::core::EffectVector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Additive deltas keyed by element name.
pub type ElementDeltas = BTreeMap<String, f64>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub types: TypeTable,
    #[serde(default)]
    pub flavors: FlavorTable,
    #[serde(default)]
    pub processing: ProcessingTable,
    #[serde(default)]
    pub elements: ElementTable,
    #[serde(default)]
    pub interactions: Vec<InteractionRule>,
}

// ============================================================================
// Effect vocabulary
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Declared order is the tie-break priority order.
    pub effects: Vec<EffectDefinition>,
    #[serde(default = "default_undetermined_description")]
    pub undetermined_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Vocabulary {
    /// Position of `effect` in the priority order. Lower wins ties.
    pub fn priority(&self, effect: &str) -> Option<usize> {
        self.effects.iter().position(|def| def.name == effect)
    }

    pub fn contains(&self, effect: &str) -> bool {
        self.priority(effect).is_some()
    }

    pub fn describe(&self, effect: &str) -> Option<&str> {
        self.effects
            .iter()
            .find(|def| def.name == effect)
            .map(|def| def.description.as_str())
    }
}

fn default_undetermined_description() -> String {
    "No distinct effect could be determined from the available information.".to_string()
}

// ============================================================================
// Base types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeTable {
    #[serde(default = "default_scale_max")]
    pub scale_max: f64,
    #[serde(default)]
    pub entries: BTreeMap<String, TypeEntry>,
    #[serde(skip)]
    pub(crate) alias_index: BTreeMap<String, String>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self {
            scale_max: default_scale_max(),
            entries: BTreeMap::new(),
            alias_index: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeEntry {
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub effects: EffectVector,
    #[serde(default)]
    pub subtypes: BTreeMap<String, SubtypeEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtypeEntry {
    #[serde(default)]
    pub effects: EffectVector,
}

impl TypeTable {
    /// Look up a canonical type key directly or through an alias.
    pub fn lookup(&self, key: &str) -> Option<&TypeEntry> {
        self.entries.get(key).or_else(|| {
            self.alias_index
                .get(key)
                .and_then(|target| self.entries.get(target))
        })
    }
}

// ============================================================================
// Flavors
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorTable {
    #[serde(default = "default_flavor_scale_max")]
    pub scale_max: f64,
    /// category -> flavor -> entry
    #[serde(default)]
    pub categories: BTreeMap<String, BTreeMap<String, FlavorEntry>>,
    #[serde(skip)]
    pub(crate) flavor_index: BTreeMap<String, String>,
}

impl Default for FlavorTable {
    fn default() -> Self {
        Self {
            scale_max: default_flavor_scale_max(),
            categories: BTreeMap::new(),
            flavor_index: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlavorEntry {
    /// Multiplier applied to this flavor's effects, typically 0.5-2.5.
    #[serde(default = "default_flavor_intensity")]
    pub intensity: f64,
    #[serde(default)]
    pub effects: EffectVector,
}

/// Separator for qualified `category:flavor` tags.
pub const FLAVOR_CATEGORY_SEPARATOR: char = ':';

impl FlavorTable {
    /// Look up a canonical tag, either qualified (`fruity:citrus`) or bare
    /// (`citrus`). Bare tags resolve to the first category, in key order,
    /// that defines them.
    pub fn lookup(&self, tag: &str) -> Option<&FlavorEntry> {
        if let Some((category, flavor)) = tag.split_once(FLAVOR_CATEGORY_SEPARATOR) {
            return self
                .categories
                .get(category.trim())
                .and_then(|flavors| flavors.get(flavor.trim()));
        }
        self.flavor_index
            .get(tag)
            .and_then(|category| self.categories.get(category))
            .and_then(|flavors| flavors.get(tag))
    }
}

fn default_flavor_intensity() -> f64 {
    1.0
}

// ============================================================================
// Processing
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingTable {
    #[serde(default = "default_scale_max")]
    pub scale_max: f64,
    #[serde(default)]
    pub methods: BTreeMap<String, MethodEntry>,
    #[serde(default)]
    pub roasts: BTreeMap<String, RoastEntry>,
    #[serde(default)]
    pub oxidation: Option<OxidationRule>,
}

impl Default for ProcessingTable {
    fn default() -> Self {
        Self {
            scale_max: default_scale_max(),
            methods: BTreeMap::new(),
            roasts: BTreeMap::new(),
            oxidation: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MethodEntry {
    #[serde(default)]
    pub effects: EffectVector,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoastEntry {
    /// Roast level on a 0-10 scale; feeds elemental derivation.
    #[serde(default = "default_roast_level")]
    pub level: f64,
    #[serde(default)]
    pub effects: EffectVector,
}

/// Proportional oxidation contribution, centred on `neutral`.
///
/// `(oxidation - neutral) / divisor` scales `above` when positive and the
/// magnitude scales `below` when negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OxidationRule {
    #[serde(default = "default_oxidation_neutral")]
    pub neutral: f64,
    #[serde(default = "default_oxidation_divisor")]
    pub divisor: f64,
    #[serde(default)]
    pub above: EffectVector,
    #[serde(default)]
    pub below: EffectVector,
}

fn default_roast_level() -> f64 {
    crate::core::NEUTRAL_BASELINE
}

fn default_oxidation_neutral() -> f64 {
    50.0
}

fn default_oxidation_divisor() -> f64 {
    10.0
}

// ============================================================================
// Elements
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementTable {
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default = "default_element_neutral")]
    pub neutral: f64,
    #[serde(default = "default_element_min")]
    pub min: f64,
    #[serde(default = "default_element_max")]
    pub max: f64,
    /// Effect points per element point away from neutral.
    #[serde(default = "default_projection_scale")]
    pub projection_scale: f64,
    #[serde(default)]
    pub gradients: Vec<GradientRule>,
    #[serde(default)]
    pub soils: BTreeMap<String, ElementDeltas>,
    #[serde(default)]
    pub climates: BTreeMap<String, ElementDeltas>,
    /// element -> effect weights
    #[serde(default)]
    pub projection: BTreeMap<String, EffectVector>,
}

impl Default for ElementTable {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            neutral: default_element_neutral(),
            min: default_element_min(),
            max: default_element_max(),
            projection_scale: default_projection_scale(),
            gradients: Vec::new(),
            soils: BTreeMap::new(),
            climates: BTreeMap::new(),
            projection: BTreeMap::new(),
        }
    }
}

/// Continuous input the gradient rules can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientInput {
    Altitude,
    /// Absolute latitude.
    Latitude,
    Humidity,
    Age,
    /// Oxidation percentage, 0-100.
    Oxidation,
    /// Roast level, 0-10, from the matching roast entry.
    Roast,
}

/// Piecewise-linear adjustment with a neutral band `[low, high]`.
///
/// Below `low` the `below` deltas scale by `(low - value) / divisor`; above
/// `high` the `above` deltas scale by `(value - high) / divisor`. Setting
/// `low == high` gives a deviation centred on a single neutral point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientRule {
    pub input: GradientInput,
    pub low: f64,
    pub high: f64,
    pub divisor: f64,
    #[serde(default)]
    pub below: ElementDeltas,
    #[serde(default)]
    pub above: ElementDeltas,
}

fn default_element_neutral() -> f64 {
    crate::core::NEUTRAL_BASELINE
}

fn default_element_min() -> f64 {
    1.0
}

fn default_element_max() -> f64 {
    10.0
}

fn default_projection_scale() -> f64 {
    2.0
}

// ============================================================================
// Interactions
// ============================================================================

/// Synergy (positive modifier) or antagonism (negative) between two effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRule {
    pub effects: [String; 2],
    pub modifier: f64,
    /// Both effects must exceed this. Falls back to the configured default.
    #[serde(default)]
    pub floor: Option<f64>,
    #[serde(default)]
    pub target: InteractionTarget,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionTarget {
    #[default]
    Both,
    First,
    Second,
}

impl InteractionRule {
    pub fn new(first: impl Into<String>, second: impl Into<String>, modifier: f64) -> Self {
        Self {
            effects: [first.into(), second.into()],
            modifier,
            floor: None,
            target: InteractionTarget::Both,
        }
    }

    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }

    pub fn with_target(mut self, target: InteractionTarget) -> Self {
        self.target = target;
        self
    }

    /// Effects the modifier is applied to.
    pub fn targets(&self) -> Vec<&str> {
        let [first, second] = &self.effects;
        match self.target {
            InteractionTarget::Both => vec![first.as_str(), second.as_str()],
            InteractionTarget::First => vec![first.as_str()],
            InteractionTarget::Second => vec![second.as_str()],
        }
    }
}

fn default_scale_max() -> f64 {
    10.0
}

fn default_flavor_scale_max() -> f64 {
    5.0
}
