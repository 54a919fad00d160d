//! Reference tables consumed by the component scorers.
//!
//! Tables are loaded once, canonicalised (keys trimmed and lower-cased),
//! indexed and validated, then shared read-only for the life of the process.
//! A built-in dataset ships in `data/reference.toml`; callers may supply
//! their own file with the same schema.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::BUILTIN_REFERENCE;
pub use schema::{
    EffectDefinition, ElementDeltas, ElementTable, FlavorEntry, FlavorTable, GradientInput,
    GradientRule, InteractionRule, InteractionTarget, MethodEntry, OxidationRule,
    ProcessingTable, ReferenceTables, RoastEntry, SubtypeEntry, TypeEntry, TypeTable,
    Vocabulary,
};
pub use validation::{validate_interactions, validate_tables};
