//! Tea effect profiles from type, flavor, processing and origin.
//!
//! Four independent component scorers turn a [`TeaRecord`] into effect
//! vectors using swappable [`ReferenceTables`]. The vectors are combined
//! with configurable weights, adjusted by interaction rules, clamped to
//! 0-10 and ranked into a dominant effect plus supporting effects.
//!
//! ```rust
//! use teaeffect::{EffectCalculator, TeaRecord};
//!
//! let calculator = EffectCalculator::with_defaults()?;
//! let profile = calculator.calculate(&TeaRecord::of_type("green").with_flavor("grassy"));
//! assert!(!profile.dominant.is_undetermined());
//! # Ok::<(), teaeffect::errors::Error>(())
//! ```

pub mod calculator;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod observability;
pub mod profile;
pub mod reference;
pub mod scoring;

pub use crate::calculator::EffectCalculator;
pub use crate::config::{ComponentWeights, PresetLevel, RankingConfig, TeaEffectConfig};
pub use crate::core::{
    ComponentKind, ComponentScores, EffectVector, FlavorNote, Geography, ProcessingInfo,
    TeaRecord,
};
pub use crate::errors::{Error, Result};
pub use crate::profile::{Contribution, DominantEffect, EffectProfile, EffectStrength, RankedEffect};
pub use crate::reference::ReferenceTables;
