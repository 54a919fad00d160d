//! Validated entry point for effect calculation.
//!
//! Construction is where everything can fail: configuration is validated and
//! reference tables are canonicalised and checked before any tea record is
//! seen. After that `calculate` is a pure, infallible function of the record
//! and the shared read-only tables.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::config::TeaEffectConfig;
use crate::core::{ComponentScores, TeaRecord};
use crate::errors::Result;
use crate::profile::{assemble, EffectProfile, ProfileParts};
use crate::reference::ReferenceTables;
use crate::scoring::{self, combine, derive_elements, rank, ElementInputs};

#[derive(Debug, Clone)]
pub struct EffectCalculator {
    tables: Arc<ReferenceTables>,
    config: TeaEffectConfig,
}

impl EffectCalculator {
    pub fn new(tables: ReferenceTables, config: TeaEffectConfig) -> Result<Self> {
        config.validate()?;
        let tables = tables.prepare()?;
        Ok(Self {
            tables: Arc::new(tables),
            config,
        })
    }

    /// Built-in tables with default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ReferenceTables::builtin()?, TeaEffectConfig::default())
    }

    /// Use the reference file named by `config.reference`, or the built-in
    /// tables when none is set.
    pub fn from_config(config: TeaEffectConfig) -> Result<Self> {
        let tables = match &config.reference {
            Some(path) => ReferenceTables::from_path(path)?,
            None => ReferenceTables::builtin()?,
        };
        Self::new(tables, config)
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn config(&self) -> &TeaEffectConfig {
        &self.config
    }

    pub fn score_components(&self, tea: &TeaRecord) -> ComponentScores {
        scoring::score_components(tea, &self.tables)
    }

    pub fn calculate(&self, tea: &TeaRecord) -> EffectProfile {
        let tables = &*self.tables;
        let components = self.score_components(tea);
        let aggregation = combine(
            &components,
            &self.config.weights,
            &tables.interactions,
            self.config.interactions.default_floor,
        );
        let ranking = rank(&aggregation.combined, &tables.vocabulary, &self.config.ranking);

        let inputs = ElementInputs::full(tea, &tables.processing);
        let elements = (!inputs.is_empty()).then(|| derive_elements(&inputs, &tables.elements));

        debug!(
            tea = tea.name.as_deref().unwrap_or("<unnamed>"),
            dominant = ranking.dominant.as_ref().map(|d| d.name.as_str()).unwrap_or("undetermined"),
            supporting = ranking.supporting.len(),
            "Calculated effect profile"
        );

        assemble(ProfileParts {
            tea_name: tea.name.clone(),
            components,
            aggregation,
            ranking,
            elements,
            weights: &self.config.weights,
            vocabulary: &tables.vocabulary,
        })
    }

    /// Score many records in parallel. Output order matches input order.
    pub fn calculate_batch(&self, teas: &[TeaRecord]) -> Vec<EffectProfile> {
        teas.par_iter().map(|tea| self.calculate(tea)).collect()
    }
}
