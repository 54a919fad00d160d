use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::calculator::EffectCalculator;
use crate::config::{self, loader::load_config_from_path, PresetLevel, TeaEffectConfig};
use crate::core::TeaRecord;

pub struct CalculateConfig {
    pub tea: Vec<PathBuf>,
    pub config: Option<PathBuf>,
    pub reference: Option<PathBuf>,
    pub preset: Option<PresetLevel>,
    pub compact: bool,
}

/// Explicit `--config` must load; otherwise fall back to discovery.
fn resolve_config(options: &CalculateConfig) -> Result<TeaEffectConfig> {
    let mut resolved = match &options.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => config::load_config(),
    };
    if let Some(preset) = options.preset {
        resolved = resolved.with_weights(preset.weights());
    }
    if let Some(reference) = &options.reference {
        resolved.reference = Some(reference.clone());
    }
    Ok(resolved)
}

pub fn handle_calculate(options: CalculateConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_calculate(&options, &mut out)
}

/// A single record prints one profile object; several print an array.
pub fn run_calculate<W: Write>(options: &CalculateConfig, out: &mut W) -> Result<()> {
    let calculator = EffectCalculator::from_config(resolve_config(options)?)
        .context("Failed to initialise calculator")?;

    let teas = options
        .tea
        .iter()
        .map(|path| {
            TeaRecord::from_path(path)
                .with_context(|| format!("Failed to read tea record {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let profiles = calculator.calculate_batch(&teas);
    let value = match profiles.as_slice() {
        [single] => serde_json::to_value(single)?,
        many => serde_json::to_value(many)?,
    };

    if options.compact {
        serde_json::to_writer(&mut *out, &value)?;
    } else {
        serde_json::to_writer_pretty(&mut *out, &value)?;
    }
    writeln!(out)?;
    Ok(())
}
