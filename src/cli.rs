use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::PresetLevel;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WeightPreset {
    /// Base type dominates, other facets modify (default)
    Balanced,
    /// Tasting notes and processing weigh more
    FlavorForward,
    /// Origin and processing weigh more
    Terroir,
}

impl From<WeightPreset> for PresetLevel {
    fn from(preset: WeightPreset) -> Self {
        match preset {
            WeightPreset::Balanced => PresetLevel::Balanced,
            WeightPreset::FlavorForward => PresetLevel::FlavorForward,
            WeightPreset::Terroir => PresetLevel::Terroir,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "teaeffect")]
#[command(about = "Estimate the effect profile of a tea from its attributes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate effect profiles for one or more tea records
    Calculate {
        /// TOML file(s) describing a tea record
        #[arg(long = "tea", required = true, num_args = 1..)]
        tea: Vec<PathBuf>,

        /// Configuration file (defaults to the nearest .teaeffect.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Reference-table file, overriding the configured or built-in tables
        #[arg(short, long, env = "TEAEFFECT_REFERENCE")]
        reference: Option<PathBuf>,

        /// Replace configured weights with a preset
        #[arg(long, value_enum)]
        preset: Option<WeightPreset>,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,

        /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .teaeffect.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
