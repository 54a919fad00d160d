use anyhow::Result;
use clap::Parser;
use teaeffect::cli::{Cli, Commands};
use teaeffect::commands::{self, CalculateConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calculate {
            tea,
            config,
            reference,
            preset,
            compact,
            verbosity,
        } => {
            teaeffect::observability::init_tracing(verbosity);
            commands::handle_calculate(CalculateConfig {
                tea,
                config,
                reference,
                preset: preset.map(Into::into),
                compact,
            })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
