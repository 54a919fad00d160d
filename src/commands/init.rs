use anyhow::{Context, Result};
use std::path::Path;

use crate::config::CONFIG_FILE_NAME;

pub(crate) const DEFAULT_CONFIG: &str = r#"# teaeffect configuration

# Custom reference tables, relative to this file. The built-in tables are
# used when this is absent.
# reference = "reference.toml"

[weights]
base = 1.0
flavor = 0.4
processing = 0.3
geography = 0.2

[ranking]
supporting_fraction = 0.5
supporting_floor = 3.0

[interactions]
default_floor = 3.0
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}
