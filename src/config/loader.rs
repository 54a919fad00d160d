use std::fs;
use std::path::{Path, PathBuf};

use super::TeaEffectConfig;
use crate::errors::{Error, Result};

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".teaeffect.toml";

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<TeaEffectConfig> {
    parse_named_config(CONFIG_FILE_NAME, contents)
}

/// Parse and validate config, labelling parse errors with `source`.
fn parse_named_config(source: &str, contents: &str) -> Result<TeaEffectConfig> {
    let config =
        toml::from_str::<TeaEffectConfig>(contents).map_err(|e| Error::parse(source, e))?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a config file at an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<TeaEffectConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut config = parse_named_config(&path.display().to_string(), &contents)?;
    config.reference = config
        .reference
        .map(|reference| resolve_relative(path, reference));
    Ok(config)
}

/// Reference paths in a config file are relative to that file.
fn resolve_relative(config_path: &Path, reference: PathBuf) -> PathBuf {
    if reference.is_absolute() {
        return reference;
    }
    match config_path.parent() {
        Some(dir) => dir.join(reference),
        None => reference,
    }
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<TeaEffectConfig> {
    match load_config_from_path(config_path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(Error::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.teaeffect.toml`.
pub fn find_config_from(start: PathBuf) -> Option<TeaEffectConfig> {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

pub fn load_config() -> TeaEffectConfig {
    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return TeaEffectConfig::default();
        }
    };

    find_config_from(current).unwrap_or_else(|| {
        tracing::debug!("No config found. Using default config.");
        TeaEffectConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn parses_partial_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [weights]
            geography = 0.5

            [ranking]
            supporting_floor = 2.0
        "#})
        .unwrap();
        assert_eq!(config.weights.geography, 0.5);
        assert_eq!(config.weights.base, 1.0);
        assert_eq!(config.ranking.supporting_floor, 2.0);
        assert_eq!(config.ranking.supporting_fraction, 0.5);
    }

    #[test]
    fn negative_weight_fails_fast() {
        let err = parse_and_validate_config("[weights]\nbase = -1.0\n").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = parse_and_validate_config("[weights\n").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }

    #[test]
    fn parse_error_names_the_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.toml");
        fs::write(&path, "[ranking\n").unwrap();

        match load_config_from_path(&path).unwrap_err() {
            Error::Parse { what, .. } => assert_eq!(what, path.display().to_string()),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn ancestors_are_limited_by_depth() {
        let ancestors: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            ancestors,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }

    #[test]
    fn finds_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("teas").join("oolong");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "reference = \"tables.toml\"\n[weights]\nflavor = 0.9\n",
        )
        .unwrap();

        let config = find_config_from(nested).unwrap();
        assert_eq!(config.weights.flavor, 0.9);
        assert_eq!(config.reference, Some(temp.path().join("tables.toml")));
    }

    #[test]
    fn invalid_config_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[weights]\nbase = 0\nflavor = 0\nprocessing = 0\ngeography = 0\n",
        )
        .unwrap();
        assert!(try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME)).is_none());
    }
}
