//! Construction-time failures and configuration discovery.

use indoc::indoc;
use pretty_assertions::assert_eq;
use teaeffect::config::{
    loader::{find_config_from, load_config_from_path},
    ComponentWeights, PresetLevel, TeaEffectConfig, CONFIG_FILE_NAME,
};
use teaeffect::reference::InteractionRule;
use teaeffect::{EffectCalculator, Error, ReferenceTables, TeaRecord};
use tempfile::TempDir;

const MINIMAL_TABLES: &str = indoc! {r#"
    [vocabulary]
    effects = [{ name = "calming" }, { name = "focusing" }]

    [types.entries.green]
    effects = { calming = 5, focusing = 6 }
"#};

#[test]
fn interaction_with_unknown_effect_fails_at_load() {
    let contents = format!(
        "{}\n[[interactions]]\neffects = [\"calming\", \"euphoric\"]\nmodifier = 1.0\n",
        MINIMAL_TABLES
    );
    let err = ReferenceTables::from_toml_str(&contents).unwrap_err();
    match err {
        Error::UnknownEffect { effect, context } => {
            assert_eq!(effect, "euphoric");
            assert_eq!(context, "interaction rule #1");
        }
        other => panic!("expected UnknownEffect, got {other:?}"),
    }
}

#[test]
fn interaction_added_in_code_is_checked_by_calculator() {
    let mut tables = ReferenceTables::from_toml_str(MINIMAL_TABLES).unwrap();
    tables
        .interactions
        .push(InteractionRule::new("calming", "drowsy", -1.0));
    let err = EffectCalculator::new(tables, TeaEffectConfig::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownEffect { .. }));
    assert!(err.is_user_fixable());
}

#[test]
fn table_effect_outside_vocabulary_is_rejected() {
    let contents = indoc! {r#"
        [vocabulary]
        effects = [{ name = "calming" }]

        [types.entries.green]
        effects = { calming = 5, jittery = 2 }
    "#};
    assert!(matches!(
        ReferenceTables::from_toml_str(contents),
        Err(Error::UnknownEffect { .. })
    ));
}

#[test]
fn duplicate_literal_key_is_a_parse_error() {
    let contents = indoc! {r#"
        [vocabulary]
        effects = [{ name = "grounding" }]

        [types.entries.dark]
        effects = { grounding = 2, grounding = 4 }
    "#};
    assert!(matches!(
        ReferenceTables::from_toml_str(contents),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn zero_and_negative_weights_fail_before_any_calculation() {
    let tables = ReferenceTables::from_toml_str(MINIMAL_TABLES).unwrap();
    for weights in [
        ComponentWeights::new(0.0, 0.0, 0.0, 0.0),
        ComponentWeights::new(1.0, -0.1, 0.3, 0.2),
        ComponentWeights::new(f64::NAN, 0.4, 0.3, 0.2),
    ] {
        let config = TeaEffectConfig::default().with_weights(weights);
        let result = EffectCalculator::new(tables.clone(), config);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }
}

#[test]
fn configured_reference_file_is_used() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("tables.toml"), MINIMAL_TABLES).unwrap();
    std::fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "reference = \"tables.toml\"\n",
    )
    .unwrap();

    let config = load_config_from_path(&temp.path().join(CONFIG_FILE_NAME)).unwrap();
    let calculator = EffectCalculator::from_config(config).unwrap();
    let profile = calculator.calculate(&TeaRecord::of_type("green"));

    assert_eq!(profile.dominant.name(), Some("focusing"));
    assert_eq!(calculator.tables().vocabulary.effects.len(), 2);
}

#[test]
fn missing_reference_file_is_an_io_error() {
    let config = TeaEffectConfig {
        reference: Some("/nonexistent/tables.toml".into()),
        ..TeaEffectConfig::default()
    };
    assert!(matches!(
        EffectCalculator::from_config(config),
        Err(Error::Io { .. })
    ));
}

#[test]
fn config_is_discovered_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("catalogue").join("taiwan");
    std::fs::create_dir_all(&nested).unwrap();
    std::fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [weights]
            geography = 0.5

            [interactions]
            default_floor = 4.0
        "#},
    )
    .unwrap();

    let config = find_config_from(nested).unwrap();
    assert_eq!(config.weights.geography, 0.5);
    assert_eq!(config.weights.base, 1.0);
    assert_eq!(config.interactions.default_floor, 4.0);
}

#[test]
fn presets_change_only_weights() {
    let terroir = PresetLevel::Terroir.to_config();
    let defaults = TeaEffectConfig::default();
    assert_eq!(terroir.ranking, defaults.ranking);
    assert_eq!(terroir.interactions, defaults.interactions);
    assert!(terroir.weights.geography > defaults.weights.geography);
}
