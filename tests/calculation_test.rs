//! End-to-end behaviour of `EffectCalculator` against built-in and inline
//! reference tables.

use indoc::indoc;
use pretty_assertions::assert_eq;
use teaeffect::config::{ComponentWeights, TeaEffectConfig};
use teaeffect::{
    DominantEffect, EffectCalculator, EffectVector, FlavorNote, Geography, ProcessingInfo,
    ReferenceTables, TeaRecord,
};

fn builtin() -> EffectCalculator {
    EffectCalculator::with_defaults().unwrap()
}

/// Small tables where every vector is on the 0-10 scale and no interaction
/// rule is declared, so expected values can be written literally.
fn literal_calculator(weights: ComponentWeights) -> EffectCalculator {
    let tables = ReferenceTables::from_toml_str(indoc! {r#"
        [vocabulary]
        undetermined_description = "undetermined"
        effects = [
            { name = "energizing", description = "Lifts" },
            { name = "calming", description = "Settles" },
            { name = "focusing", description = "Sharpens" },
        ]

        [types.entries.bright]
        effects = { energizing = 8 }
        [types.entries.even]
        effects = { calming = 6, energizing = 6 }
        [types.entries.split]
        effects = { focusing = 8, calming = 4 }
        [types.entries.near]
        effects = { focusing = 8, calming = 3.9 }
        [types.entries.loud]
        effects = { energizing = 10, calming = 10 }

        [flavors]
        scale_max = 10
        [flavors.categories.citrus]
        zest = { effects = { energizing = 2 } }
        blast = { effects = { energizing = 10, calming = 10 } }
    "#})
    .unwrap();
    EffectCalculator::new(tables, TeaEffectConfig::default().with_weights(weights)).unwrap()
}

fn full_record() -> TeaRecord {
    TeaRecord::of_type("Oolong")
        .with_name("Dong Ding")
        .with_sub_type("dong ding")
        .with_flavor("roasted")
        .with_flavor(FlavorNote::new("honey").with_intensity(7.0))
        .with_flavor("floral")
        .with_processing(
            ProcessingInfo::default()
                .with_oxidation(35.0)
                .with_roast("medium")
                .with_method("rolled"),
        )
        .with_geography(Geography {
            altitude: Some(1200.0),
            latitude: Some(23.8),
            humidity: Some(80.0),
            soil: Some("Red Clay".into()),
            climate: Some("subtropical".into()),
        })
        .with_age(2.0)
}

#[test]
fn empty_record_is_undetermined_with_empty_components() {
    let profile = builtin().calculate(&TeaRecord::default());

    assert!(profile.dominant.is_undetermined());
    assert!(profile.supporting.is_empty());
    assert!(profile.components.base.is_empty());
    assert!(profile.components.flavor.is_empty());
    assert!(profile.components.processing.is_empty());
    assert!(profile.components.geography.is_empty());
    assert!(profile.elements.is_none());
    assert!(profile.interactions.is_empty());
}

#[test]
fn green_only_record_matches_raw_green_vector() {
    let mut tables = ReferenceTables::builtin().unwrap();
    tables.interactions.clear();
    let config = TeaEffectConfig::default().with_weights(ComponentWeights::new(1.0, 0.4, 0.3, 0.2));
    let calculator = EffectCalculator::new(tables, config).unwrap();

    let profile = calculator.calculate(&TeaRecord::of_type("green"));
    let green = EffectVector::from([
        ("energizing", 5.0),
        ("calming", 4.0),
        ("focusing", 7.0),
        ("harmonizing", 4.0),
        ("grounding", 1.0),
        ("elevating", 5.0),
        ("comforting", 2.0),
        ("restorative", 4.0),
    ]);

    assert_eq!(profile.components.base, green);
    assert!(profile.components.flavor.is_empty());
    assert!(profile.components.processing.is_empty());
    assert!(profile.components.geography.is_empty());
    assert_eq!(profile.combined, green);
    assert_eq!(profile.dominant.name(), Some("focusing"));
}

#[test]
fn builtin_interactions_adjust_green_only_record() {
    let profile = builtin().calculate(&TeaRecord::of_type("green"));

    let fired: Vec<usize> = profile.interactions.iter().map(|i| i.rule_index).collect();
    // calming+focusing, energizing+focusing, harmonizing+calming
    assert_eq!(fired, vec![0, 1, 5]);

    assert_eq!(profile.components.base.get("focusing"), 7.0);
    assert!((profile.combined.get("focusing") - 8.3).abs() < 1e-9);
    assert!((profile.combined.get("energizing") - 5.5).abs() < 1e-9);
    assert!((profile.combined.get("harmonizing") - 4.3).abs() < 1e-9);
    assert_eq!(profile.combined.get("calming"), 4.0);
    assert_eq!(profile.dominant.name(), Some("focusing"));
}

#[test]
fn weighted_sum_reproduces_documented_example() {
    let calculator = literal_calculator(ComponentWeights::new(0.5, 0.3, 0.0, 0.0));
    let tea = TeaRecord::of_type("bright").with_flavor("zest");

    let profile = calculator.calculate(&tea);
    assert_eq!(profile.combined.get("energizing"), 4.0 + 0.3 * 2.0);
    let contribution = profile.dominant.effect().unwrap().contribution;
    assert_eq!(contribution.base, 4.0);
    assert!((contribution.total() - 4.6).abs() < 1e-12);
}

#[test]
fn extreme_components_are_clamped_to_ten() {
    let calculator = literal_calculator(ComponentWeights::new(1.0, 1.0, 0.0, 0.0));
    let tea = TeaRecord::of_type("loud").with_flavor("blast");

    let profile = calculator.calculate(&tea);
    assert_eq!(profile.combined.get("energizing"), 10.0);
    assert_eq!(profile.combined.get("calming"), 10.0);
    assert!(profile.combined.iter().all(|(_, v)| (0.0..=10.0).contains(&v)));
}

#[test]
fn tie_resolves_by_vocabulary_order_across_runs() {
    let calculator = literal_calculator(ComponentWeights::default());
    for _ in 0..20 {
        let profile = calculator.calculate(&TeaRecord::of_type("even"));
        assert_eq!(profile.dominant.name(), Some("energizing"));
        assert_eq!(profile.supporting[0].name, "calming");
    }
}

#[test]
fn supporting_boundary_at_half_of_dominant() {
    let calculator = literal_calculator(ComponentWeights::default());

    let included = calculator.calculate(&TeaRecord::of_type("split"));
    assert_eq!(included.dominant.name(), Some("focusing"));
    assert_eq!(included.supporting.len(), 1);
    assert_eq!(included.supporting[0].level, 4.0);

    let excluded = calculator.calculate(&TeaRecord::of_type("near"));
    assert!(excluded.supporting.is_empty());
}

#[test]
fn repeated_calculation_is_bit_identical() {
    let calculator = builtin();
    let tea = full_record();

    let first = calculator.calculate(&tea);
    let second = calculator.calculate(&tea);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn batch_matches_sequential_calculation() {
    let calculator = builtin();
    let teas = vec![
        full_record(),
        TeaRecord::default(),
        TeaRecord::of_type("pu-erh").with_sub_type("shou").with_age(12.0),
        TeaRecord::of_type("white").with_flavor("honey"),
    ];

    let batch = calculator.calculate_batch(&teas);
    let sequential: Vec<_> = teas.iter().map(|tea| calculator.calculate(tea)).collect();
    assert_eq!(batch, sequential);
}

#[test]
fn flavor_order_does_not_change_result() {
    let calculator = builtin();
    let forward = TeaRecord::of_type("black")
        .with_flavor("malty")
        .with_flavor("honey")
        .with_flavor("roasted");
    let reversed = TeaRecord::of_type("black")
        .with_flavor("roasted")
        .with_flavor("honey")
        .with_flavor("malty");

    assert_eq!(
        calculator.calculate(&forward).combined,
        calculator.calculate(&reversed).combined
    );
}

#[test]
fn type_aliases_and_case_resolve_to_same_entry() {
    let calculator = builtin();
    let canonical = calculator.score_components(&TeaRecord::of_type("pu-erh"));
    for alias in ["Pu'er", "PUERH", " pu erh "] {
        assert_eq!(
            calculator.score_components(&TeaRecord::of_type(alias)),
            canonical,
            "alias {alias}"
        );
    }
}

#[test]
fn unrecognized_categories_contribute_nothing() {
    let calculator = builtin();
    let tea = TeaRecord::of_type("moon tea")
        .with_flavor("stardust")
        .with_processing(ProcessingInfo::default().with_method("levitated"));

    let profile = calculator.calculate(&tea);
    assert!(profile.components.base.is_empty());
    assert!(profile.components.flavor.is_empty());
    assert!(profile.components.processing.is_empty());
    assert!(matches!(profile.dominant, DominantEffect::Undetermined { .. }));
}

#[test]
fn full_record_produces_traceable_profile() {
    let profile = builtin().calculate(&full_record());

    assert_eq!(profile.tea_name.as_deref(), Some("Dong Ding"));
    assert!(!profile.dominant.is_undetermined());
    assert!(profile.elements.is_some());
    for effect in profile.ranked() {
        assert!(!effect.description.is_empty());
        assert!((effect.contribution.total() - effect.level).abs() < 1e-9);
        assert_eq!(profile.combined.get(&effect.name), effect.level);
    }
}
