//! Geography scorer: element derivation from geographic inputs, projected
//! onto the effect vocabulary.

use super::elements::{derive_elements, ElementInputs, ElementScores};
use crate::core::{EffectVector, TeaRecord};
use crate::reference::ElementTable;

/// A record without geography contributes nothing.
pub fn score_geography(tea: &TeaRecord, table: &ElementTable) -> EffectVector {
    let inputs = ElementInputs::geographic(tea);
    if inputs.is_empty() {
        return EffectVector::new();
    }
    project_elements(&derive_elements(&inputs, table), table)
}

/// `effect[e] = Σ weight[el][e] * (element - neutral) * projection_scale`.
///
/// Signed: elements below neutral pull their effects down. Elements sitting
/// exactly at neutral contribute no entry at all.
pub fn project_elements(elements: &ElementScores, table: &ElementTable) -> EffectVector {
    let mut vector = EffectVector::new();
    for (element, weights) in &table.projection {
        let Some(score) = elements.get(element) else {
            continue;
        };
        let deviation = (score - table.neutral) * table.projection_scale;
        if deviation == 0.0 {
            continue;
        }
        for (effect, weight) in weights.iter() {
            vector.add(effect, weight * deviation);
        }
    }
    vector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Geography;
    use crate::reference::ReferenceTables;
    use indoc::indoc;

    fn table() -> ElementTable {
        ReferenceTables::from_toml_str(indoc! {r#"
            [vocabulary]
            effects = [{ name = "grounding" }, { name = "focusing" }, { name = "calming" }]

            [elements]
            names = ["earth", "metal"]
            projection_scale = 2.0

            [[elements.gradients]]
            input = "altitude"
            low = 800
            high = 1500
            divisor = 500
            below = { earth = 1.0 }
            above = { metal = 1.0 }

            [elements.soils]
            rocky = { metal = 2 }

            [elements.projection]
            earth = { grounding = 1.0 }
            metal = { focusing = 0.5, calming = 0.25 }
        "#})
        .unwrap()
        .elements
    }

    fn tea(geography: Geography) -> TeaRecord {
        TeaRecord::of_type("green").with_geography(geography)
    }

    #[test]
    fn no_geography_contributes_nothing() {
        assert!(score_geography(&TeaRecord::of_type("green"), &table()).is_empty());
        assert!(score_geography(&tea(Geography::default()), &table()).is_empty());
    }

    #[test]
    fn neutral_geography_contributes_nothing() {
        let neutral = tea(Geography {
            altitude: Some(1000.0),
            soil: Some("unknown loam".into()),
            ..Geography::default()
        });
        assert!(score_geography(&neutral, &table()).is_empty());
    }

    #[test]
    fn elements_project_with_weights_and_scale() {
        let highland = tea(Geography {
            altitude: Some(2000.0),
            soil: Some("Rocky".into()),
            ..Geography::default()
        });
        // metal: 5 + 1 + 2 = 8, deviation 3 * scale 2 = 6
        let vector = score_geography(&highland, &table());
        assert_eq!(vector.get("focusing"), 3.0);
        assert_eq!(vector.get("calming"), 1.5);
        assert_eq!(vector.get("grounding"), 0.0);
    }

    #[test]
    fn below_neutral_elements_subtract() {
        let mut table = table();
        table.gradients[0].below.insert("metal".into(), -2.0);
        let lowland = tea(Geography {
            altitude: Some(300.0),
            ..Geography::default()
        });
        // earth 6 -> +2 grounding; metal 3 -> -4 * 0.5
        let vector = score_geography(&lowland, &table);
        assert_eq!(vector.get("grounding"), 2.0);
        assert_eq!(vector.get("focusing"), -2.0);
    }
}
