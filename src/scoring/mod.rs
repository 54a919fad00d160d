//! Scoring pipeline stages.
//!
//! tea record -> component scorers -> aggregator -> ranker
//!
//! The four component scorers are pure functions of a tea record and one
//! reference table; none depends on another's output.

pub mod aggregator;
pub mod base_type;
pub mod elements;
pub mod flavor;
pub mod geography;
pub mod normalizer;
pub mod processing;
pub mod ranker;

pub use aggregator::{combine, weighted_sum, AppliedInteraction, Aggregation};
pub use base_type::score_base_type;
pub use elements::{derive_elements, ElementInputs, ElementScores};
pub use flavor::score_flavors;
pub use geography::score_geography;
pub use normalizer::{normalize, normalize_vector};
pub use processing::score_processing;
pub use ranker::{rank, RankedEntry, Ranking};

use crate::core::{ComponentScores, TeaRecord};
use crate::reference::ReferenceTables;

/// Run every component scorer against its table.
pub fn score_components(tea: &TeaRecord, tables: &ReferenceTables) -> ComponentScores {
    ComponentScores {
        base: score_base_type(tea, &tables.types),
        flavor: score_flavors(tea, &tables.flavors),
        processing: score_processing(tea, &tables.processing),
        geography: score_geography(tea, &tables.elements),
    }
}
