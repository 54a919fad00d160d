//! Ranker: dominant and supporting effects.
//!
//! Order is by level (descending), then by the vocabulary's declared
//! priority, then by name for effects outside the vocabulary. Map iteration
//! order never decides a tie.

use std::cmp::Ordering;

use crate::config::RankingConfig;
use crate::core::EffectVector;
use crate::reference::Vocabulary;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub name: String,
    pub level: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// `None` when nothing scored above zero.
    pub dominant: Option<RankedEntry>,
    pub supporting: Vec<RankedEntry>,
}

impl Ranking {
    pub fn is_undetermined(&self) -> bool {
        self.dominant.is_none()
    }
}

/// Total order used for ranking: higher level first, then priority.
pub fn compare_entries(vocabulary: &Vocabulary, a: &RankedEntry, b: &RankedEntry) -> Ordering {
    let priority = |name: &str| vocabulary.priority(name).unwrap_or(usize::MAX);
    b.level
        .total_cmp(&a.level)
        .then_with(|| priority(&a.name).cmp(&priority(&b.name)))
        .then_with(|| a.name.cmp(&b.name))
}

pub fn rank(combined: &EffectVector, vocabulary: &Vocabulary, config: &RankingConfig) -> Ranking {
    let mut entries: Vec<RankedEntry> = combined
        .iter()
        .map(|(name, level)| RankedEntry {
            name: name.to_string(),
            level,
        })
        .collect();
    entries.sort_by(|a, b| compare_entries(vocabulary, a, b));

    let mut entries = entries.into_iter();
    let dominant = match entries.next() {
        Some(top) if top.level > 0.0 => top,
        _ => return Ranking::default(),
    };

    let relative_floor = dominant.level * config.supporting_fraction;
    let supporting = entries
        .filter(|entry| entry.level >= relative_floor && entry.level >= config.supporting_floor)
        .collect();

    Ranking {
        dominant: Some(dominant),
        supporting,
    }
}
