use crate::corpus::Corpus;
use crate::models::Property;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Most properties shown side by side
pub const MAX_COMPARED: usize = 3;

/// Default number of suggestions on a detail view
pub const SIMILAR_LIMIT: usize = 3;

/// First-listed quotes closer than this count as a similar price
const SIMILAR_PRICE_WINDOW: i64 = 5000;

/// Ids picked for side-by-side comparison, oldest first
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ComparisonSet {
    ids: VecDeque<u32>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id`; a full set drops its oldest entry. Duplicates are ignored.
    pub fn select(&mut self, id: u32) {
        if self.ids.contains(&id) {
            return;
        }
        if self.ids.len() >= MAX_COMPARED {
            self.ids.pop_front();
        }
        self.ids.push_back(id);
    }

    pub fn remove(&mut self, id: u32) {
        self.ids.retain(|selected| *selected != id);
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected records in selection order. Ids missing from `corpus` are skipped.
    pub fn resolve<'a>(&self, corpus: &'a Corpus) -> Vec<&'a Property> {
        self.ids.iter().filter_map(|id| corpus.get(*id)).collect()
    }
}

/// Other listings in the same locality or at a similar first-listed price
pub fn similar<'a>(corpus: &'a Corpus, subject: &Property, limit: usize) -> Vec<&'a Property> {
    let subject_price = subject.price_by_source.first();
    corpus
        .iter()
        .filter(|p| p.id != subject.id)
        .filter(|p| {
            p.location == subject.location
                || match (p.price_by_source.first(), subject_price) {
                    (Some(a), Some(b)) => (a - b).abs() < SIMILAR_PRICE_WINDOW,
                    _ => false,
                }
        })
        .take(limit)
        .collect()
}
