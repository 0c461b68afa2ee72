//! Invariants every generated catalog must hold, checked over many RNG
//! seeds and target sizes.

use housing_compare::catalog::{SeedCatalog, SyntheticCatalog};
use housing_compare::query::{best_price, filter, FilterOptions};
use housing_compare::{CatalogError, Corpus, Property};
use proptest::prelude::*;
use std::collections::HashSet;

fn seeds() -> Vec<Property> {
    SeedCatalog::new().as_slice().to_vec()
}

fn generate(target: usize, rng_seed: u64) -> Corpus {
    let mut source = SyntheticCatalog::seeded(seeds(), target, rng_seed);
    Corpus::build(&mut source).unwrap()
}

proptest! {
    #[test]
    fn size_and_ids(target in 0usize..150, rng_seed in any::<u64>()) {
        let corpus = generate(target, rng_seed);
        let expected = target.max(10);
        prop_assert_eq!(corpus.len(), expected);

        let ids: HashSet<u32> = corpus.iter().map(|p| p.id).collect();
        prop_assert_eq!(ids.len(), expected);
        prop_assert!(ids.iter().all(|id| *id >= 1 && *id as usize <= expected));
    }

    #[test]
    fn every_price_positive(rng_seed in any::<u64>()) {
        for p in &generate(70, rng_seed) {
            prop_assert!(!p.price_by_source.is_empty());
            prop_assert!(p.price_by_source.iter().all(|(_, price)| price > 0));
            prop_assert!(p.sqft > 0);
        }
    }

    #[test]
    fn best_price_is_minimum(rng_seed in any::<u64>()) {
        for p in &generate(70, rng_seed) {
            let min = p.price_by_source.iter().map(|(_, price)| price).min().unwrap();
            prop_assert_eq!(best_price(p).unwrap().price, min);
        }
    }

    #[test]
    fn price_range_filter_holds(
        rng_seed in any::<u64>(),
        min in 0i64..60000,
        width in 0i64..30000,
    ) {
        let corpus = generate(70, rng_seed);
        let max = min + width;
        let found = filter(corpus.as_slice(), &FilterOptions::new().price_range(min, max));
        for p in &found {
            let best = best_price(p).unwrap().price;
            prop_assert!(best >= min && best <= max);
        }
        let expected = corpus
            .iter()
            .filter(|p| {
                let best = best_price(p).unwrap().price;
                best >= min && best <= max
            })
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn inverted_range_is_empty(rng_seed in any::<u64>(), max in 0i64..60000, gap in 1i64..10000) {
        let corpus = generate(70, rng_seed);
        let options = FilterOptions::new().price_range(max + gap, max);
        prop_assert!(filter(corpus.as_slice(), &options).is_empty());
    }

    #[test]
    fn beds_filter_is_a_minimum(rng_seed in any::<u64>(), beds in 0u32..6) {
        let corpus = generate(70, rng_seed);
        let found = filter(corpus.as_slice(), &FilterOptions::new().beds(beds));
        prop_assert!(found.iter().all(|p| p.beds >= beds));
        prop_assert_eq!(found.len(), corpus.iter().filter(|p| p.beds >= beds).count());
    }

    #[test]
    fn results_preserve_corpus_order(rng_seed in any::<u64>(), furnished in any::<bool>()) {
        let corpus = generate(70, rng_seed);
        let options = FilterOptions::new().furnished(furnished).location("a");
        let found = filter(corpus.as_slice(), &options);
        let ids: Vec<u32> = found.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ids, sorted);
    }
}

#[test]
fn unconstrained_filter_returns_whole_corpus() {
    let corpus = generate(70, 17);
    let found = filter(corpus.as_slice(), &FilterOptions::new());
    assert_eq!(found.len(), corpus.len());
    assert!(found.iter().zip(corpus.iter()).all(|(a, b)| a.id == b.id));
}

#[test]
fn olx_filter_matches_exactly_olx_listings() {
    let corpus = Corpus::build(&mut SeedCatalog::new()).unwrap();
    let found: Vec<u32> = filter(corpus.as_slice(), &FilterOptions::new().data_sources(["OLX"]))
        .iter()
        .map(|p| p.id)
        .collect();
    let expected: Vec<u32> = corpus
        .iter()
        .filter(|p| p.price_by_source.contains("OLX"))
        .map(|p| p.id)
        .collect();
    assert_eq!(found, expected);
    assert_eq!(found, vec![1, 2, 4, 6, 7, 10]);
}

#[test]
fn empty_seed_list_is_a_configuration_error() {
    let mut source = SyntheticCatalog::seeded(Vec::new(), 70, 1);
    assert_eq!(Corpus::build(&mut source).unwrap_err(), CatalogError::EmptySeed);
}
