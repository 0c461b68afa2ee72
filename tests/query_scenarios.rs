use housing_compare::catalog::SeedCatalog;
use housing_compare::query::{self, BedsMatch, ComparisonSet, FilterOptions, SortOrder};
use housing_compare::{format_price, BestPrice, Corpus};

fn seed_corpus() -> Corpus {
    Corpus::build(&mut SeedCatalog::new()).unwrap()
}

fn ids(records: &[&housing_compare::Property]) -> Vec<u32> {
    records.iter().map(|p| p.id).collect()
}

#[test]
fn villa_best_price_is_olx() {
    let corpus = seed_corpus();
    let best = query::best_price(corpus.get(1).unwrap()).unwrap();
    assert_eq!(best, BestPrice { source: "OLX".to_string(), price: 34000 });
    assert_eq!(format_price(best.price), "₹34,000");
}

// Bangalore with 3 bedrooms: records 1, 5, 8 have three, record 6 has four.
#[test]
fn bangalore_three_beds_at_least() {
    let corpus = seed_corpus();
    let options = FilterOptions::new().location("bangalore").beds(3);
    assert_eq!(options.beds_match, BedsMatch::AtLeast);
    assert_eq!(ids(&corpus.search(&options)), vec![1, 5, 6, 8]);
}

#[test]
fn bangalore_three_beds_exactly() {
    let corpus = seed_corpus();
    let options = FilterOptions::new().location("bangalore").beds_exactly(3);
    let found = corpus.search(&options);
    assert_eq!(ids(&found), vec![1, 5, 8]);
    assert!(!ids(&found).contains(&6));
}

#[test]
fn search_then_sort_then_compare() {
    let corpus = seed_corpus();
    let found = corpus.search(&FilterOptions::new().furnished(true).property_type("Apartment"));
    let cheapest = query::sort(&found, SortOrder::PriceLowToHigh);
    assert_eq!(ids(&cheapest), vec![7, 3, 9, 5, 8]);

    let mut selection = ComparisonSet::new();
    for p in &cheapest {
        selection.select(p.id);
    }
    assert_eq!(ids(&selection.resolve(&corpus)), vec![9, 5, 8]);
}

#[test]
fn filter_options_deserialize_from_camel_case() {
    let options: FilterOptions = serde_json::from_str(
        r#"{"location":"whitefield","priceMin":30000,"priceMax":40000,"dataSources":["OLX"]}"#,
    )
    .unwrap();
    let corpus = seed_corpus();
    assert_eq!(ids(&corpus.search(&options)), vec![1]);
}

#[test]
fn missing_property_is_none() {
    assert!(seed_corpus().get(404).is_none());
}
