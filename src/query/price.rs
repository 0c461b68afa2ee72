use crate::models::{BestPrice, Property};

/// Cheapest quote across every platform listing `property`.
///
/// Returns `None` only for a record with no quotes, which the catalog never
/// produces.
pub fn best_price(property: &Property) -> Option<BestPrice> {
    property.price_by_source.best()
}

/// Best price as a bare number, for comparisons
pub(crate) fn best_amount(property: &Property) -> Option<i64> {
    property.price_by_source.iter().map(|(_, price)| price).min()
}
