use crate::models::Property;
use crate::query::price::best_amount;
use crate::query::types::SortOrder;
use std::cmp::Reverse;

/// Reorder a result list. Stable, so ties keep their incoming order.
pub fn sort<'a>(records: &[&'a Property], order: SortOrder) -> Vec<&'a Property> {
    let mut sorted = records.to_vec();
    match order {
        SortOrder::PriceLowToHigh => sorted.sort_by_key(|p| best_amount(p).unwrap_or(i64::MAX)),
        SortOrder::PriceHighToLow => {
            sorted.sort_by_key(|p| Reverse(best_amount(p).unwrap_or(i64::MIN)))
        }
        SortOrder::Newest => sorted.sort_by_key(|p| Reverse(p.available_from)),
        SortOrder::LargestArea => sorted.sort_by_key(|p| Reverse(p.sqft)),
    }
    sorted
}
