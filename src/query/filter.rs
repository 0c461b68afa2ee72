use crate::models::{Property, PropertyType};
use crate::query::price::best_amount;
use crate::query::types::{BedsMatch, FilterOptions};
use tracing::debug;

/// Records satisfying every set field of `options`, in their original order.
///
/// Borrows from `properties`; the backing list is never modified.
pub fn filter<'a>(properties: &'a [Property], options: &FilterOptions) -> Vec<&'a Property> {
    let matched: Vec<&Property> = properties.iter().filter(|p| matches(p, options)).collect();
    debug!("Filter kept {} of {} properties", matched.len(), properties.len());
    matched
}

/// Whether a single record passes the conjunction of all set predicates
pub fn matches(property: &Property, options: &FilterOptions) -> bool {
    if let Some(needle) = non_empty(&options.location) {
        let needle = needle.to_lowercase();
        if !property.location.to_lowercase().contains(&needle)
            && !property.city.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if let Some(city) = non_empty(&options.city) {
        if property.city.to_lowercase() != city.to_lowercase() {
            return false;
        }
    }

    if options.price_min.is_some() || options.price_max.is_some() {
        let Some(price) = best_amount(property) else {
            return false;
        };
        if options.price_min.is_some_and(|min| price < min) {
            return false;
        }
        if options.price_max.is_some_and(|max| price > max) {
            return false;
        }
    }

    if let Some(beds) = options.beds {
        let keep = match options.beds_match {
            BedsMatch::AtLeast => property.beds >= beds,
            BedsMatch::Exactly => property.beds == beds,
        };
        if !keep {
            return false;
        }
    }

    if options.baths.is_some_and(|baths| property.baths < baths) {
        return false;
    }

    if options.furnished == Some(true) && !property.furnished {
        return false;
    }

    if let Some(name) = &options.property_type {
        // Unknown names match nothing
        if PropertyType::parse(name) != Some(property.property_type) {
            return false;
        }
    }

    if let Some(sources) = options.data_sources.as_deref().filter(|s| !s.is_empty()) {
        if !sources.iter().any(|s| property.price_by_source.contains(s)) {
            return false;
        }
    }

    true
}

/// Empty text means "not set"; anything else is matched exactly as given.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
