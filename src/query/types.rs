use serde::{Deserialize, Serialize};

/// How the `beds` filter compares against a listing's bedroom count
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BedsMatch {
    /// Listing has at least the requested bedrooms
    #[default]
    AtLeast,
    /// Listing has exactly the requested bedrooms ("2 BHK" means two)
    Exactly,
}

/// Filter parameters for querying the catalog.
///
/// Every field is optional; an unset field places no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    /// Case-insensitive substring of the locality or the city
    pub location: Option<String>,
    /// Case-insensitive city name
    pub city: Option<String>,
    /// Lower bound on the best price
    pub price_min: Option<i64>,
    /// Upper bound on the best price
    pub price_max: Option<i64>,
    pub beds: Option<u32>,
    #[serde(default)]
    pub beds_match: BedsMatch,
    /// Minimum number of bathrooms
    pub baths: Option<u32>,
    /// `Some(true)` keeps only furnished listings; anything else is ignored
    pub furnished: Option<bool>,
    /// Variant name, e.g. "Villa" or "PG"
    pub property_type: Option<String>,
    /// Listing must be quoted on at least one of these platforms
    pub data_sources: Option<Vec<String>>,
}

impl FilterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn price_range(mut self, min: i64, max: i64) -> Self {
        self.price_min = Some(min);
        self.price_max = Some(max);
        self
    }

    pub fn beds(mut self, beds: u32) -> Self {
        self.beds = Some(beds);
        self
    }

    pub fn beds_exactly(mut self, beds: u32) -> Self {
        self.beds = Some(beds);
        self.beds_match = BedsMatch::Exactly;
        self
    }

    pub fn baths(mut self, baths: u32) -> Self {
        self.baths = Some(baths);
        self
    }

    pub fn furnished(mut self, furnished: bool) -> Self {
        self.furnished = Some(furnished);
        self
    }

    pub fn property_type(mut self, property_type: impl Into<String>) -> Self {
        self.property_type = Some(property_type.into());
        self
    }

    pub fn data_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_sources = Some(sources.into_iter().map(Into::into).collect());
        self
    }
}

/// Ordering applied to a result list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    PriceLowToHigh,
    PriceHighToLow,
    /// Latest `available_from` first
    Newest,
    LargestArea,
}
