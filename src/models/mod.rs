use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Listing platforms a property can be quoted on.
pub const KNOWN_SOURCES: [&str; 6] = [
    "Housing",
    "99acres",
    "OLX",
    "MagicBricks",
    "NoBroker",
    "Makaan",
];

/// Source whose quote stands in for a missing one when generating variants
pub const PRIMARY_SOURCE: &str = "Housing";

/// Kind of dwelling
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Apartment,
    House,
    Villa,
    #[serde(rename = "PG")]
    Pg,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
            PropertyType::Pg => "PG",
        }
    }

    /// Exact, case-sensitive match on the display name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Apartment" => Some(PropertyType::Apartment),
            "House" => Some(PropertyType::House),
            "Villa" => Some(PropertyType::Villa),
            "PG" => Some(PropertyType::Pg),
            _ => None,
        }
    }
}

/// Upkeep state of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Condition {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Maintenance")]
    NeedsMaintenance,
}

impl Condition {
    /// All variants in the order the generator cycles through them
    pub const ALL: [Condition; 4] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Average,
        Condition::NeedsMaintenance,
    ];
}

/// Monthly rent quoted per listing platform.
///
/// Keys are unique and keep insertion order, which decides ties in
/// [`SourcePrices::best`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SourcePrices(IndexMap<String, i64>);

impl SourcePrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a quote. Overwriting keeps the original position.
    pub fn insert(&mut self, source: impl Into<String>, price: i64) {
        self.0.insert(source.into(), price);
    }

    pub fn get(&self, source: &str) -> Option<i64> {
        self.0.get(source).copied()
    }

    pub fn contains(&self, source: &str) -> bool {
        self.0.contains_key(source)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(source, price)| (source.as_str(), *price))
    }

    /// First quote in insertion order
    pub fn first(&self) -> Option<i64> {
        self.0.first().map(|(_, price)| *price)
    }

    /// Lowest quote; the earliest inserted source wins a tie.
    pub fn best(&self) -> Option<BestPrice> {
        let mut best: Option<BestPrice> = None;
        for (source, price) in self.iter() {
            match &best {
                Some(current) if price >= current.price => {}
                _ => {
                    best = Some(BestPrice {
                        source: source.to_string(),
                        price,
                    })
                }
            }
        }
        best
    }

    /// Every quote except the one under `best.source`, in insertion order
    pub fn others<'a>(&'a self, best: &'a BestPrice) -> impl Iterator<Item = (&'a str, i64)> + 'a {
        self.iter().filter(move |(source, _)| *source != best.source)
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SourcePrices {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(source, price)| (source.into(), price)).collect())
    }
}

/// Cheapest quote for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BestPrice {
    pub source: String,
    pub price: i64,
}

/// One rental listing aggregated across platforms
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub state: String,
    #[serde(rename = "price")]
    pub price_by_source: SourcePrices,
    /// Advertised cheapest platform. Display only, see [`SourcePrices::best`].
    pub best_source: String,
    pub beds: u32,
    pub baths: u32,
    pub sqft: u32,
    pub amenities: Vec<String>,
    pub furnished: bool,
    pub property_type: PropertyType,
    pub available_from: NaiveDate,
    /// First image is the cover
    pub images: Vec<String>,
    pub condition: Condition,
    pub latitude: f64,
    pub longitude: f64,
}

impl Property {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Render a monthly rent as `₹35,000`
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if price < 0 {
        format!("-₹{}", grouped)
    } else {
        format!("₹{}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes() -> SourcePrices {
        [("Housing", 35000), ("99acres", 36000), ("OLX", 34000), ("MagicBricks", 36500)]
            .into_iter()
            .collect()
    }

    #[test]
    fn best_picks_lowest_quote() {
        let best = quotes().best().unwrap();
        assert_eq!(best.source, "OLX");
        assert_eq!(best.price, 34000);
    }

    #[test]
    fn best_tie_goes_to_first_inserted() {
        let prices: SourcePrices = [("NoBroker", 9000), ("Housing", 9000)].into_iter().collect();
        assert_eq!(prices.best().unwrap().source, "NoBroker");
    }

    #[test]
    fn best_of_empty_is_none() {
        assert!(SourcePrices::new().best().is_none());
    }

    #[test]
    fn others_skips_best_source() {
        let prices = quotes();
        let best = prices.best().unwrap();
        let rest: Vec<_> = prices.others(&best).map(|(s, _)| s).collect();
        assert_eq!(rest, vec!["Housing", "99acres", "MagicBricks"]);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut prices = quotes();
        prices.insert("Housing", 1);
        assert_eq!(prices.iter().next(), Some(("Housing", 1)));
        assert_eq!(prices.len(), 4);
    }

    #[test]
    fn formats_rupees_with_grouping() {
        assert_eq!(format_price(35000), "₹35,000");
        assert_eq!(format_price(500), "₹500");
        assert_eq!(format_price(1234567), "₹1,234,567");
        assert_eq!(format_price(0), "₹0");
    }

    #[test]
    fn property_type_parse() {
        assert_eq!(PropertyType::parse("PG"), Some(PropertyType::Pg));
        assert_eq!(PropertyType::parse("Villa"), Some(PropertyType::Villa));
        assert_eq!(PropertyType::parse("villa"), None);
        assert_eq!(PropertyType::parse("Castle"), None);
    }

    #[test]
    fn serializes_prices_as_ordered_object() {
        let json = serde_json::to_string(&quotes()).unwrap();
        assert_eq!(json, r#"{"Housing":35000,"99acres":36000,"OLX":34000,"MagicBricks":36500}"#);
    }
}
