use std::ops::Range;

/// Cities generated variants are placed in; `STATES` is index-aligned.
pub const CITIES: [&str; 6] = ["Bangalore", "Mumbai", "Delhi", "Hyderabad", "Chennai", "Pune"];

pub const STATES: [&str; 6] = [
    "Karnataka",
    "Maharashtra",
    "Delhi",
    "Telangana",
    "Tamil Nadu",
    "Maharashtra",
];

pub const LOCALITIES: [&str; 30] = [
    "Whitefield",
    "Indiranagar",
    "Koramangala",
    "Electronic City",
    "HSR Layout",
    "Bandra",
    "Andheri",
    "Powai",
    "Juhu",
    "Malad",
    "Connaught Place",
    "Vasant Kunj",
    "Dwarka",
    "Rohini",
    "Saket",
    "Hitech City",
    "Gachibowli",
    "Banjara Hills",
    "Jubilee Hills",
    "Madhapur",
    "T. Nagar",
    "Adyar",
    "Velachery",
    "Anna Nagar",
    "Mylapore",
    "Kothrud",
    "Hinjewadi",
    "Viman Nagar",
    "Koregaon Park",
    "Baner",
];

pub const PLACEHOLDER_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1554995207-c18c203602cb?q=80&w=1170&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1626178793926-22b28830aa30?q=80&w=1170&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1568605114967-8130f3a36994?q=80&w=1170&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1570129477492-45c003edd2be?q=80&w=1170&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=1170&auto=format&fit=crop",
    "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9?q=80&w=1175&auto=format&fit=crop",
];

/// Fixed offset added on top of the shared price delta, per source
pub const SOURCE_SKEW: [(&str, i64); 6] = [
    ("Housing", 0),
    ("99acres", 500),
    ("OLX", -300),
    ("MagicBricks", 200),
    ("NoBroker", -500),
    ("Makaan", 100),
];

/// Bounds for perturbing seed records into synthetic variants
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorSettings {
    /// Signed offset applied to `sqft`
    pub sqft_jitter: Range<i64>,
    pub min_sqft: u32,
    /// Delta shared by every source quote of one variant
    pub price_jitter: Range<i64>,
    pub min_price: i64,
    /// Half-width of the latitude/longitude jitter
    pub coordinate_jitter: f64,
    /// Every `furnished_period`-th index is furnished
    pub furnished_period: usize,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            sqft_jitter: -100..100,
            min_sqft: 300,
            price_jitter: -2000..3000,
            min_price: 5000,
            coordinate_jitter: 0.05,
            furnished_period: 3,
        }
    }
}
