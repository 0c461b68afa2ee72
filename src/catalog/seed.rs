use crate::catalog::traits::CatalogSource;
use crate::catalog::types::PLACEHOLDER_IMAGES;
use crate::error::{CatalogError, Result};
use crate::models::{Condition, Property, PropertyType};
use chrono::NaiveDate;
use tracing::info;

/// The hand-curated listings every catalog starts from
#[derive(Debug, Clone)]
pub struct SeedCatalog {
    properties: Vec<Property>,
}

impl SeedCatalog {
    /// Curated Bangalore listings
    pub fn new() -> Self {
        Self::with_properties(curated_properties())
    }

    /// Use a custom seed list, e.g. in tests
    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for SeedCatalog {
    fn properties(&mut self) -> Result<Vec<Property>> {
        if self.properties.is_empty() {
            return Err(CatalogError::EmptySeed);
        }
        info!("📋 Loaded {} curated properties", self.properties.len());
        Ok(self.properties.clone())
    }

    fn source_name(&self) -> &'static str {
        "Seed"
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn images(indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|i| PLACEHOLDER_IMAGES[i % PLACEHOLDER_IMAGES.len()].to_string())
        .collect()
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn curated_properties() -> Vec<Property> {
    vec![
        Property {
            id: 1,
            title: "Modern 3BHK Villa with Garden".to_string(),
            description: "Luxury 3BHK villa with spacious rooms, modern amenities, and a beautiful garden. Perfect for families looking for a comfortable living space."
                .to_string(),
            location: "Whitefield".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 35000),
                ("99acres", 36000),
                ("OLX", 34000),
                ("MagicBricks", 36500),
            ]
            .into_iter()
            .collect(),
            best_source: "OLX".to_string(),
            beds: 3,
            baths: 3,
            sqft: 2200,
            amenities: strings(&[
                "Garden",
                "Parking",
                "Security",
                "Power Backup",
                "Gym",
                "Swimming Pool",
            ]),
            furnished: true,
            property_type: PropertyType::Villa,
            available_from: date(2023, 6, 1),
            images: images(&[0, 1, 2]),
            condition: Condition::Excellent,
            latitude: 12.9698,
            longitude: 77.7499,
        },
        Property {
            id: 2,
            title: "Cozy 2BHK in Residential Area".to_string(),
            description: "Well-maintained 2BHK apartment in a quiet residential area. Features modern interiors and comes with essential amenities."
                .to_string(),
            location: "Indiranagar".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 17000),
                ("99acres", 18000),
                ("OLX", 16000),
                ("NoBroker", 16500),
            ]
            .into_iter()
            .collect(),
            best_source: "OLX".to_string(),
            beds: 2,
            baths: 2,
            sqft: 1100,
            amenities: strings(&["Parking", "Security", "Power Backup", "Lift"]),
            furnished: false,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 5, 15),
            images: images(&[2, 0, 1]),
            condition: Condition::Good,
            latitude: 12.9784,
            longitude: 77.6408,
        },
        Property {
            id: 3,
            title: "Spacious 2BHK Apartment with Balcony".to_string(),
            description: "Beautiful 2BHK apartment with a large balcony offering scenic views. Features modern interiors and is located in a well-connected area."
                .to_string(),
            location: "Koramangala".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 18000),
                ("MagicBricks", 19000),
                ("NoBroker", 17500),
                ("Makaan", 18500),
            ]
            .into_iter()
            .collect(),
            best_source: "NoBroker".to_string(),
            beds: 2,
            baths: 2,
            sqft: 1200,
            amenities: strings(&["Balcony", "Parking", "Security", "Gym"]),
            furnished: true,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 6, 10),
            images: images(&[1, 2, 0]),
            condition: Condition::Excellent,
            latitude: 12.9352,
            longitude: 77.6245,
        },
        Property {
            id: 4,
            title: "Budget 1BHK near Tech Park".to_string(),
            description: "Affordable 1BHK apartment ideal for working professionals. Located near major tech parks and offers basic amenities."
                .to_string(),
            location: "Electronic City".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 12000),
                ("99acres", 12500),
                ("NoBroker", 11500),
                ("OLX", 12200),
            ]
            .into_iter()
            .collect(),
            best_source: "NoBroker".to_string(),
            beds: 1,
            baths: 1,
            sqft: 650,
            amenities: strings(&["Parking", "Security", "Water Supply"]),
            furnished: false,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 5, 20),
            images: images(&[0, 1]),
            condition: Condition::Good,
            latitude: 12.8458,
            longitude: 77.6692,
        },
        Property {
            id: 5,
            title: "Elegant 3BHK in Gated Community".to_string(),
            description: "Luxurious 3BHK apartment in a premium gated community with top-notch amenities and serene surroundings."
                .to_string(),
            location: "HSR Layout".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 28000),
                ("MagicBricks", 29500),
                ("99acres", 28500),
                ("Makaan", 29000),
            ]
            .into_iter()
            .collect(),
            best_source: "Housing".to_string(),
            beds: 3,
            baths: 3,
            sqft: 1800,
            amenities: strings(&[
                "Swimming Pool",
                "Gym",
                "Clubhouse",
                "Children's Play Area",
                "Security",
                "Power Backup",
            ]),
            furnished: true,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 6, 15),
            images: images(&[2, 0]),
            condition: Condition::Excellent,
            latitude: 12.9116,
            longitude: 77.6474,
        },
        Property {
            id: 6,
            title: "Newly Built 4BHK Independent House".to_string(),
            description: "Spacious 4BHK independent house with modern design and premium finishes. Perfect for large families seeking privacy and comfort."
                .to_string(),
            location: "JP Nagar".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 45000),
                ("99acres", 46000),
                ("MagicBricks", 44500),
                ("OLX", 45500),
            ]
            .into_iter()
            .collect(),
            best_source: "MagicBricks".to_string(),
            beds: 4,
            baths: 4,
            sqft: 2600,
            amenities: strings(&[
                "Garden",
                "Parking",
                "Security",
                "Power Backup",
                "Rain Water Harvesting",
            ]),
            furnished: false,
            property_type: PropertyType::House,
            available_from: date(2023, 7, 1),
            images: images(&[1, 0, 2]),
            condition: Condition::Excellent,
            latitude: 12.9105,
            longitude: 77.5857,
        },
        Property {
            id: 7,
            title: "Compact 1BHK with City View".to_string(),
            description: "Well-designed 1BHK apartment offering great city views. Ideal for bachelors or young couples starting out."
                .to_string(),
            location: "Marathahalli".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 13500),
                ("NoBroker", 13000),
                ("OLX", 14000),
                ("Makaan", 13800),
            ]
            .into_iter()
            .collect(),
            best_source: "NoBroker".to_string(),
            beds: 1,
            baths: 1,
            sqft: 700,
            amenities: strings(&["Lift", "Security", "Power Backup"]),
            furnished: true,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 5, 25),
            images: images(&[0, 2]),
            condition: Condition::Good,
            latitude: 12.9569,
            longitude: 77.7011,
        },
        Property {
            id: 8,
            title: "Premium 3BHK with Terrace Garden".to_string(),
            description: "Luxurious 3BHK penthouse with a private terrace garden. Offers premium amenities and is located in an upscale neighborhood."
                .to_string(),
            location: "Sadashivanagar".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 55000),
                ("MagicBricks", 57000),
                ("99acres", 56000),
                ("Makaan", 56500),
            ]
            .into_iter()
            .collect(),
            best_source: "Housing".to_string(),
            beds: 3,
            baths: 3,
            sqft: 2400,
            amenities: strings(&[
                "Terrace Garden",
                "Swimming Pool",
                "Gym",
                "Clubhouse",
                "Security",
                "Parking",
                "Power Backup",
            ]),
            furnished: true,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 7, 15),
            images: images(&[1, 0]),
            condition: Condition::Excellent,
            latitude: 13.0023,
            longitude: 77.5716,
        },
        Property {
            id: 9,
            title: "Stylish 2BHK in Central Location".to_string(),
            description: "Modern 2BHK apartment in the heart of the city. Features contemporary design and is close to all major amenities."
                .to_string(),
            location: "MG Road".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 22000),
                ("99acres", 23000),
                ("MagicBricks", 22500),
                ("NoBroker", 21500),
            ]
            .into_iter()
            .collect(),
            best_source: "NoBroker".to_string(),
            beds: 2,
            baths: 2,
            sqft: 1100,
            amenities: strings(&["Lift", "Security", "Power Backup", "Gym"]),
            furnished: true,
            property_type: PropertyType::Apartment,
            available_from: date(2023, 6, 5),
            images: images(&[2, 1]),
            condition: Condition::Good,
            latitude: 12.9719,
            longitude: 77.6412,
        },
        Property {
            id: 10,
            title: "Affordable PG Accommodation".to_string(),
            description: "Clean and well-maintained PG accommodation with shared facilities. Ideal for students or working professionals on a budget."
                .to_string(),
            location: "BTM Layout".to_string(),
            city: "Bangalore".to_string(),
            state: "Karnataka".to_string(),
            price_by_source: [
                ("Housing", 7000),
                ("OLX", 6500),
                ("NoBroker", 7200),
                ("99acres", 7500),
            ]
            .into_iter()
            .collect(),
            best_source: "OLX".to_string(),
            beds: 1,
            baths: 1,
            sqft: 300,
            amenities: strings(&["Wi-Fi", "Food", "Laundry", "Common Area"]),
            furnished: true,
            property_type: PropertyType::Pg,
            available_from: date(2023, 5, 10),
            images: images(&[0]),
            condition: Condition::Average,
            latitude: 12.9166,
            longitude: 77.6101,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curated_list_is_valid() {
        let seeds = SeedCatalog::new();
        assert_eq!(seeds.len(), 10);
        for (i, p) in seeds.as_slice().iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!(!p.price_by_source.is_empty());
            assert!(p.price_by_source.iter().all(|(_, price)| price > 0));
            assert!(p.cover_image().is_some());
        }
    }

    #[test]
    fn curated_best_source_matches_cheapest_quote() {
        for p in SeedCatalog::new().as_slice() {
            let best = p.price_by_source.best().unwrap();
            assert_eq!(best.source, p.best_source, "property {}", p.id);
        }
    }

    #[test]
    fn empty_seed_is_rejected() {
        let mut seeds = SeedCatalog::with_properties(Vec::new());
        assert_eq!(seeds.properties(), Err(CatalogError::EmptySeed));
    }

    #[test]
    fn every_curated_date_is_as_listed() {
        let expected = [
            (2023, 6, 1),
            (2023, 5, 15),
            (2023, 6, 10),
            (2023, 5, 20),
            (2023, 6, 15),
            (2023, 7, 1),
            (2023, 5, 25),
            (2023, 7, 15),
            (2023, 6, 5),
            (2023, 5, 10),
        ];
        let seeds = SeedCatalog::new();
        assert_eq!(seeds.len(), expected.len());
        for (p, (year, month, day)) in seeds.as_slice().iter().zip(expected) {
            let listed = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            assert_eq!(p.available_from, listed, "property {}", p.id);
            assert_ne!(p.available_from, NaiveDate::default(), "property {}", p.id);
        }
    }
}
