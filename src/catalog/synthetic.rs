use crate::catalog::traits::CatalogSource;
use crate::catalog::types::{
    GeneratorSettings, CITIES, LOCALITIES, PLACEHOLDER_IMAGES, SOURCE_SKEW, STATES,
};
use crate::error::{CatalogError, Result};
use crate::models::{Condition, Property, SourcePrices, KNOWN_SOURCES, PRIMARY_SOURCE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Expands a seed list into a larger catalog by cloning seeds round-robin
/// and perturbing location, size, price and condition.
///
/// The RNG is injected; pass a seeded [`StdRng`] for a reproducible catalog.
pub struct SyntheticCatalog<R: Rng> {
    seeds: Vec<Property>,
    target_size: usize,
    settings: GeneratorSettings,
    rng: R,
}

impl SyntheticCatalog<StdRng> {
    /// Generator backed by an OS-seeded RNG
    pub fn from_entropy(seeds: Vec<Property>, target_size: usize) -> Self {
        Self::new(seeds, target_size, StdRng::from_entropy())
    }

    /// Generator whose output depends only on `seed`
    pub fn seeded(seeds: Vec<Property>, target_size: usize, seed: u64) -> Self {
        Self::new(seeds, target_size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SyntheticCatalog<R> {
    pub fn new(seeds: Vec<Property>, target_size: usize, rng: R) -> Self {
        Self {
            seeds,
            target_size,
            settings: GeneratorSettings::default(),
            rng,
        }
    }

    pub fn with_settings(mut self, settings: GeneratorSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Seeds unchanged, followed by variants up to the target size.
    pub fn generate(&mut self) -> Result<Vec<Property>> {
        if self.seeds.is_empty() {
            return Err(CatalogError::EmptySeed);
        }

        let total = self.target_size.max(self.seeds.len());
        if u32::try_from(total).is_err() {
            return Err(CatalogError::TargetTooLarge(total));
        }
        let mut corpus = Vec::with_capacity(total);
        corpus.extend(self.seeds.iter().cloned());

        for index in self.seeds.len()..total {
            let id = u32::try_from(index + 1).map_err(|_| CatalogError::TargetTooLarge(total))?;
            let variant = self.variant(index, id);
            debug!(
                "Generated property {} from seed {} in {}, {}",
                variant.id,
                self.seeds[index % self.seeds.len()].id,
                variant.location,
                variant.city
            );
            corpus.push(variant);
        }

        info!(
            "Generated {} synthetic properties from {} seeds",
            total - self.seeds.len(),
            self.seeds.len()
        );
        Ok(corpus)
    }

    fn variant(&mut self, index: usize, id: u32) -> Property {
        let base = &self.seeds[index % self.seeds.len()];
        let settings = &self.settings;
        let city = index % CITIES.len();

        let sqft_delta = self.rng.gen_range(settings.sqft_jitter.clone());
        let price_delta = self.rng.gen_range(settings.price_jitter.clone());
        let jitter = settings.coordinate_jitter;
        let lat_delta = self.rng.gen_range(-jitter..=jitter);
        let lon_delta = self.rng.gen_range(-jitter..=jitter);

        let sqft = (i64::from(base.sqft) + sqft_delta).max(i64::from(settings.min_sqft));
        let fallback = base
            .price_by_source
            .get(PRIMARY_SOURCE)
            .or_else(|| base.price_by_source.first())
            .unwrap_or(settings.min_price);
        let price_by_source: SourcePrices = SOURCE_SKEW
            .iter()
            .map(|(source, skew)| {
                let quoted = base.price_by_source.get(source).unwrap_or(fallback);
                (*source, (quoted + price_delta + skew).max(settings.min_price))
            })
            .collect();

        Property {
            id,
            location: LOCALITIES[index % LOCALITIES.len()].to_string(),
            city: CITIES[city].to_string(),
            state: STATES[city].to_string(),
            sqft: u32::try_from(sqft).unwrap_or(settings.min_sqft),
            price_by_source,
            best_source: KNOWN_SOURCES[index % KNOWN_SOURCES.len()].to_string(),
            images: vec![
                PLACEHOLDER_IMAGES[index % PLACEHOLDER_IMAGES.len()].to_string(),
                PLACEHOLDER_IMAGES[(index + 1) % PLACEHOLDER_IMAGES.len()].to_string(),
            ],
            furnished: index % settings.furnished_period.max(1) == 0,
            condition: Condition::ALL[index % Condition::ALL.len()],
            latitude: base.latitude + lat_delta,
            longitude: base.longitude + lon_delta,
            ..base.clone()
        }
    }
}

impl<R: Rng> CatalogSource for SyntheticCatalog<R> {
    fn properties(&mut self) -> Result<Vec<Property>> {
        self.generate()
    }

    fn source_name(&self) -> &'static str {
        "Synthetic"
    }
}
