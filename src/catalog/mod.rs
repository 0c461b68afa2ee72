pub mod seed;
pub mod synthetic;
pub mod traits;
pub mod types;

pub use seed::SeedCatalog;
pub use synthetic::SyntheticCatalog;
pub use traits::CatalogSource;
pub use types::GeneratorSettings;

use crate::error::Result;
use crate::models::Property;
use rand::Rng;

/// Expand `seed` to `target_size` records using `rng` for the perturbations.
pub fn generate_corpus<R: Rng>(
    seed: &[Property],
    target_size: usize,
    rng: R,
) -> Result<Vec<Property>> {
    SyntheticCatalog::new(seed.to_vec(), target_size, rng).generate()
}
