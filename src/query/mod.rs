pub mod compare;
pub mod filter;
pub mod price;
pub mod sort;
pub mod types;

pub use compare::{similar, ComparisonSet, MAX_COMPARED, SIMILAR_LIMIT};
pub use filter::{filter, matches};
pub use price::best_price;
pub use sort::sort;
pub use types::{BedsMatch, FilterOptions, SortOrder};

use crate::corpus::Corpus;
use crate::models::Property;
use tracing::info;

impl Corpus {
    /// Filter the whole catalog, see [`filter()`]
    pub fn search(&self, options: &FilterOptions) -> Vec<&Property> {
        let found = filter(self.as_slice(), options);
        info!("🔎 {} properties found", found.len());
        found
    }
}
