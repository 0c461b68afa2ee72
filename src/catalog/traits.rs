use crate::error::Result;
use crate::models::Property;

/// Common trait for anything that can produce catalog records.
/// The seed list and the synthetic expander both implement it so the
/// corpus can be built from either.
pub trait CatalogSource {
    /// Produce the ordered list of records
    fn properties(&mut self) -> Result<Vec<Property>>;

    /// Get the name of the catalog source
    fn source_name(&self) -> &'static str;
}
