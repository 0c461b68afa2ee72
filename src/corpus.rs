//! The immutable property catalog queries run against.
//!
//! A `Corpus` is built once from a [`CatalogSource`] and only handed out by
//! shared reference afterwards. Several independent corpora can coexist,
//! which keeps tests isolated from each other.

use crate::catalog::CatalogSource;
use crate::error::Result;
use crate::models::Property;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    properties: Vec<Property>,
}

impl Corpus {
    /// Drain `source` once and freeze the result.
    pub fn build(source: &mut dyn CatalogSource) -> Result<Self> {
        let properties = source.properties()?;
        info!(
            "🏠 Catalog ready: {} properties from {} source",
            properties.len(),
            source.source_name()
        );
        Ok(Self { properties })
    }

    pub fn from_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Lookup by id. Unknown ids are a normal outcome.
    pub fn get(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
