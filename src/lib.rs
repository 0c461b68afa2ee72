//! Rental listing catalog with cross-platform price comparison.
//!
//! A [`Corpus`] is generated once from a curated seed list and is read-only
//! afterwards; the [`query`] functions filter, sort and compare it.

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod models;
pub mod query;

pub use catalog::{generate_corpus, CatalogSource, SeedCatalog, SyntheticCatalog};
pub use config::Config;
pub use corpus::Corpus;
pub use error::CatalogError;
pub use models::{format_price, BestPrice, Condition, Property, PropertyType, SourcePrices};
pub use query::{best_price, filter, FilterOptions};
