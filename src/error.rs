use thiserror::Error;

/// Errors raised while assembling the property catalog
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Seed list is empty; at least one curated property is required")]
    EmptySeed,

    #[error("Target size {0} exceeds the range of property ids")]
    TargetTooLarge(usize),

    #[error("Invalid value for {key}: {message}")]
    Config { key: String, message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
