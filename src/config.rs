use crate::error::CatalogError;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_TARGET_SIZE: usize = 70;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Number of records the catalog is expanded to
    pub target_size: usize,
    /// Fixed RNG seed for a reproducible catalog
    pub rng_seed: Option<u64>,
    /// Where the demo binary writes the catalog as JSON
    pub export_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            rng_seed: None,
            export_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, CatalogError> {
        // Load .env file if present (development)
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            target_size: parse_var(&lookup, "CATALOG_TARGET_SIZE")?.unwrap_or(DEFAULT_TARGET_SIZE),
            rng_seed: parse_var(&lookup, "CATALOG_RNG_SEED")?,
            export_path: lookup("EXPORT_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, CatalogError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| CatalogError::Config {
                key: key.to_string(),
                message: format!("{:?}: {}", raw, e),
            }),
    }
}
