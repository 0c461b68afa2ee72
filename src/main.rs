use anyhow::Context;
use housing_compare::catalog::{SeedCatalog, SyntheticCatalog};
use housing_compare::query::{self, ComparisonSet, FilterOptions, SortOrder, SIMILAR_LIMIT};
use housing_compare::{format_price, Config, Corpus};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🏠 Housing Compare - rental listings across platforms");
    info!("=====================================================");

    let config = Config::from_env().context("Failed to load configuration")?;
    let seeds = SeedCatalog::new().as_slice().to_vec();
    let mut source = match config.rng_seed {
        Some(seed) => {
            info!("Using fixed RNG seed {}", seed);
            SyntheticCatalog::seeded(seeds, config.target_size, seed)
        }
        None => SyntheticCatalog::from_entropy(seeds, config.target_size),
    };
    let corpus = Corpus::build(&mut source).context("Failed to build property catalog")?;

    // Demo search: furnished homes in Bangalore with 2+ bedrooms
    let options = FilterOptions::new().location("bangalore").beds(2).furnished(true);
    let found = query::sort(&corpus.search(&options), SortOrder::PriceLowToHigh);

    for (i, property) in found.iter().enumerate() {
        let Some(best) = query::best_price(property) else {
            continue;
        };
        println!("{}. {} ({} on {})", i + 1, property.title, format_price(best.price), best.source);
        println!(
            "   {}, {} | {} bed, {} bath, {} sqft",
            property.location, property.city, property.beds, property.baths, property.sqft
        );
        let others: Vec<String> = property
            .price_by_source
            .others(&best)
            .map(|(source, price)| format!("{} {}", source, format_price(price)))
            .collect();
        if !others.is_empty() {
            println!("   Also on: {}", others.join(", "));
        }
        println!();
    }

    // Compare the three cheapest hits side by side
    let mut selection = ComparisonSet::new();
    for property in found.iter().take(3) {
        selection.select(property.id);
    }
    for property in selection.resolve(&corpus) {
        let similar = query::similar(&corpus, property, SIMILAR_LIMIT);
        info!(
            "#{} {:?} {:?}, {} similar listings",
            property.id,
            property.property_type,
            property.condition,
            similar.len()
        );
    }

    if let Some(path) = &config.export_path {
        let json = serde_json::to_string_pretty(corpus.as_slice())?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("💾 Saved {} properties to {}", corpus.len(), path.display());
    }

    Ok(())
}
