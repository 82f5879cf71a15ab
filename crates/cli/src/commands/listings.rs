//! Filter and sort listings from the feed.

use std::path::PathBuf;

use nifty_pets_core::AgeCategory;
use nifty_pets_storefront::catalog::{FilterConfig, PriceBand, SortKey, browse};
use nifty_pets_storefront::config::StorefrontConfig;

use super::{CommandError, load_feed};

/// Build a [`FilterConfig`] from the CLI's "all"-or-value flags.
fn filter_config(
    species: &str,
    age: &str,
    price: &str,
    search: String,
) -> Result<FilterConfig, CommandError> {
    let mut config = FilterConfig {
        search,
        ..FilterConfig::default()
    };

    if species != "all" {
        config.species = Some(species.to_owned());
    }
    if age != "all" {
        config.age = Some(
            age.parse::<AgeCategory>()
                .map_err(CommandError::InvalidFilter)?,
        );
    }
    if price != "all" {
        config.price_band = Some(
            price
                .parse::<PriceBand>()
                .map_err(CommandError::InvalidFilter)?,
        );
    }
    Ok(config)
}

/// Run the `listings` command.
#[allow(clippy::print_stdout)]
pub fn run(
    feed: Option<PathBuf>,
    species: &str,
    age: &str,
    price: &str,
    search: String,
    sort: Option<&str>,
) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let loaded = load_feed(feed, &config)?;

    let filter = filter_config(species, age, price, search)?;
    // An unrecognized sort selection keeps the feed order.
    let sort_key = sort.and_then(|s| match s.parse::<SortKey>() {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!("{e}; keeping feed order");
            None
        }
    });

    let view = browse(&loaded.records, &filter, sort_key);
    if view.empty_state() {
        println!("No pets match the current filters.");
        return Ok(());
    }

    for record in &view.records {
        let price = record
            .price
            .map_or_else(|| "adopt".to_owned(), |p| format!("${p}"));
        println!(
            "{:<12} {:<10} {:<20} {:<8} {:<8} {}",
            record.id, record.species, record.breed, record.age_category, price, record.name
        );
    }
    println!("{} of {} listings shown", view.len(), loaded.records.len());
    Ok(())
}
