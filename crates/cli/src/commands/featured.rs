//! Page through the featured-listing strip.

use std::path::PathBuf;

use nifty_pets_storefront::catalog::Pager;
use nifty_pets_storefront::config::StorefrontConfig;

use super::{CommandError, load_feed};

/// Run the `featured` command.
#[allow(clippy::print_stdout)]
pub fn run(feed: Option<PathBuf>, page: usize) -> Result<(), CommandError> {
    let config = StorefrontConfig::from_env()?;
    let loaded = load_feed(feed, &config)?;

    let featured: Vec<_> = loaded
        .records
        .iter()
        .take(config.featured_limit)
        .collect();
    let mut pager = Pager::new(featured.len(), config.featured_page_size);
    // Walk forward to the requested page; next() clamps at the last one.
    for _ in 0..page {
        if !pager.next() {
            break;
        }
    }

    println!(
        "Featured pets - page {} of {}",
        pager.page_index() + 1,
        pager.max_page() + 1
    );
    for record in pager.slice(&featured) {
        println!("  {:<12} {:<20} {}", record.id, record.breed, record.name);
    }
    println!(
        "prev: {}  next: {}",
        if pager.at_start() { "-" } else { "available" },
        if pager.at_end() { "-" } else { "available" },
    );
    Ok(())
}
