//! Nifty Pets CLI - Storefront engine demo driver.
//!
//! A thin stand-in for the display layer: it loads a JSON pet feed,
//! runs the filter/sort pipeline, pages the featured strip, and walks a
//! cart through checkout, printing the engine's state and UI events.
//!
//! # Usage
//!
//! ```bash
//! # Filter and sort listings from a feed
//! nifty-pets listings --feed pets.json --species dog --sort price-low
//!
//! # Page through the featured strip
//! nifty-pets featured --feed pets.json --page 1
//!
//! # Walk a cart through checkout
//! nifty-pets demo --feed pets.json
//! ```
//!
//! # Commands
//!
//! - `listings` - Apply filters and a sort key to the feed
//! - `featured` - Show one page of the featured strip
//! - `demo` - Add listings to a cart and check out

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nifty-pets")]
#[command(author, version, about = "Nifty Pets storefront demo driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter and sort listings from the feed
    Listings {
        /// Path to the JSON pet feed (defaults to NIFTY_PETS_FEED)
        #[arg(short, long)]
        feed: Option<PathBuf>,

        /// Species to show ("all" for no filter)
        #[arg(long, default_value = "all")]
        species: String,

        /// Age category to show (puppy, young, adult, senior, unknown)
        #[arg(long, default_value = "all")]
        age: String,

        /// Price band (0-100, 100-500, 500-1000, 1000-1500, 1500+)
        #[arg(long, default_value = "all")]
        price: String,

        /// Search text matched against name and breed
        #[arg(long, default_value = "")]
        search: String,

        /// Sort key (name, price-low, price-high, age)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one page of the featured strip
    Featured {
        /// Path to the JSON pet feed (defaults to NIFTY_PETS_FEED)
        #[arg(short, long)]
        feed: Option<PathBuf>,

        /// Zero-based page to show
        #[arg(long, default_value_t = 0)]
        page: usize,
    },
    /// Walk a cart through checkout
    Demo {
        /// Path to the JSON pet feed (defaults to NIFTY_PETS_FEED)
        #[arg(short, long)]
        feed: Option<PathBuf>,
    },
}

fn main() {
    // Load .env if present, then initialize tracing
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Listings {
            feed,
            species,
            age,
            price,
            search,
            sort,
        } => commands::listings::run(feed, &species, &age, &price, search, sort.as_deref())?,
        Commands::Featured { feed, page } => commands::featured::run(feed, page)?,
        Commands::Demo { feed } => commands::demo::run(feed)?,
    }
    Ok(())
}
