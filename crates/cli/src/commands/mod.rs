//! CLI command implementations.

pub mod demo;
pub mod featured;
pub mod listings;

use std::path::PathBuf;

use thiserror::Error;

use nifty_pets_storefront::catalog::{LoadedFeed, RawPetRecord, load_records};
use nifty_pets_storefront::config::StorefrontConfig;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No feed path given and `NIFTY_PETS_FEED` is unset.
    #[error("no feed path: pass --feed or set NIFTY_PETS_FEED")]
    MissingFeedPath,

    /// The feed file could not be read.
    #[error("could not read feed {path}: {source}")]
    FeedRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The feed file is not a JSON array of pet records.
    #[error("could not parse feed {path}: {source}")]
    FeedParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A filter flag has a value the storefront does not understand.
    #[error("invalid filter value: {0}")]
    InvalidFilter(String),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] nifty_pets_storefront::config::ConfigError),

    /// The storefront engine rejected an operation.
    #[error(transparent)]
    Storefront(#[from] nifty_pets_storefront::error::StorefrontError),

    /// A session-storage operation failed.
    #[error(transparent)]
    Session(#[from] nifty_pets_storefront::session::SessionError),
}

/// Resolve the feed path from the flag or configuration, then load and
/// validate the feed.
///
/// # Errors
///
/// Returns an error when no path is configured, or when the file cannot
/// be read or parsed as a JSON array of records.
pub fn load_feed(
    flag: Option<PathBuf>,
    config: &StorefrontConfig,
) -> Result<LoadedFeed, CommandError> {
    let path = flag
        .or_else(|| config.feed_path.clone())
        .ok_or(CommandError::MissingFeedPath)?;
    let display = path.display().to_string();

    let text = std::fs::read_to_string(&path).map_err(|source| CommandError::FeedRead {
        path: display.clone(),
        source,
    })?;
    let raw: Vec<RawPetRecord> =
        serde_json::from_str(&text).map_err(|source| CommandError::FeedParse {
            path: display,
            source,
        })?;

    Ok(load_records(raw))
}
