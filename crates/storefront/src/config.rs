//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NIFTY_PETS_FEED` - Path to the JSON pet feed (CLI default)
//! - `NIFTY_PETS_FEATURED_LIMIT` - How many listings the featured strip
//!   shows in total (default: 6)
//! - `NIFTY_PETS_FEATURED_PAGE_SIZE` - Listings per featured page
//!   (default: 3, must be at least 1)

use std::path::PathBuf;

use thiserror::Error;

/// Default number of listings in the featured strip.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Default number of listings per featured page.
pub const DEFAULT_FEATURED_PAGE_SIZE: usize = 3;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Path to the JSON pet feed, when configured.
    pub feed_path: Option<PathBuf>,
    /// How many listings the featured strip shows in total.
    pub featured_limit: usize,
    /// Listings per featured page.
    pub featured_page_size: usize,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a variable is present
    /// but does not parse, or when the page size is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        let feed_path = std::env::var("NIFTY_PETS_FEED").ok().map(PathBuf::from);
        let featured_limit = parse_count(
            "NIFTY_PETS_FEATURED_LIMIT",
            std::env::var("NIFTY_PETS_FEATURED_LIMIT").ok(),
            DEFAULT_FEATURED_LIMIT,
        )?;
        let featured_page_size = parse_count(
            "NIFTY_PETS_FEATURED_PAGE_SIZE",
            std::env::var("NIFTY_PETS_FEATURED_PAGE_SIZE").ok(),
            DEFAULT_FEATURED_PAGE_SIZE,
        )?;

        if featured_page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "NIFTY_PETS_FEATURED_PAGE_SIZE".to_owned(),
                "must be at least 1".to_owned(),
            ));
        }

        Ok(Self {
            feed_path,
            featured_limit,
            featured_page_size,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            feed_path: None,
            featured_limit: DEFAULT_FEATURED_LIMIT,
            featured_page_size: DEFAULT_FEATURED_PAGE_SIZE,
        }
    }
}

fn parse_count(name: &str, value: Option<String>, default: usize) -> Result<usize, ConfigError> {
    value.map_or(Ok(default), |raw| {
        raw.parse().map_err(|_| {
            ConfigError::InvalidEnvVar(name.to_owned(), format!("expected a number, got {raw:?}"))
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(parse_count("X", None, 6).unwrap(), 6);
    }

    #[test]
    fn test_present_value_is_parsed() {
        assert_eq!(parse_count("X", Some("9".to_owned()), 6).unwrap(), 9);
    }

    #[test]
    fn test_garbage_value_is_an_error() {
        assert!(matches!(
            parse_count("X", Some("many".to_owned()), 6),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.featured_limit, 6);
        assert_eq!(config.featured_page_size, 3);
        assert_eq!(config.feed_path, None);
    }
}
