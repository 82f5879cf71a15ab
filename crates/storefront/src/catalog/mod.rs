//! Listing catalog: filter and sort pipeline.
//!
//! Pure functions from a slice of [`ListingRecord`]s and a
//! [`FilterConfig`] to the visible, ordered subset. Nothing here touches
//! the session; the display layer re-runs the pipeline whenever a filter
//! control changes.

mod feed;
mod pager;

pub use feed::{FeedError, LoadedFeed, RawPetRecord, age_category_from_text, load_records};
pub use pager::Pager;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use nifty_pets_core::{AgeCategory, PetId, Price};

/// A displayable pet listing, validated once at the feed boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: PetId,
    pub name: String,
    pub breed: String,
    /// Species ("dog", "cat", ...); the feed defaults to "dog".
    #[serde(rename = "type")]
    pub species: String,
    /// Free-text age as shown on the card.
    pub age_text: String,
    /// Coarse bucket derived from `age_text`.
    pub age_category: AgeCategory,
    pub description: String,
    pub image: String,
    pub health: String,
    /// Present only for for-sale listings.
    pub price: Option<Price>,
}

impl ListingRecord {
    /// The price used by filtering and sorting; unpriced listings count
    /// as zero.
    #[must_use]
    pub fn price_value(&self) -> Decimal {
        self.price.map_or(Decimal::ZERO, |p| p.amount())
    }
}

/// Price bands offered by the price filter control.
///
/// Bounds are `(lower, upper]` except the first band, which includes its
/// lower bound so free and unpriced listings match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBand {
    /// `[0, 100]`
    UpTo100,
    /// `(100, 500]`
    To500,
    /// `(500, 1000]`
    To1000,
    /// `(1000, 1500]`
    To1500,
    /// `(1500, ∞)`
    Over1500,
}

impl PriceBand {
    /// Whether `price` falls inside this band.
    #[must_use]
    pub fn contains(self, price: Decimal) -> bool {
        let (lower, upper) = match self {
            Self::UpTo100 => return price >= Decimal::ZERO && price <= Decimal::from(100),
            Self::To500 => (100, 500),
            Self::To1000 => (500, 1000),
            Self::To1500 => (1000, 1500),
            Self::Over1500 => return price > Decimal::from(1500),
        };
        price > Decimal::from(lower) && price <= Decimal::from(upper)
    }
}

impl std::fmt::Display for PriceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UpTo100 => write!(f, "0-100"),
            Self::To500 => write!(f, "100-500"),
            Self::To1000 => write!(f, "500-1000"),
            Self::To1500 => write!(f, "1000-1500"),
            Self::Over1500 => write!(f, "1500+"),
        }
    }
}

impl std::str::FromStr for PriceBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0-100" => Ok(Self::UpTo100),
            "100-500" => Ok(Self::To500),
            "500-1000" => Ok(Self::To1000),
            "1000-1500" => Ok(Self::To1500),
            "1500+" => Ok(Self::Over1500),
            _ => Err(format!("invalid price band: {s}")),
        }
    }
}

/// The state of the filter controls.
///
/// `None` / an empty search means that control is on "all" and always
/// matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub species: Option<String>,
    pub age: Option<AgeCategory>,
    pub price_band: Option<PriceBand>,
    pub search: String,
}

impl FilterConfig {
    /// Whether a record passes every active filter.
    ///
    /// Predicates are checked cheapest-first, but a record is visible iff
    /// all of them match, so the order never changes the result.
    #[must_use]
    pub fn matches(&self, record: &ListingRecord) -> bool {
        if let Some(species) = &self.species {
            if record.species != *species {
                return false;
            }
        }

        if let Some(age) = self.age {
            if record.age_category != age {
                return false;
            }
        }

        if let Some(band) = self.price_band {
            if !band.contains(record.price_value()) {
                return false;
            }
        }

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !record.name.to_lowercase().contains(&needle)
                && !record.breed.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        true
    }

    /// Reset every control to "all" and empty the search.
    ///
    /// Restores full visibility; the sort order is a separate control and
    /// is not touched.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sort orders offered by the sort control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive name, ascending.
    Name,
    /// Price ascending (unpriced listings first, as zero).
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Age bucket, youngest first.
    Age,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "age" => Ok(Self::Age),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// The visible subset of a listing page after filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    /// Visible records in display order.
    pub records: Vec<&'a ListingRecord>,
}

impl CatalogView<'_> {
    /// Whether the consumer should show the empty-state affordance
    /// instead of the listing grid.
    #[must_use]
    pub fn empty_state(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of visible records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records are visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The records passing every active filter, in their original order.
#[must_use]
pub fn visible<'a>(records: &'a [ListingRecord], config: &FilterConfig) -> Vec<&'a ListingRecord> {
    records.iter().filter(|r| config.matches(r)).collect()
}

/// Stable-sort visible records by one key.
pub fn sort_records(records: &mut [&ListingRecord], key: SortKey) {
    match key {
        SortKey::Name => records.sort_by_key(|r| r.name.to_lowercase()),
        SortKey::PriceLow => records.sort_by(|a, b| a.price_value().cmp(&b.price_value())),
        SortKey::PriceHigh => records.sort_by(|a, b| b.price_value().cmp(&a.price_value())),
        SortKey::Age => records.sort_by_key(|r| r.age_category.rank()),
    }
}

/// Run the full pipeline: filter, then optionally sort.
///
/// `sort: None` (an unrecognized sort selection) keeps the records in
/// their original order.
#[must_use]
pub fn browse<'a>(
    records: &'a [ListingRecord],
    config: &FilterConfig,
    sort: Option<SortKey>,
) -> CatalogView<'a> {
    let mut records = visible(records, config);
    if let Some(key) = sort {
        sort_records(&mut records, key);
    }
    CatalogView { records }
}
