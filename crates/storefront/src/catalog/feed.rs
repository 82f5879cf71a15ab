//! Feed boundary validation.
//!
//! The pet feed arrives as loosely-typed records (string fields, optional
//! price and species). Each record is validated exactly once here into a
//! [`ListingRecord`]; downstream code never re-checks field shapes.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use nifty_pets_core::{AgeCategory, PetId, Price, PriceError};

use super::ListingRecord;

static YEARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*year").expect("hardcoded pattern is valid"));

/// A raw feed record, before boundary validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPetRecord {
    pub id: String,
    pub name: String,
    pub breed: String,
    /// Free-text age ("2 years", "6 months", ...).
    pub age: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub health: String,
    /// Species; absent or blank means "dog".
    #[serde(default, rename = "type")]
    pub species: Option<String>,
    /// Display-formatted price text; absent for adoption listings.
    #[serde(default)]
    pub price: Option<String>,
}

/// Reasons a feed record is rejected at the boundary.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The record has no usable identifier.
    #[error("feed record has an empty id")]
    MissingId,

    /// The record's price text does not parse as a non-negative decimal.
    #[error("feed record {id:?} has an invalid price: {source}")]
    InvalidPrice {
        id: String,
        #[source]
        source: PriceError,
    },
}

/// Map a listing's free-text age to a coarse bucket.
///
/// "month", "week", "puppy", or "kitten" anywhere in the text means a
/// baby animal; otherwise a leading number before "year" is bucketed by
/// [`AgeCategory::from_years`]; anything else is `Unknown`.
#[must_use]
pub fn age_category_from_text(text: &str) -> AgeCategory {
    let text = text.to_lowercase();
    if ["month", "week", "puppy", "kitten"]
        .iter()
        .any(|keyword| text.contains(keyword))
    {
        return AgeCategory::Puppy;
    }

    YEARS_RE
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map_or(AgeCategory::Unknown, AgeCategory::from_years)
}

impl TryFrom<RawPetRecord> for ListingRecord {
    type Error = FeedError;

    fn try_from(raw: RawPetRecord) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(FeedError::MissingId);
        }

        let price = raw
            .price
            .as_deref()
            .map(|text| {
                Price::parse(text).map_err(|source| FeedError::InvalidPrice {
                    id: raw.id.clone(),
                    source,
                })
            })
            .transpose()?;

        let species = raw
            .species
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "dog".to_owned());

        Ok(Self {
            id: PetId::new(raw.id),
            name: raw.name,
            breed: raw.breed,
            species,
            age_category: age_category_from_text(&raw.age),
            age_text: raw.age,
            description: raw.description,
            image: raw.image,
            health: raw.health,
            price,
        })
    }
}

/// A validated feed, plus how many records failed the boundary check.
#[derive(Debug, Clone)]
pub struct LoadedFeed {
    /// Records that passed validation, in feed order.
    pub records: Vec<ListingRecord>,
    /// Number of records dropped.
    pub dropped: usize,
}

/// Validate a whole feed, skipping (and warning about) invalid records.
///
/// A bad record never takes the page down; dependent displays simply show
/// the records that survived.
pub fn load_records(raw: impl IntoIterator<Item = RawPetRecord>) -> LoadedFeed {
    let mut records = Vec::new();
    let mut dropped = 0;

    for record in raw {
        match ListingRecord::try_from(record) {
            Ok(record) => records.push(record),
            Err(e) => {
                dropped += 1;
                tracing::warn!("skipping feed record: {e}");
            }
        }
    }

    if dropped > 0 {
        tracing::warn!(dropped, "feed contained invalid records");
    }
    LoadedFeed { records, dropped }
}
