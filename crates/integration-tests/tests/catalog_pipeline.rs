//! Feed-to-view pipeline tests.
//!
//! Raw feed records go through boundary validation once, then the pure
//! filter/sort pipeline computes what a listing page shows.

#![allow(clippy::unwrap_used)]

use nifty_pets_core::AgeCategory;
use nifty_pets_integration_tests::raw_record;
use nifty_pets_storefront::catalog::{
    FilterConfig, Pager, PriceBand, SortKey, browse, load_records,
};

fn feed() -> Vec<nifty_pets_storefront::catalog::ListingRecord> {
    let mut kitten = raw_record("c1", "Whiskers", "12 weeks", Some("100"));
    kitten.species = Some("cat".to_owned());
    kitten.breed = "Siamese".to_owned();

    let raw = vec![
        raw_record("d1", "Rex", "2 years", Some("300")),
        kitten,
        raw_record("d2", "Buddy", "6 years", Some("$1,200")),
        raw_record("d3", "Shadow", "9 years", None),
    ];
    let loaded = load_records(raw);
    assert_eq!(loaded.dropped, 0);
    loaded.records
}

// ============================================================================
// Boundary validation
// ============================================================================

#[test]
fn feed_validation_maps_ages_and_prices() {
    let records = feed();

    assert_eq!(records[0].age_category, AgeCategory::Young);
    assert_eq!(records[1].age_category, AgeCategory::Puppy);
    assert_eq!(records[2].age_category, AgeCategory::Adult);
    assert_eq!(records[3].age_category, AgeCategory::Senior);

    assert_eq!(records[2].price.unwrap().display(), "1200.00");
    assert_eq!(records[3].price, None);
    assert_eq!(records[0].species, "dog");
    assert_eq!(records[1].species, "cat");
}

#[test]
fn invalid_feed_records_are_dropped_not_fatal() {
    let mut bad = raw_record("x1", "Mystery", "2 years", Some("priceless"));
    bad.breed = "Unknown".to_owned();

    let loaded = load_records(vec![raw_record("d1", "Rex", "2 years", Some("300")), bad]);
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.dropped, 1);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn filters_combine_with_and_semantics() {
    let records = feed();
    let config = FilterConfig {
        species: Some("dog".to_owned()),
        price_band: Some(PriceBand::To500),
        ..FilterConfig::default()
    };

    let view = browse(&records, &config, None);
    assert_eq!(view.len(), 1);
    assert_eq!(view.records[0].name, "Rex");
}

#[test]
fn boundary_price_100_lands_in_the_first_band() {
    let records = feed();
    let config = FilterConfig {
        price_band: Some(PriceBand::UpTo100),
        ..FilterConfig::default()
    };

    let view = browse(&records, &config, None);
    // Whiskers at exactly 100, plus the unpriced Shadow counting as 0.
    assert_eq!(view.len(), 2);
    assert!(view.records.iter().any(|r| r.name == "Whiskers"));
    assert!(view.records.iter().any(|r| r.name == "Shadow"));
}

#[test]
fn empty_result_signals_the_empty_state() {
    let records = feed();
    let config = FilterConfig {
        search: "dinosaur".to_owned(),
        ..FilterConfig::default()
    };

    let view = browse(&records, &config, None);
    assert!(view.empty_state());
}

#[test]
fn clearing_filters_restores_every_record() {
    let records = feed();
    let mut config = FilterConfig {
        species: Some("cat".to_owned()),
        age: Some(AgeCategory::Puppy),
        price_band: Some(PriceBand::UpTo100),
        search: "whisk".to_owned(),
    };
    assert_eq!(browse(&records, &config, None).len(), 1);

    config.clear();
    assert_eq!(browse(&records, &config, None).len(), records.len());
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn price_sorts_are_opposites_and_treat_unpriced_as_zero() {
    let records = feed();

    let low = browse(&records, &FilterConfig::default(), Some(SortKey::PriceLow));
    let names: Vec<&str> = low.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Shadow", "Whiskers", "Rex", "Buddy"]);

    let high = browse(&records, &FilterConfig::default(), Some(SortKey::PriceHigh));
    let names: Vec<&str> = high.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Buddy", "Rex", "Whiskers", "Shadow"]);
}

#[test]
fn age_sort_runs_youngest_to_oldest() {
    let records = feed();
    let view = browse(&records, &FilterConfig::default(), Some(SortKey::Age));
    let names: Vec<&str> = view.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Whiskers", "Rex", "Buddy", "Shadow"]);
}

#[test]
fn sorting_composes_with_filtering() {
    let records = feed();
    let config = FilterConfig {
        species: Some("dog".to_owned()),
        ..FilterConfig::default()
    };

    let view = browse(&records, &config, Some(SortKey::Name));
    let names: Vec<&str> = view.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Buddy", "Rex", "Shadow"]);
}

// ============================================================================
// Featured paging
// ============================================================================

#[test]
fn featured_strip_pages_the_first_records() {
    let records = feed();
    let featured: Vec<_> = records.iter().take(3).collect();
    let mut pager = Pager::new(featured.len(), 2);

    assert_eq!(pager.slice(&featured).len(), 2);
    assert!(pager.next());
    assert_eq!(pager.slice(&featured).len(), 1);
    assert!(pager.at_end());
    assert!(!pager.next());
}
