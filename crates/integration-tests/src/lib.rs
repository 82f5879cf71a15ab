//! Integration tests for Nifty Pets.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p nifty-pets-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_checkout` - Cart mutations through checkout and the persisted
//!   session layout
//! - `adoption_session` - Adoption tracking across engine reloads
//! - `catalog_pipeline` - Feed validation through filtering and sorting
//!
//! Everything runs against in-memory sessions; no server or network is
//! involved.

#![cfg_attr(not(test), forbid(unsafe_code))]

use nifty_pets_storefront::catalog::RawPetRecord;
use nifty_pets_storefront::orders::CheckoutForm;

/// A raw feed record with the given id and price text.
#[must_use]
pub fn raw_record(id: &str, name: &str, age: &str, price: Option<&str>) -> RawPetRecord {
    RawPetRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        breed: "Mixed".to_owned(),
        age: age.to_owned(),
        description: format!("{name} is looking for a home."),
        image: format!("images/{id}.jpg"),
        health: "Vaccinated".to_owned(),
        species: None,
        price: price.map(str::to_owned),
    }
}

/// A checkout form that passes every field rule.
#[must_use]
pub fn valid_checkout_form() -> CheckoutForm {
    CheckoutForm {
        name: "Jamie Doe".to_owned(),
        email: "jamie@example.com".to_owned(),
        phone: "(555) 123-4567".to_owned(),
        address: "1 Main Street, Springfield".to_owned(),
    }
}
