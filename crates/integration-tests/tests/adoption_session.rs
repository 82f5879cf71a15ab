//! Adoption tracking across a session.
//!
//! The adopted set only grows within a session, and a fresh engine over
//! the same session must reconcile the locked state on load.

#![allow(clippy::unwrap_used)]

use nifty_pets_core::PetId;
use nifty_pets_storefront::adoption::{AdoptionApplication, AdoptionTracker, DonationChoice};
use nifty_pets_storefront::events::UiEvent;
use nifty_pets_storefront::session::{Session, session_keys};
use rust_decimal::Decimal;

fn application() -> AdoptionApplication {
    AdoptionApplication {
        name: "Jamie Doe".to_owned(),
        email: "jamie@example.com".to_owned(),
        phone: "(555) 123-4567".to_owned(),
        address: "1 Main Street".to_owned(),
        donation: Some(DonationChoice::Preset(Decimal::from(25))),
    }
}

#[test]
fn adopted_set_is_monotonic_and_idempotent() {
    let mut tracker = AdoptionTracker::load(Session::new());
    let id = PetId::new("p1");

    for _ in 0..3 {
        tracker.mark_adopted(&id).unwrap();
    }

    assert_eq!(tracker.adopted_count(), 1);
    assert!(tracker.is_adopted(&id));
}

#[test]
fn restore_on_load_replays_locks_for_a_fresh_engine() {
    let session = Session::new();
    {
        let mut tracker = AdoptionTracker::load(session.clone());
        tracker.mark_adopted(&PetId::new("p1")).unwrap();
        tracker.mark_adopted(&PetId::new("p2")).unwrap();
    }

    // Simulated page reload: a new tracker over the same session.
    let tracker = AdoptionTracker::load(session.clone());
    let events = tracker.restore_on_load();

    assert_eq!(events.len(), 2);
    assert!(events.contains(&UiEvent::PetAdopted(PetId::new("p1"))));
    assert!(events.contains(&UiEvent::PetAdopted(PetId::new("p2"))));

    // Reconciliation mutates nothing.
    let raw = session.raw(session_keys::ADOPTED_PETS).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 2);
}

#[test]
fn persisted_layout_is_an_array_of_id_strings() {
    let session = Session::new();
    let mut tracker = AdoptionTracker::load(session.clone());
    tracker.mark_adopted(&PetId::new("p7")).unwrap();

    let raw = session.raw(session_keys::ADOPTED_PETS).unwrap();
    let ids = raw.as_array().unwrap();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0], "p7");
}

#[test]
fn application_flow_marks_the_pet_adopted() {
    let session = Session::new();
    let mut tracker = AdoptionTracker::load(session.clone());

    let events = tracker
        .submit_application(&PetId::new("p1"), &application())
        .unwrap();

    assert!(matches!(events[0], UiEvent::Toast { .. }));
    assert!(tracker.is_adopted(&PetId::new("p1")));

    // The pet stays adopted for the rest of the session.
    let reloaded = AdoptionTracker::load(session);
    assert!(reloaded.is_adopted(&PetId::new("p1")));
}

#[test]
fn rejected_application_changes_nothing() {
    let session = Session::new();
    let mut tracker = AdoptionTracker::load(session.clone());

    let mut incomplete = application();
    incomplete.address = String::new();
    assert!(
        tracker
            .submit_application(&PetId::new("p1"), &incomplete)
            .is_err()
    );

    assert!(!tracker.is_adopted(&PetId::new("p1")));
    assert!(session.raw(session_keys::ADOPTED_PETS).is_none());
}

#[test]
fn application_donation_is_informational_only() {
    let app = application();
    assert_eq!(app.donation_amount(), Decimal::from(25));

    // The donation never creates cart or order state.
    let session = Session::new();
    let mut tracker = AdoptionTracker::load(session.clone());
    tracker
        .submit_application(&PetId::new("p1"), &app)
        .unwrap();
    assert!(session.raw(session_keys::PET_CART).is_none());
    assert!(session.raw(session_keys::LAST_ORDER).is_none());
}
