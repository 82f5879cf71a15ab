//! Adoption tracking and adoption applications.
//!
//! Adopted pets are tracked as a set of identifiers that only grows for
//! the lifetime of the session; the display layer uses membership to lock
//! the adopt affordance on every rendered instance of a pet.

use std::collections::HashSet;
use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::instrument;

use nifty_pets_core::{Email, PetId};

use crate::events::UiEvent;
use crate::session::{Session, SessionError, session_keys};

/// How an applicant chose a donation amount on the adoption form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonationChoice {
    /// One of the preset amounts.
    Preset(Decimal),
    /// Free-text custom amount.
    Custom(String),
}

impl DonationChoice {
    /// The chosen amount; an unparseable custom entry counts as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Preset(amount) => *amount,
            Self::Custom(text) => Decimal::from_str(text.trim()).unwrap_or_default(),
        }
    }
}

/// Raw adoption application input, exactly as entered.
#[derive(Debug, Clone, Default)]
pub struct AdoptionApplication {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Optional donation alongside the application. Informational only; it
    /// never reaches the cart or an order.
    pub donation: Option<DonationChoice>,
}

impl AdoptionApplication {
    /// Check the application's required fields.
    ///
    /// # Errors
    ///
    /// Returns a form-level error when a required field is blank or the
    /// email is malformed.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        let any_blank = [&self.name, &self.email, &self.phone, &self.address]
            .iter()
            .any(|field| field.trim().is_empty());
        if any_blank {
            return Err(ApplicationError::MissingFields);
        }

        if Email::parse(self.email.trim()).is_err() {
            return Err(ApplicationError::InvalidEmail);
        }

        Ok(())
    }

    /// The donation amount pledged with this application, defaulting to
    /// zero when none was chosen.
    #[must_use]
    pub fn donation_amount(&self) -> Decimal {
        self.donation
            .as_ref()
            .map(DonationChoice::amount)
            .unwrap_or_default()
    }
}

/// Reasons an adoption application is rejected. Nothing is mutated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ApplicationError {
    /// A required field was left blank.
    #[error("Please fill in all required fields.")]
    MissingFields,

    /// The email address is structurally invalid.
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Session-scoped record of which pets have been adopted.
#[derive(Debug)]
pub struct AdoptionTracker {
    session: Session,
    adopted: HashSet<PetId>,
}

impl AdoptionTracker {
    /// Hydrate the adopted set from the session.
    ///
    /// A missing payload yields an empty set; an unreadable payload is
    /// discarded with a warning rather than failing session start.
    #[must_use]
    pub fn load(session: Session) -> Self {
        let adopted = match session.get::<HashSet<PetId>>(session_keys::ADOPTED_PETS) {
            Ok(Some(adopted)) => adopted,
            Ok(None) => HashSet::new(),
            Err(e) => {
                tracing::warn!("discarding unreadable adopted-pets payload: {e}");
                HashSet::new()
            }
        };
        Self { session, adopted }
    }

    /// Record a pet as adopted. Idempotent: repeat calls change nothing.
    ///
    /// Always returns a [`UiEvent::PetAdopted`] so every rendered instance
    /// of the pet gets locked, even when the set already contained it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the set cannot be persisted.
    #[instrument(skip(self))]
    pub fn mark_adopted(&mut self, pet_id: &PetId) -> Result<Vec<UiEvent>, SessionError> {
        if self.adopted.insert(pet_id.clone()) {
            self.persist()?;
        }
        Ok(vec![UiEvent::PetAdopted(pet_id.clone())])
    }

    /// Whether a pet has been adopted this session.
    #[must_use]
    pub fn is_adopted(&self, pet_id: &PetId) -> bool {
        self.adopted.contains(pet_id)
    }

    /// Re-emit lock events for every adopted pet.
    ///
    /// Reconciliation for session (re)start: mutates nothing, just tells
    /// the display layer which affordances to lock again.
    #[must_use]
    pub fn restore_on_load(&self) -> Vec<UiEvent> {
        self.adopted
            .iter()
            .cloned()
            .map(UiEvent::PetAdopted)
            .collect()
    }

    /// Number of pets adopted this session.
    #[must_use]
    pub fn adopted_count(&self) -> usize {
        self.adopted.len()
    }

    /// Submit an adoption application for a pet.
    ///
    /// A validation failure mutates nothing. On success the pet is marked
    /// adopted and a thank-you toast is emitted ahead of the lock events.
    ///
    /// # Errors
    ///
    /// - [`ApplicationError`] when the form is incomplete or the email is
    ///   invalid.
    /// - [`SessionError`] if the adopted set cannot be persisted.
    #[instrument(skip(self, application))]
    pub fn submit_application(
        &mut self,
        pet_id: &PetId,
        application: &AdoptionApplication,
    ) -> Result<Vec<UiEvent>, crate::error::StorefrontError> {
        application.validate()?;

        let mut events = vec![UiEvent::toast(format!(
            "Thank you, {}! Your adoption application has been submitted.",
            application.name.trim()
        ))];
        events.extend(self.mark_adopted(pet_id)?);
        Ok(events)
    }

    fn persist(&self) -> Result<(), SessionError> {
        self.session
            .insert(session_keys::ADOPTED_PETS, &self.adopted)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn application() -> AdoptionApplication {
        AdoptionApplication {
            name: "Jamie Doe".to_owned(),
            email: "jamie@example.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            address: "1 Main Street".to_owned(),
            donation: None,
        }
    }

    #[test]
    fn mark_adopted_is_idempotent() {
        let mut tracker = AdoptionTracker::load(Session::new());
        let id = PetId::new("p1");

        tracker.mark_adopted(&id).unwrap();
        tracker.mark_adopted(&id).unwrap();

        assert!(tracker.is_adopted(&id));
        assert_eq!(tracker.adopted_count(), 1);
    }

    #[test]
    fn adoption_survives_engine_reload() {
        let session = Session::new();
        let mut tracker = AdoptionTracker::load(session.clone());
        tracker.mark_adopted(&PetId::new("p1")).unwrap();

        let rehydrated = AdoptionTracker::load(session);
        assert!(rehydrated.is_adopted(&PetId::new("p1")));
    }

    #[test]
    fn restore_on_load_reemits_without_mutating() {
        let mut tracker = AdoptionTracker::load(Session::new());
        tracker.mark_adopted(&PetId::new("p1")).unwrap();
        tracker.mark_adopted(&PetId::new("p2")).unwrap();

        let events = tracker.restore_on_load();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| matches!(e, UiEvent::PetAdopted(_))));
        assert_eq!(tracker.adopted_count(), 2);
    }

    #[test]
    fn application_requires_every_field() {
        let mut incomplete = application();
        incomplete.phone = String::new();

        assert_eq!(
            incomplete.validate(),
            Err(ApplicationError::MissingFields)
        );
    }

    #[test]
    fn application_checks_email_structure() {
        let mut bad_email = application();
        bad_email.email = "not-an-email".to_owned();

        assert_eq!(bad_email.validate(), Err(ApplicationError::InvalidEmail));
    }

    #[test]
    fn rejected_application_marks_nothing() {
        let mut tracker = AdoptionTracker::load(Session::new());
        let mut bad = application();
        bad.name = String::new();

        let result = tracker.submit_application(&PetId::new("p1"), &bad);
        assert!(result.is_err());
        assert!(!tracker.is_adopted(&PetId::new("p1")));
    }

    #[test]
    fn accepted_application_thanks_then_locks() {
        let mut tracker = AdoptionTracker::load(Session::new());
        let events = tracker
            .submit_application(&PetId::new("p1"), &application())
            .unwrap();

        assert!(matches!(events[0], UiEvent::Toast { .. }));
        assert_eq!(events[1], UiEvent::PetAdopted(PetId::new("p1")));
        assert!(tracker.is_adopted(&PetId::new("p1")));
    }

    #[test]
    fn unparseable_custom_donation_counts_as_zero() {
        let mut with_donation = application();
        with_donation.donation = Some(DonationChoice::Custom("lots".to_owned()));
        assert_eq!(with_donation.donation_amount(), Decimal::ZERO);

        with_donation.donation = Some(DonationChoice::Custom("25".to_owned()));
        assert_eq!(with_donation.donation_amount(), Decimal::from(25));
    }
}
