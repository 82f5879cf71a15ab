//! Checkout validation and order creation.
//!
//! A checkout either produces a complete, immutable [`Order`] and clears
//! the cart, or changes nothing: validation runs before any state is
//! touched, and every field rule runs independently so the form can show
//! all problems at once.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use nifty_pets_core::{Email, OrderId, Phone, Price};

use crate::cart::{CartEngine, CartLine};
use crate::error::StorefrontError;
use crate::events::UiEvent;
use crate::session::{Session, SessionError, session_keys};

/// Raw checkout form input, exactly as entered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Validated customer fields for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
}

/// An immutable record of a completed checkout.
///
/// Created only by [`OrderProcessor::checkout`]; never mutated afterwards.
/// Only the most recent order is retained in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Confirmation reference for this order.
    pub id: OrderId,
    /// Who placed the order.
    pub customer: CustomerInfo,
    /// Snapshot of the cart lines at checkout time.
    #[serde(rename = "items")]
    pub lines: Vec<CartLine>,
    /// Order total at checkout time.
    pub total: Price,
    /// When the order was placed (UTC).
    #[serde(rename = "date")]
    pub placed_at: DateTime<Utc>,
}

/// Field-level validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// The message for `field`, if that field failed validation.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether every field passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate `(field, message)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Reasons a checkout is rejected. Neither mutates any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Checkout requires a non-empty cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// One or more form fields failed validation.
    #[error("checkout form is invalid")]
    InvalidFields(FieldErrors),
}

/// Validate a checkout form.
///
/// All four rules run independently (no short-circuiting) so every broken
/// field gets its message.
///
/// # Errors
///
/// Returns the per-field messages when any rule fails.
pub fn validate(form: &CheckoutForm) -> Result<CustomerInfo, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.insert("name", "Please enter your name");
    }

    let email_input = form.email.trim();
    let email = if email_input.is_empty() {
        errors.insert("email", "Please enter your email");
        None
    } else {
        match Email::parse(email_input) {
            Ok(email) => Some(email),
            Err(_) => {
                errors.insert("email", "Please enter a valid email");
                None
            }
        }
    };

    let phone_input = form.phone.trim();
    let phone = if phone_input.is_empty() {
        errors.insert("phone", "Please enter your phone number");
        None
    } else {
        match Phone::parse(phone_input) {
            Ok(phone) => Some(phone),
            Err(_) => {
                errors.insert("phone", "Please enter a valid phone number");
                None
            }
        }
    };

    let address = form.address.trim();
    if address.is_empty() {
        errors.insert("address", "Please enter your address");
    }

    match (email, phone) {
        (Some(email), Some(phone)) if errors.is_empty() => Ok(CustomerInfo {
            name: name.to_owned(),
            email,
            phone,
            address: address.to_owned(),
        }),
        _ => Err(errors),
    }
}

/// Converts a validated cart snapshot into the session's last order.
#[derive(Debug)]
pub struct OrderProcessor {
    session: Session,
}

impl OrderProcessor {
    /// Create a processor writing through the given session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Run a checkout: validate, snapshot the cart into an [`Order`],
    /// persist it as the last order, and clear the cart.
    ///
    /// Atomic from the caller's perspective: an empty cart or a validation
    /// failure changes nothing.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when the cart has no lines.
    /// - [`CheckoutError::InvalidFields`] with per-field messages.
    /// - [`SessionError`] if persisting the order or cleared cart fails.
    #[instrument(skip(self, cart, form))]
    pub fn checkout(
        &self,
        cart: &mut CartEngine,
        form: &CheckoutForm,
    ) -> Result<(Order, Vec<UiEvent>), StorefrontError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart.into());
        }

        let customer = validate(form).map_err(CheckoutError::InvalidFields)?;

        let order = Order {
            id: OrderId::new(),
            customer,
            lines: cart.lines().to_vec(),
            total: cart.total(),
            placed_at: Utc::now(),
        };

        self.session.insert(session_keys::LAST_ORDER, &order)?;
        cart.clear()?;

        tracing::debug!(order_id = %order.id, total = %order.total, "order placed");
        Ok((
            order,
            vec![
                UiEvent::CartUpdated { count: 0 },
                UiEvent::toast("Thank you for your purchase! Your order has been placed."),
            ],
        ))
    }

    /// The most recently placed order, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the stored payload cannot be decoded.
    pub fn last_order(&self) -> Result<Option<Order>, SessionError> {
        self.session.get(session_keys::LAST_ORDER)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Jamie Doe".to_owned(),
            email: "jamie@example.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            address: "1 Main Street".to_owned(),
        }
    }

    #[test]
    fn valid_form_produces_customer_info() {
        let customer = validate(&valid_form()).unwrap();
        assert_eq!(customer.name, "Jamie Doe");
        assert_eq!(customer.email.as_str(), "jamie@example.com");
    }

    #[test]
    fn all_rules_run_independently() {
        let form = CheckoutForm {
            name: String::new(),
            email: "bad".to_owned(),
            phone: String::new(),
            address: "  ".to_owned(),
        };

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some("Please enter your name"));
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("phone"), Some("Please enter your phone number"));
        assert_eq!(errors.get("address"), Some("Please enter your address"));
    }

    #[test]
    fn empty_name_and_bad_email_is_exactly_two_errors() {
        let mut form = valid_form();
        form.name = String::new();
        form.email = "bad".to_owned();

        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.get("name").is_some());
        assert_eq!(errors.get("email"), Some("Please enter a valid email"));
        assert_eq!(errors.get("phone"), None);
    }

    #[test]
    fn short_phone_gets_the_validity_message() {
        let mut form = valid_form();
        form.phone = "555-1234".to_owned();

        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.get("phone"),
            Some("Please enter a valid phone number")
        );
    }

    #[test]
    fn fields_are_trimmed_before_use() {
        let mut form = valid_form();
        form.name = "  Jamie Doe  ".to_owned();
        form.email = " jamie@example.com ".to_owned();

        let customer = validate(&form).unwrap();
        assert_eq!(customer.name, "Jamie Doe");
        assert_eq!(customer.email.as_str(), "jamie@example.com");
    }
}
