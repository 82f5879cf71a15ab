//! Standalone donation selection.
//!
//! The donate page tracks one selected amount (preset button or custom
//! entry) in memory only. It is deliberately disconnected from the cart
//! and order processor and is not persisted to the session.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::events::UiEvent;

/// Rejection for a donation confirmation. Nothing is mutated.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DonationError {
    /// No amount selected, or the selection is zero/negative.
    #[error("Please select or enter a valid donation amount.")]
    InvalidAmount,
}

/// In-memory donation amount selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationPicker {
    selected: Option<Decimal>,
}

impl DonationPicker {
    /// Create a picker with nothing selected.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Select one of the preset amounts, replacing any custom entry.
    pub fn select_preset(&mut self, amount: Decimal) {
        self.selected = Some(amount);
    }

    /// Take a custom amount from free text. Empty or unparseable input
    /// clears the selection.
    pub fn set_custom(&mut self, text: &str) {
        self.selected = Decimal::from_str(text.trim()).ok();
    }

    /// The currently selected amount, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Decimal> {
        self.selected
    }

    /// Confirm the donation: a valid positive amount thanks the donor and
    /// resets the picker.
    ///
    /// # Errors
    ///
    /// Returns [`DonationError::InvalidAmount`] when nothing is selected
    /// or the amount is zero or below; the selection is left as-is so the
    /// user can correct it.
    pub fn confirm(&mut self) -> Result<Vec<UiEvent>, DonationError> {
        let amount = self
            .selected
            .filter(|a| a.is_sign_positive() && !a.is_zero())
            .ok_or(DonationError::InvalidAmount)?;

        self.selected = None;
        Ok(vec![UiEvent::toast(format!(
            "Thank you for your ${amount} donation!"
        ))])
    }
}
