//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("invalid price: {0:?}")]
    Invalid(String),
    /// Prices are never negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative amount of money in the store currency.
///
/// Backed by [`rust_decimal::Decimal`] so cart totals never accumulate
/// floating-point drift. Feed prices arrive as display text (`"$1,200"`);
/// [`Price::parse`] strips the currency symbol and thousands separators
/// before parsing, and rejects anything that does not parse as a decimal
/// instead of letting a garbage value reach arithmetic.
///
/// ## Examples
///
/// ```
/// use nifty_pets_core::Price;
///
/// let price = Price::parse("$1,200.50").unwrap();
/// assert_eq!(price.display(), "1200.50");
///
/// assert!(Price::parse("free").is_err());
/// assert!(Price::parse("-5").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] for amounts below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Parse a price from display text.
    ///
    /// Accepts an optional leading `$` and embedded thousands separators,
    /// e.g. `"$1,200"`, `"350.00"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, is not a decimal number, or
    /// is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let normalized = s.trim().trim_start_matches('$').replace(',', "");
        if normalized.is_empty() {
            return Err(PriceError::Empty);
        }
        let amount = Decimal::from_str(&normalized)
            .map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with two decimal places (e.g. `"19.99"`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{:.2}", self.0)
    }

    /// Whether this price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
