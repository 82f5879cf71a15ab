//! Unified error handling for the storefront engine.
//!
//! Provides a unified `StorefrontError` that classifies failures for the
//! display layer: user-input problems become form or toast messages and
//! mutate nothing, data-availability problems degrade the affected view,
//! and nothing is fatal to the session.

use thiserror::Error;

use crate::adoption::ApplicationError;
use crate::catalog::FeedError;
use crate::config::ConfigError;
use crate::donation::DonationError;
use crate::events::UiEvent;
use crate::orders::CheckoutError;
use crate::session::SessionError;

/// Engine-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Session persistence failed.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Checkout was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// An adoption application was rejected.
    #[error("Adoption error: {0}")]
    Application(#[from] ApplicationError),

    /// A donation confirmation was rejected.
    #[error("Donation error: {0}")]
    Donation(#[from] DonationError),

    /// The listing feed could not be used.
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl StorefrontError {
    /// Whether this is a user-input problem the user can fix and retry.
    ///
    /// User errors are guaranteed to have mutated nothing.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Checkout(_) | Self::Application(_) | Self::Donation(_)
        )
    }

    /// The message to surface to the user.
    ///
    /// User-input errors carry their own wording; internal failures get a
    /// generic message so implementation details stay out of the page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Checkout(err) => err.to_string(),
            Self::Application(err) => err.to_string(),
            Self::Donation(err) => err.to_string(),
            Self::Feed(_) => "Pet listings are unavailable right now.".to_owned(),
            Self::Session(_) | Self::Config(_) => "Something went wrong. Please try again.".to_owned(),
        }
    }

    /// Render this error as an error toast for the display layer.
    #[must_use]
    pub fn to_toast(&self) -> UiEvent {
        if !self.is_user_error() {
            tracing::error!(error = %self, "storefront error");
        }
        UiEvent::error_toast(self.user_message())
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
