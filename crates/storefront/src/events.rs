//! Notifications for the display layer.
//!
//! Engine operations never touch the page directly; they return a list of
//! [`UiEvent`]s describing what the display layer should refresh. This
//! keeps the state transitions pure and testable while the rendering
//! adapter stays a thin translation layer.

use nifty_pets_core::PetId;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A notification for the display layer, emitted by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The cart changed; badges and the cart panel should re-render.
    CartUpdated {
        /// Current total item count across all lines.
        count: u32,
    },

    /// Show a transient message to the user.
    Toast {
        message: String,
        level: ToastLevel,
    },

    /// A pet was adopted; every rendered instance of it must lock its
    /// adopt affordance (a pet can appear in several views at once).
    PetAdopted(PetId),
}

impl UiEvent {
    /// A success toast.
    #[must_use]
    pub fn toast(message: impl Into<String>) -> Self {
        Self::Toast {
            message: message.into(),
            level: ToastLevel::Success,
        }
    }

    /// An error toast.
    #[must_use]
    pub fn error_toast(message: impl Into<String>) -> Self {
        Self::Toast {
            message: message.into(),
            level: ToastLevel::Error,
        }
    }
}
