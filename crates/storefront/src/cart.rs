//! Shopping cart engine.
//!
//! The cart is an ordered list of lines keyed by `(id, kind)`. The engine
//! owns the in-memory copy, writes through to the session store on every
//! mutation, and recomputes counts and totals from the lines on every read
//! so derived values can never drift.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use nifty_pets_core::{ItemKind, PetId, Price};

use crate::events::UiEvent;
use crate::session::{Session, SessionError, session_keys};

/// One priced, quantified entry in the cart.
///
/// At most one line exists per `(id, kind)` pair; repeat adds increment
/// `quantity` instead of appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Listing identifier this line refers to.
    pub id: PetId,
    /// Display name at the time of adding.
    pub name: String,
    /// Unit price at the time of adding.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Opaque image reference for the cart panel.
    pub image: String,
    /// Number of units; always at least 1 while the line exists.
    pub quantity: u32,
    /// Whether this line is a product or a for-sale pet.
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl CartLine {
    /// Price for the whole line (`unit_price` × `quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }

    fn matches(&self, id: &PetId, kind: ItemKind) -> bool {
        self.id == *id && self.kind == kind
    }
}

/// The cart engine: in-memory lines plus a write-through session handle.
#[derive(Debug)]
pub struct CartEngine {
    session: Session,
    lines: Vec<CartLine>,
}

impl CartEngine {
    /// Hydrate the cart from the session.
    ///
    /// A missing payload yields an empty cart; an unreadable payload is
    /// discarded with a warning rather than failing session start.
    #[must_use]
    pub fn load(session: Session) -> Self {
        let lines = match session.get::<Vec<CartLine>>(session_keys::PET_CART) {
            Ok(Some(lines)) => lines,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("discarding unreadable cart payload: {e}");
                Vec::new()
            }
        };
        Self { session, lines }
    }

    /// Add one unit of an item to the cart.
    ///
    /// Increments the quantity of an existing `(id, kind)` line, or appends
    /// a new line with quantity 1.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the cart cannot be persisted.
    #[instrument(skip(self, name, unit_price, image))]
    pub fn add_item(
        &mut self,
        name: &str,
        unit_price: Price,
        image: &str,
        id: PetId,
        kind: ItemKind,
    ) -> Result<Vec<UiEvent>, SessionError> {
        if let Some(line) = self.lines.iter_mut().find(|l| l.matches(&id, kind)) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine {
                id,
                name: name.to_owned(),
                unit_price,
                image: image.to_owned(),
                quantity: 1,
                kind,
            });
        }

        self.persist()?;
        Ok(vec![
            UiEvent::CartUpdated {
                count: self.item_count(),
            },
            UiEvent::toast(format!("{name} has been added to your cart!")),
        ])
    }

    /// Adjust a line's quantity by `delta` (negative to decrement).
    ///
    /// If the resulting quantity is zero or below, the line is removed. A
    /// missing line leaves the cart contents untouched, but the cart is
    /// persisted and a refresh event emitted either way.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn change_quantity(
        &mut self,
        id: &PetId,
        kind: ItemKind,
        delta: i32,
    ) -> Result<Vec<UiEvent>, SessionError> {
        if let Some(pos) = self.lines.iter().position(|l| l.matches(id, kind)) {
            let new_quantity = self
                .lines
                .get(pos)
                .map_or(0, |l| i64::from(l.quantity) + i64::from(delta));
            if new_quantity <= 0 {
                self.lines.remove(pos);
            } else if let Some(line) = self.lines.get_mut(pos) {
                line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            }
        }

        self.persist()?;
        Ok(vec![UiEvent::CartUpdated {
            count: self.item_count(),
        }])
    }

    /// Remove a line entirely, regardless of quantity.
    ///
    /// A no-op on contents when no line matches; persists and emits a
    /// refresh event either way.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, id: &PetId, kind: ItemKind) -> Result<Vec<UiEvent>, SessionError> {
        self.lines.retain(|l| !l.matches(id, kind));
        self.persist()?;
        Ok(vec![UiEvent::CartUpdated {
            count: self.item_count(),
        }])
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Cart total, recomputed from the lines on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empty the cart and persist the empty state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the cart cannot be persisted.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.lines.clear();
        self.persist()
    }

    /// The current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn persist(&self) -> Result<(), SessionError> {
        self.session.insert(session_keys::PET_CART, &self.lines)
    }
}
