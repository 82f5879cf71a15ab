//! Storefront state container.
//!
//! One [`Storefront`] per browsing session: it owns the session handle,
//! the engines, and the loaded catalog, and is injected into the display
//! layer. Constructing it hydrates cart and adopted set from the session;
//! dropping it at session end tears everything down.

use crate::adoption::AdoptionTracker;
use crate::cart::CartEngine;
use crate::catalog::{CatalogView, FilterConfig, ListingRecord, SortKey};
use crate::donation::DonationPicker;
use crate::error::StorefrontError;
use crate::events::UiEvent;
use crate::orders::{CheckoutForm, Order, OrderProcessor};
use crate::session::{Session, SessionError};

/// All session-scoped storefront state, bundled for the display layer.
#[derive(Debug)]
pub struct Storefront {
    session: Session,
    cart: CartEngine,
    adoption: AdoptionTracker,
    donation: DonationPicker,
    orders: OrderProcessor,
    catalog: Vec<ListingRecord>,
}

impl Storefront {
    /// Build the storefront for a session, hydrating persisted state.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let cart = CartEngine::load(session.clone());
        let adoption = AdoptionTracker::load(session.clone());
        let orders = OrderProcessor::new(session.clone());
        Self {
            session,
            cart,
            adoption,
            donation: DonationPicker::new(),
            orders,
            catalog: Vec::new(),
        }
    }

    /// Install the listing records delivered by the feed.
    ///
    /// The feed is fetched once by an external collaborator; afterwards
    /// the storefront operates purely on this snapshot.
    pub fn set_catalog(&mut self, records: Vec<ListingRecord>) {
        self.catalog = records;
    }

    /// The loaded listing records.
    #[must_use]
    pub fn catalog(&self) -> &[ListingRecord] {
        &self.catalog
    }

    /// Run the filter/sort pipeline over the loaded catalog.
    #[must_use]
    pub fn browse(&self, config: &FilterConfig, sort: Option<SortKey>) -> CatalogView<'_> {
        crate::catalog::browse(&self.catalog, config, sort)
    }

    /// Check out the current cart.
    ///
    /// # Errors
    ///
    /// See [`OrderProcessor::checkout`].
    pub fn checkout(
        &mut self,
        form: &CheckoutForm,
    ) -> Result<(Order, Vec<UiEvent>), StorefrontError> {
        self.orders.checkout(&mut self.cart, form)
    }

    /// Events to replay on session (re)start so the display layer locks
    /// affordances for already-adopted pets.
    #[must_use]
    pub fn restore_on_load(&self) -> Vec<UiEvent> {
        self.adoption.restore_on_load()
    }

    /// The cart engine.
    #[must_use]
    pub const fn cart(&self) -> &CartEngine {
        &self.cart
    }

    /// The cart engine, mutably.
    pub const fn cart_mut(&mut self) -> &mut CartEngine {
        &mut self.cart
    }

    /// The adoption tracker.
    #[must_use]
    pub const fn adoption(&self) -> &AdoptionTracker {
        &self.adoption
    }

    /// The adoption tracker, mutably.
    pub const fn adoption_mut(&mut self) -> &mut AdoptionTracker {
        &mut self.adoption
    }

    /// The donation picker, mutably.
    pub const fn donation_mut(&mut self) -> &mut DonationPicker {
        &mut self.donation
    }

    /// The order processor.
    #[must_use]
    pub const fn orders(&self) -> &OrderProcessor {
        &self.orders
    }

    /// The underlying session handle.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Tear down all session state (session end).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] if the emptied cart cannot be persisted.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.cart.clear()?;
        self.session.clear();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nifty_pets_core::{ItemKind, PetId, Price};

    #[test]
    fn new_storefront_hydrates_from_the_session() {
        let session = Session::new();
        {
            let mut first = Storefront::new(session.clone());
            first
                .cart_mut()
                .add_item(
                    "Rex",
                    Price::parse("350").unwrap(),
                    "rex.jpg",
                    PetId::new("p1"),
                    ItemKind::Pet,
                )
                .unwrap();
            first.adoption_mut().mark_adopted(&PetId::new("p2")).unwrap();
        }

        let second = Storefront::new(session);
        assert_eq!(second.cart().item_count(), 1);
        assert!(second.adoption().is_adopted(&PetId::new("p2")));
        assert_eq!(second.restore_on_load().len(), 1);
    }

    #[test]
    fn checkout_goes_through_the_order_processor() {
        let mut storefront = Storefront::new(Session::new());
        storefront
            .cart_mut()
            .add_item(
                "Rex",
                Price::parse("350").unwrap(),
                "rex.jpg",
                PetId::new("p1"),
                ItemKind::Pet,
            )
            .unwrap();

        let form = CheckoutForm {
            name: "Jamie".to_owned(),
            email: "jamie@example.com".to_owned(),
            phone: "(555) 123-4567".to_owned(),
            address: "1 Main Street".to_owned(),
        };
        let (order, _) = storefront.checkout(&form).unwrap();

        assert_eq!(order.total.display(), "350.00");
        assert!(storefront.cart().is_empty());
        assert_eq!(
            storefront.orders().last_order().unwrap().unwrap().id,
            order.id
        );
    }
}
