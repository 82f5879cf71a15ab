//! Nifty Pets Storefront engine.
//!
//! This crate provides the session-scoped storefront state as a library:
//! the shopping cart, checkout, adoption tracking, donation selection, and
//! the listing filter/sort pipeline. The display layer (page rendering,
//! modals, toasts) is an external consumer that drives the engine through
//! [`state::Storefront`] and re-renders from the [`events::UiEvent`]s each
//! operation returns.
//!
//! All state lives for one browsing session: engines write through to a
//! tab-scoped [`session::Session`] on every mutation and hydrate from it on
//! construction, so a page reload within the session reconstructs the same
//! cart and adopted set.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod adoption;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod donation;
pub mod error;
pub mod events;
pub mod orders;
pub mod session;
pub mod state;
