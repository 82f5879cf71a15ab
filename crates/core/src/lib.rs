//! Nifty Pets Core - Shared types library.
//!
//! This crate provides common types used across all Nifty Pets components:
//! - `storefront` - The session-scoped storefront engine
//! - `cli` - Command-line demo driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phone
//!   numbers, age categories, and cart item kinds

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
