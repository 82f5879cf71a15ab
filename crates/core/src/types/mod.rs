//! Core types for Nifty Pets.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod age;
pub mod email;
pub mod id;
pub mod kind;
pub mod phone;
pub mod price;

pub use age::AgeCategory;
pub use email::{Email, EmailError};
pub use id::*;
pub use kind::ItemKind;
pub use phone::{Phone, PhoneError};
pub use price::{Price, PriceError};
