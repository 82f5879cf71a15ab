//! Tab-scoped session storage.
//!
//! A small key/value store holding JSON payloads for the lifetime of one
//! browsing session. Engines write through on every mutation and hydrate
//! from it on construction; nothing survives past the session.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Session keys for persisted storefront state.
pub mod session_keys {
    /// Key for the shopping cart (JSON array of cart lines).
    pub const PET_CART: &str = "petCart";

    /// Key for the adopted-pet id set (JSON array of strings).
    pub const ADOPTED_PETS: &str = "adoptedPets";

    /// Key for the most recent order, overwritten each checkout.
    pub const LAST_ORDER: &str = "lastOrder";
}

/// Errors raised by session payload encoding/decoding.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A value could not be serialized for storage.
    #[error("session payload could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),

    /// A stored payload could not be deserialized.
    #[error("session payload could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A cloneable handle to the session's key/value store.
///
/// Clones share the same underlying store, so every engine holding a handle
/// sees every write. Single-threaded by design: the storefront runs on one
/// event loop, so interior mutability via `RefCell` is sufficient.
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Rc<RefCell<HashMap<String, Value>>>,
}

impl Session {
    /// Create a new empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and deserialize the value under `key`, if present.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Decode`] if a stored payload does not match
    /// the requested type.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        self.inner
            .borrow()
            .get(key)
            .map(|value| serde_json::from_value(value.clone()).map_err(SessionError::Decode))
            .transpose()
    }

    /// Serialize `value` and store it under `key`, replacing any previous
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Encode`] if the value cannot be serialized.
    pub fn insert<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        let value = serde_json::to_value(value).map_err(SessionError::Encode)?;
        self.inner.borrow_mut().insert(key.to_owned(), value);
        Ok(())
    }

    /// Remove the value under `key`. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.borrow_mut().remove(key).is_some()
    }

    /// Whether a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// The raw JSON payload under `key`, if present.
    ///
    /// Useful for inspecting the persisted layout without going through a
    /// typed decode.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.inner.borrow().get(key).cloned()
    }

    /// Drop every stored value (session teardown).
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}
