//! Loading and saving the signed-in user from a key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application calls [`init_auth_state`] once at startup and threads the
//! resulting [`AuthState`] through its own state container. Nothing here is
//! cached between calls.
//!
//! ERROR HANDLING
//! ==============
//! A malformed stored value is the only recognised failure. Loaders log it and
//! substitute a fallback; callers never see an error. The two fallbacks differ:
//! a malformed record reads as signed out, while a malformed login flag reads
//! as logged in.
//!
//! KNOWN ISSUE
//! ===========
//! The record and the login flag are decoded from the same key. The flag
//! probably belongs under its own key; the dual read is kept until the
//! integrating app decides.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;
use crate::storage::KeyValueStore;
use crate::user::{UserRecord, sign_out};

/// Storage slot holding the JSON-encoded user record.
pub const DEFAULT_STORAGE_KEY: &str = "gatsbyUser";

/// Current user and login flag as read at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub store: UserRecord,
    pub is_logged_in: bool,
}

impl AuthState {
    /// Read both values from `key`. See [`init_auth_state`].
    #[must_use]
    pub fn load(storage: &dyn KeyValueStore, key: &str) -> Self {
        let (store, is_logged_in) = init_auth_state(storage, key);
        Self { store, is_logged_in }
    }

    /// Read both values from [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn load_default(storage: &dyn KeyValueStore) -> Self {
        Self::load(storage, DEFAULT_STORAGE_KEY)
    }

    /// Persist the record under [`DEFAULT_STORAGE_KEY`].
    pub fn save(&self, storage: &dyn KeyValueStore) {
        save_store(storage, DEFAULT_STORAGE_KEY, self);
    }
}

/// Decode a stored JSON string.
///
/// # Errors
///
/// Returns [`StoreError::MalformedStoredValue`] when `raw` is not valid JSON
/// for `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::MalformedStoredValue)
}

/// User record stored under `key`, or the signed-out record when the slot is
/// empty or malformed.
#[must_use]
pub fn load_record(storage: &dyn KeyValueStore, key: &str) -> UserRecord {
    let Some(raw) = storage.read(key) else {
        return sign_out();
    };
    match parse_json::<UserRecord>(&raw) {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(%key, error = %e, "failed to parse store");
            sign_out()
        }
    }
}

/// Login flag stored under `key`.
///
/// Empty slot is `false`; malformed JSON is `true`. A JSON boolean is returned
/// as is and any other JSON value by its truthiness, so a stored user record
/// counts as logged in.
#[must_use]
pub fn load_login_flag(storage: &dyn KeyValueStore, key: &str) -> bool {
    let Some(raw) = storage.read(key) else {
        return false;
    };
    match parse_json::<Value>(&raw) {
        Ok(value) => is_truthy(&value),
        Err(e) => {
            tracing::warn!(%key, error = %e, "failed to parse store");
            true
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Serialize `record` and write it under `key`.
pub fn persist(storage: &dyn KeyValueStore, key: &str, record: &UserRecord) {
    match serde_json::to_string(record).map_err(StoreError::Serialize) {
        Ok(raw) => {
            tracing::debug!(%key, "persisting user record");
            storage.write(key, &raw);
        }
        Err(e) => tracing::warn!(%key, error = %e, "skipping store write"),
    }
}

/// Persist the record held in `state` under `key`.
pub fn save_store(storage: &dyn KeyValueStore, key: &str, state: &AuthState) {
    persist(storage, key, &state.store);
}

/// Read the user record and login flag from `key`.
///
/// Both values come from the same slot, decoded two ways.
#[must_use]
pub fn init_auth_state(storage: &dyn KeyValueStore, key: &str) -> (UserRecord, bool) {
    let store = load_record(storage, key);
    let is_logged_in = load_login_flag(storage, key);
    (store, is_logged_in)
}
