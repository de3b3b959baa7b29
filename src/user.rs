//! Persisted identity of the signed-in user.

use serde::{Deserialize, Serialize};

/// Flat user record stored as JSON in browser storage.
///
/// All fields are strings; the signed-out sentinel has every field empty.
/// Unknown JSON fields are ignored and absent ones default to `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub phone_number_verified: String,
}

/// The all-empty record used whenever no user is stored.
#[must_use]
pub fn sign_out() -> UserRecord {
    UserRecord {
        username: String::new(),
        email: String::new(),
        phone_number: String::new(),
        phone_number_verified: String::new(),
    }
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
