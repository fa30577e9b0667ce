//! User record types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted user profile.
///
/// The `id` is generated by the service on creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Build a record from client-supplied fields under the given id.
    #[must_use]
    pub fn from_new(id: String, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            phone: new_user.phone,
            email: new_user.email,
        }
    }

    /// Build a record from client-supplied fields with a freshly generated id.
    #[must_use]
    pub fn create(new_user: NewUser) -> Self {
        Self::from_new(generate_user_id(), new_user)
    }
}

/// Fields accepted when creating a user.
///
/// Any `id` the client sends is ignored, since unknown fields are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,

    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// Generate a new random user id (hyphenated UUID v4).
#[must_use]
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}
