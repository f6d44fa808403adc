//! # Persisted console session
//!
//! The console trusts a bearer token until the API rejects it. Two keys are
//! kept in client storage:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] | the raw bearer token |
//! | [`USER_KEY`] | the signed-in [`Identity`] as JSON |
//!
//! The token alone decides whether a session exists. An identity record that is
//! missing or fails to parse rehydrates as [`Identity::default`], which carries no
//! role and therefore fails the admin guard without logging the user out.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStorage;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Role value granting access to the management screens.
pub const ADMIN_ROLE: &str = "admin";

/// The signed-in account as returned by the sign-in endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Name, then email, then a generic label.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Administrator")
    }
}

/// Token plus identity, held for the lifetime of a login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user: Identity,
}

impl Session {
    pub fn role(&self) -> &str {
        &self.user.role
    }
}

/// Reads and writes the [`Session`] in a [`KeyValueStorage`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Rehydrate the persisted session, if a token is present.
    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Some(Session { token, user })
    }

    pub fn save(&self, session: &Session) {
        self.storage.set(TOKEN_KEY, &session.token);
        match serde_json::to_string(&session.user) {
            Ok(user) => self.storage.set(USER_KEY, &user),
            Err(_) => self.storage.remove(USER_KEY),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
